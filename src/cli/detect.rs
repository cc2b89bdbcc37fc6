use std::path::PathBuf;

use crate::document::load_document;
use crate::error::Result;
use crate::header::{locate_header, matched_labels};

pub fn run(file: &str) -> Result<()> {
    let document = load_document(&PathBuf::from(file))?;
    let row = locate_header(&document)?;
    let labels = matched_labels(&document, row);
    let data_rows = document.row_count() - row - 1;

    println!("Header row:  {row} (0-based)");
    println!("Columns:     {}", labels.join(", "));
    println!("Data rows:   {data_rows}");
    Ok(())
}
