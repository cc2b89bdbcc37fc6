use tracing::debug;

use crate::coerce::cell_text;
use crate::error::{Result, StatementError};
use crate::models::RawDocument;

pub const EXPECTED_COLUMNS: &[&str] = &["Date", "Credit", "Debit", "Transaction Details"];

/// Rows examined when looking for the header, counted from the top of the sheet.
pub const HEADER_SCAN_ROWS: usize = 20;

/// Minimum number of expected labels a row must mention to count as the header.
pub const HEADER_MATCH_THRESHOLD: usize = 3;

/// Expected labels that appear (case-insensitive substring) in at least one cell of `row`.
pub fn matched_labels(document: &RawDocument, row: usize) -> Vec<&'static str> {
    let values: Vec<String> = document
        .row(row)
        .iter()
        .map(|c| cell_text(c).trim().to_lowercase())
        .collect();
    EXPECTED_COLUMNS
        .iter()
        .copied()
        .filter(|label| {
            let needle = label.to_lowercase();
            values.iter().any(|v| v.contains(&needle))
        })
        .collect()
}

/// Index of the first row among the leading rows that names enough expected columns.
pub fn locate_header(document: &RawDocument) -> Result<usize> {
    let window = document.row_count().min(HEADER_SCAN_ROWS);
    for idx in 0..window {
        let matches = matched_labels(document, idx);
        if matches.len() >= HEADER_MATCH_THRESHOLD {
            debug!(row = idx, labels = ?matches, "located header row");
            return Ok(idx);
        }
    }
    debug!(scanned = window, "no header row found");
    Err(StatementError::HeaderNotFound {
        expected: EXPECTED_COLUMNS.iter().map(|s| s.to_string()).collect(),
    })
}
