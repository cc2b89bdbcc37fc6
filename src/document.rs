use std::path::Path;

use tracing::debug;

use crate::error::{Result, StatementError};
use crate::models::{Cell, RawDocument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Csv,
    Excel,
}

impl DocumentKind {
    pub fn from_path(file_path: &Path) -> Result<Self> {
        let ext = file_path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "csv" => Ok(Self::Csv),
            "xls" | "xlsx" => Ok(Self::Excel),
            "" => Err(StatementError::UnsupportedFileType("(no extension)".into())),
            other => Err(StatementError::UnsupportedFileType(format!(".{other}"))),
        }
    }
}

/// Read the whole file into memory. The file handle is closed before returning.
pub fn load_document(file_path: &Path) -> Result<RawDocument> {
    let kind = DocumentKind::from_path(file_path)?;
    let doc = match kind {
        DocumentKind::Csv => read_csv(file_path)?,
        DocumentKind::Excel => read_excel(file_path)?,
    };
    debug!(
        path = %file_path.display(),
        ?kind,
        rows = doc.row_count(),
        "loaded statement document"
    );
    Ok(doc)
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

fn csv_cell(raw: &[u8]) -> Cell {
    let text = String::from_utf8_lossy(raw);
    if text.trim().is_empty() {
        Cell::Empty
    } else {
        Cell::Text(text.into_owned())
    }
}

pub fn read_csv(file_path: &Path) -> Result<RawDocument> {
    let file = std::fs::File::open(file_path)?;
    parse_csv(std::io::BufReader::new(file))
}

pub fn parse_csv<R: std::io::Read>(reader: R) -> Result<RawDocument> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut rows = Vec::new();
    for result in rdr.byte_records() {
        let record = result?;
        let mut row: Vec<Cell> = record.iter().map(csv_cell).collect();
        if rows.is_empty() {
            if let Some(Cell::Text(first)) = row.first_mut() {
                if let Some(stripped) = first.strip_prefix('\u{feff}') {
                    *first = stripped.to_string();
                }
            }
        }
        rows.push(row);
    }
    Ok(RawDocument::new(rows))
}

// ---------------------------------------------------------------------------
// Excel (feature-gated)
// ---------------------------------------------------------------------------

#[cfg(feature = "xlsx")]
fn excel_cell(data: &calamine::Data) -> Cell {
    use calamine::Data;

    use crate::coerce::excel_serial_to_datetime;

    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) if s.trim().is_empty() => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => excel_serial_to_datetime(dt.as_f64())
            .map(Cell::DateTime)
            .unwrap_or(Cell::Empty),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(_) => Cell::Empty,
    }
}

#[cfg(feature = "xlsx")]
pub fn read_excel(file_path: &Path) -> Result<RawDocument> {
    use calamine::Reader;

    let mut workbook = calamine::open_workbook_auto(file_path)?;
    let Some(sheet) = workbook.sheet_names().first().cloned() else {
        return Err(StatementError::EmptyWorkbook(file_path.display().to_string()));
    };
    let range = workbook.worksheet_range(&sheet)?;

    // Ranges start at the first used cell; keep absolute positions so blank
    // leading rows still count toward the header scan window.
    let Some((end_row, end_col)) = range.end() else {
        return Ok(RawDocument::default());
    };
    let rows = (0..=end_row)
        .map(|r| {
            (0..=end_col)
                .map(|c| range.get_value((r, c)).map(excel_cell).unwrap_or(Cell::Empty))
                .collect()
        })
        .collect();
    Ok(RawDocument::new(rows))
}

#[cfg(not(feature = "xlsx"))]
pub fn read_excel(file_path: &Path) -> Result<RawDocument> {
    Err(StatementError::Other(format!(
        "{}: spreadsheet support was not compiled in (enable the `xlsx` feature)",
        file_path.display()
    )))
}
