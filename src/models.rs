use chrono::NaiveDateTime;
use serde::Serialize;

/// A single untyped spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
}

/// The whole sheet as read from disk. Rows may be ragged; missing cells read as empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDocument {
    rows: Vec<Vec<Cell>>,
}

static EMPTY: Cell = Cell::Empty;

impl RawDocument {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        self.rows.get(row).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.row(row).get(col).unwrap_or(&EMPTY)
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// A data row that survived date parsing, still carrying its sort keys.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    pub orig_idx: usize,
    /// Date and time of day; the output keeps only the date.
    pub parsed_date: NaiveDateTime,
    pub description: String,
    pub amount: f64,
    pub account_name: String,
}

/// Output record. Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub date: String,
    pub description: String,
    pub amount: f64,
    pub account_name: String,
}

impl ParsedRow {
    pub fn into_transaction(self) -> Transaction {
        Transaction {
            date: self.parsed_date.format("%d-%m-%Y").to_string(),
            description: self.description,
            amount: self.amount,
            account_name: self.account_name,
        }
    }
}
