use tracing::debug;

use crate::coerce::{cell_text, coerce_amount, coerce_date};
use crate::models::{Cell, ParsedRow, RawDocument};

pub const DATE_COLUMN: &str = "Date";
pub const CREDIT_COLUMN: &str = "Credit";
pub const DEBIT_COLUMN: &str = "Debit";
pub const DETAILS_COLUMN: &str = "Transaction Details";

const DETAILS_SEPARATOR: &str = " - ";

// ---------------------------------------------------------------------------
// Positional table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Column {
    pub label: String,
    pub values: Vec<Cell>,
}

/// Rows below the header, stored column by column in sheet order.
/// Labels are not unique, so lookups are positional.
#[derive(Debug, Clone)]
pub struct Table {
    pub columns: Vec<Column>,
    pub len: usize,
}

fn same_label(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

impl Table {
    pub fn from_document(document: &RawDocument, header_row: usize) -> Self {
        let body = (header_row + 1)..document.row_count();
        let columns = (0..document.width())
            .map(|col| Column {
                label: cell_text(document.cell(header_row, col)).trim().to_string(),
                values: body.clone().map(|row| document.cell(row, col).clone()).collect(),
            })
            .collect();
        Self {
            columns,
            len: body.len(),
        }
    }

    /// Every column carrying `label`, left to right.
    pub fn columns_named<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a Column> + 'a {
        self.columns.iter().filter(move |c| same_label(&c.label, label))
    }

    /// First column carrying `label`.
    pub fn column(&self, label: &str) -> Option<&Column> {
        self.columns.iter().find(|c| same_label(&c.label, label))
    }
}

fn value_at(column: Option<&Column>, row: usize) -> &Cell {
    static EMPTY: Cell = Cell::Empty;
    column.and_then(|c| c.values.get(row)).unwrap_or(&EMPTY)
}

// ---------------------------------------------------------------------------
// Field rules
// ---------------------------------------------------------------------------

/// Join primary and secondary details with " - ", trimming the result and
/// dropping a dangling separator left by a blank secondary. A blank primary
/// keeps its leading "- ".
pub fn merge_details(primary: &str, secondary: &str) -> String {
    let joined = format!("{primary}{DETAILS_SEPARATOR}{secondary}");
    let joined = joined.trim();
    match joined.strip_suffix(DETAILS_SEPARATOR.trim_end()) {
        Some(rest) => rest.trim_end().to_string(),
        None => joined.to_string(),
    }
}

fn describe(primary: Option<&Column>, secondary: Option<&Column>, row: usize) -> String {
    match (primary, secondary) {
        (Some(_), Some(_)) => merge_details(
            &cell_text(value_at(primary, row)),
            &cell_text(value_at(secondary, row)),
        ),
        (Some(_), None) => cell_text(value_at(primary, row)),
        _ => String::new(),
    }
}

// ---------------------------------------------------------------------------
// normalize_rows
// ---------------------------------------------------------------------------

/// Re-read everything below `header_row` and keep the rows whose date parses.
pub fn normalize_rows(document: &RawDocument, header_row: usize, account_name: &str) -> Vec<ParsedRow> {
    let table = Table::from_document(document, header_row);

    let date = table.column(DATE_COLUMN);
    let credit = table.column(CREDIT_COLUMN);
    let debit = table.column(DEBIT_COLUMN);
    let mut details = table.columns_named(DETAILS_COLUMN);
    let primary = details.next();
    let secondary = details.next();

    if date.is_none() {
        debug!(header_row, "header has no Date column; every row will be dropped");
    }

    let mut rows = Vec::with_capacity(table.len);
    for orig_idx in 0..table.len {
        let Some(parsed_date) = coerce_date(value_at(date, orig_idx)) else {
            continue;
        };
        let amount = coerce_amount(value_at(credit, orig_idx)) - coerce_amount(value_at(debit, orig_idx));
        rows.push(ParsedRow {
            orig_idx,
            parsed_date,
            description: describe(primary, secondary, orig_idx),
            amount,
            account_name: account_name.to_string(),
        });
    }

    debug!(
        data_rows = table.len,
        kept = rows.len(),
        dropped = table.len - rows.len(),
        "normalized statement rows"
    );
    rows
}
