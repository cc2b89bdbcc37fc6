use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use crate::models::Cell;

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

/// Display text of a cell. Integral numbers print without a fractional part.
pub fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Empty => String::new(),
        Cell::Text(s) => s.clone(),
        Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
        Cell::Number(n) => n.to_string(),
        Cell::Bool(b) => b.to_string(),
        Cell::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
    }
}

// ---------------------------------------------------------------------------
// Amounts
// ---------------------------------------------------------------------------

/// Plain decimal text after stripping thousands separators, quotes and `$`.
/// Accounting-style `(50.00)` is not a number here and counts as zero.
pub fn parse_amount(raw: &str) -> f64 {
    let s = raw.replace(',', "").replace('"', "").replace('$', "");
    finite_or_zero(s.trim().parse().unwrap_or(0.0))
}

fn finite_or_zero(n: f64) -> f64 {
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// Numeric value of a credit/debit cell; anything non-numeric counts as zero.
pub fn coerce_amount(cell: &Cell) -> f64 {
    match cell {
        Cell::Number(n) => finite_or_zero(*n),
        Cell::Text(s) => parse_amount(s),
        Cell::Empty | Cell::Bool(_) | Cell::DateTime(_) => 0.0,
    }
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

fn numeric_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d{1,4})[/.\-](\d{1,2})[/.\-](\d{1,4})(?:[ T]+(\S.*))?$")
            .expect("numeric date pattern is valid")
    })
}

const TEXTUAL_FORMATS: &[&str] = &[
    "%d %b %Y",
    "%d-%b-%Y",
    "%d %B %Y",
    "%d-%B-%Y",
    "%d %b %y",
    "%d-%b-%y",
    "%b %d, %Y",
    "%B %d, %Y",
];

const TIME_FORMATS: &[&str] = &[
    "%H:%M:%S",
    "%H:%M:%S%.f",
    "%H:%M",
    "%I:%M:%S %p",
    "%I:%M %p",
    "%I:%M%p",
];

fn expand_year(raw: &str) -> Option<i32> {
    let y: i32 = raw.parse().ok()?;
    match raw.len() {
        1 | 2 if y < 70 => Some(2000 + y),
        1 | 2 => Some(1900 + y),
        4 => Some(y),
        _ => None,
    }
}

/// Time of day following a numeric date. Zone suffixes (`Z`, `+03:00`) are dropped;
/// anything unreadable is treated as midnight.
fn parse_time_of_day(raw: Option<&str>) -> NaiveTime {
    let Some(raw) = raw.map(str::trim) else {
        return NaiveTime::MIN;
    };
    let raw = raw.trim_end_matches('Z');
    let raw = match raw.rfind(['+', '-']) {
        Some(pos) if pos > 0 && raw[..pos].contains(':') => &raw[..pos],
        _ => raw,
    };
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(raw.trim(), fmt).ok())
        .unwrap_or(NaiveTime::MIN)
}

/// Parse a date written as text, reading ambiguous numeric dates day-first.
/// A time after a numeric date is kept; dates without one land on midnight.
pub fn parse_date_dayfirst(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(caps) = numeric_date_re().captures(raw) {
        let (a, b, c) = (&caps[1], &caps[2], &caps[3]);
        let time = parse_time_of_day(caps.get(4).map(|m| m.as_str()));
        let date = if a.len() == 4 {
            let y: i32 = a.parse().ok()?;
            let m: u32 = b.parse().ok()?;
            let d: u32 = c.parse().ok()?;
            NaiveDate::from_ymd_opt(y, m, d)
        } else if a.len() > 2 {
            None
        } else {
            let first: u32 = a.parse().ok()?;
            let second: u32 = b.parse().ok()?;
            let y = expand_year(c)?;
            // Month-first only when the day-first reading is not a real date (e.g. 03/25/2024).
            NaiveDate::from_ymd_opt(y, second, first)
                .or_else(|| NaiveDate::from_ymd_opt(y, first, second))
        };
        return date.map(|d| d.and_time(time));
    }

    TEXTUAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Excel epoch is 1899-12-30 (accounting for the 1900 leap year bug).
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    // 2958465 is 9999-12-31, the last date Excel can represent.
    if !(0.0..2_958_466.0).contains(&serial) {
        return None;
    }
    let base = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let millis = (serial * 86_400_000.0).round() as i64;
    base.checked_add_signed(chrono::Duration::milliseconds(millis))
}

/// Timestamp of a date cell, or `None` when the cell is not a date.
pub fn coerce_date(cell: &Cell) -> Option<NaiveDateTime> {
    match cell {
        Cell::DateTime(dt) => Some(*dt),
        Cell::Text(s) => parse_date_dayfirst(s),
        Cell::Empty | Cell::Number(_) | Cell::Bool(_) => None,
    }
}
