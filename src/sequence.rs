use std::cmp::Reverse;

use crate::models::{ParsedRow, Transaction};

/// Newest first; rows with the same timestamp put the one further down the sheet first.
pub fn sequence(mut rows: Vec<ParsedRow>) -> Vec<Transaction> {
    rows.sort_by_key(|r| (Reverse(r.parsed_date), Reverse(r.orig_idx)));
    rows.into_iter().map(ParsedRow::into_transaction).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(orig_idx: usize, y: i32, m: u32, d: u32, description: &str) -> ParsedRow {
        row_at(orig_idx, y, m, d, 0, description)
    }

    fn row_at(orig_idx: usize, y: i32, m: u32, d: u32, hour: u32, description: &str) -> ParsedRow {
        ParsedRow {
            orig_idx,
            parsed_date: NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            description: description.to_string(),
            amount: 1.0,
            account_name: "Acct".to_string(),
        }
    }

    #[test]
    fn test_ties_break_on_descending_orig_idx() {
        let out = sequence(vec![row(3, 2024, 1, 5, "three"), row(7, 2024, 1, 5, "seven")]);
        let names: Vec<&str> = out.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(names, vec!["seven", "three"]);
    }

    #[test]
    fn test_later_date_wins_regardless_of_position() {
        let out = sequence(vec![
            row(9, 2024, 1, 1, "early"),
            row(0, 2024, 2, 1, "late"),
            row(4, 2023, 12, 31, "earliest"),
        ]);
        let names: Vec<&str> = out.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(names, vec!["late", "early", "earliest"]);
    }

    #[test]
    fn test_time_of_day_orders_before_position() {
        let out = sequence(vec![
            row_at(0, 2024, 3, 5, 18, "evening"),
            row_at(1, 2024, 3, 5, 9, "morning"),
        ]);
        let names: Vec<&str> = out.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(names, vec!["evening", "morning"]);
        assert_eq!(out[0].date, "05-03-2024");
        assert_eq!(out[1].date, "05-03-2024");
    }

    #[test]
    fn test_projection_formats_date_day_month_year() {
        let out = sequence(vec![row_at(0, 2024, 3, 5, 23, "x")]);
        assert_eq!(
            out[0],
            Transaction {
                date: "05-03-2024".into(),
                description: "x".into(),
                amount: 1.0,
                account_name: "Acct".into(),
            }
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(sequence(Vec::new()).is_empty());
    }
}
