use std::path::Path;

use tracing::info;

use crate::document::load_document;
use crate::error::Result;
use crate::header::locate_header;
use crate::models::{RawDocument, Transaction};
use crate::normalize::normalize_rows;
use crate::sequence::sequence;

/// Locate the header, normalize the rows under it and put them in output order.
/// A document whose rows all lack a readable date yields an empty list.
pub fn parse_document(document: &RawDocument, account_name: &str) -> Result<Vec<Transaction>> {
    let header_row = locate_header(document)?;
    let rows = normalize_rows(document, header_row, account_name);
    Ok(sequence(rows))
}

pub fn parse_statement(file_path: &Path, account_name: &str) -> Result<Vec<Transaction>> {
    let document = load_document(file_path)?;
    let transactions = parse_document(&document, account_name)?;
    info!(
        path = %file_path.display(),
        transactions = transactions.len(),
        account = account_name,
        "parsed statement"
    );
    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatementError;
    use crate::models::Cell;

    fn t(v: &str) -> Cell {
        Cell::Text(v.to_string())
    }

    fn write_csv(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_end_to_end_grid() {
        let doc = RawDocument::new(vec![
            vec![t("Account: 1234"), Cell::Empty, Cell::Empty, Cell::Empty],
            vec![t("Date"), t("Credit"), t("Debit"), t("Transaction Details")],
            vec![t("01/01/2024"), Cell::Number(100.0), Cell::Number(0.0), t("Salary")],
            vec![t("02/01/2024"), Cell::Number(0.0), Cell::Number(50.0), t("Rent")],
        ]);
        let out = parse_document(&doc, "Rajhi_Ghadeer").unwrap();
        assert_eq!(
            out,
            vec![
                Transaction {
                    date: "02-01-2024".into(),
                    description: "Rent".into(),
                    amount: -50.0,
                    account_name: "Rajhi_Ghadeer".into(),
                },
                Transaction {
                    date: "01-01-2024".into(),
                    description: "Salary".into(),
                    amount: 100.0,
                    account_name: "Rajhi_Ghadeer".into(),
                },
            ]
        );
    }

    #[test]
    fn test_end_to_end_json_shape() {
        let doc = RawDocument::new(vec![
            vec![t("Date"), t("Credit"), t("Debit"), t("Transaction Details")],
            vec![t("01/01/2024"), Cell::Number(100.0), Cell::Empty, t("Salary")],
        ]);
        let out = parse_document(&doc, "Acct").unwrap();
        let json = serde_json::to_string(&out).unwrap();
        assert_eq!(
            json,
            r#"[{"date":"01-01-2024","description":"Salary","amount":100.0,"account_name":"Acct"}]"#
        );
    }

    #[test]
    fn test_dropped_rows_do_not_shift_tie_breaks() {
        let doc = RawDocument::new(vec![
            vec![t("Date"), t("Credit"), t("Debit"), t("Transaction Details")],
            vec![t("05/01/2024"), t("1"), Cell::Empty, t("first")],
            vec![t("not a date"), t("1"), Cell::Empty, t("junk")],
            vec![Cell::Empty, Cell::Empty, Cell::Empty, Cell::Empty],
            vec![t("05/01/2024"), t("1"), Cell::Empty, t("second")],
            vec![t("04/01/2024"), t("1"), Cell::Empty, t("older")],
        ]);
        let out = parse_document(&doc, "Acct").unwrap();
        let names: Vec<&str> = out.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(names, vec!["second", "first", "older"]);
    }

    #[test]
    fn test_no_valid_dates_is_empty_not_error() {
        let doc = RawDocument::new(vec![
            vec![t("Date"), t("Credit"), t("Debit")],
            vec![t("Opening balance"), t("10"), Cell::Empty],
        ]);
        assert!(parse_document(&doc, "Acct").unwrap().is_empty());
    }

    #[test]
    fn test_header_failure_is_input_error() {
        let doc = RawDocument::new(vec![vec![t("Date"), t("Amount"), t("Narrative")]]);
        let err = parse_document(&doc, "Acct").unwrap_err();
        assert!(matches!(err, StatementError::HeaderNotFound { .. }));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_parse_statement_csv_with_metadata_and_two_detail_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "rajhi.csv",
            "\
Customer Name,GHADEER
Account Number,SA00 8000 0000 0000 0000 0000
Period,01/03/2024 - 31/03/2024
Date,Transaction Details,Transaction Details,Debit,Credit
05/03/2024,POS Purchase,Store ABC,\"1,250.00\",
05/03/2024,Transfer In,,,300
28/02/2024,Fee,,15,
Total,,,\"1,265.00\",300
",
        );
        let out = parse_statement(&path, "Rajhi_Ghadeer").unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].description, "Transfer In");
        assert_eq!(out[0].amount, 300.0);
        assert_eq!(out[1].description, "POS Purchase - Store ABC");
        assert_eq!(out[1].amount, -1250.0);
        assert_eq!(out[1].date, "05-03-2024");
        assert_eq!(out[2].date, "28-02-2024");
        assert_eq!(out[2].amount, -15.0);
    }

    #[test]
    fn test_same_day_rows_order_by_time_of_day() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "timed.csv",
            "\
Date,Transaction Details,Debit,Credit
05/03/2024 18:00,Evening transfer,,10
05/03/2024 09:00,Morning coffee,4,
05/03/2024,Undated-time fee,1,
",
        );
        let out = parse_statement(&path, "Acct").unwrap();
        let names: Vec<&str> = out.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(names, vec!["Evening transfer", "Morning coffee", "Undated-time fee"]);
        assert!(out.iter().all(|t| t.date == "05-03-2024"));
    }

    #[cfg(feature = "xlsx")]
    #[test]
    fn test_parse_statement_xlsx_fixture() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join("rajhi_statement.xlsx");
        let out = parse_statement(&path, "Rajhi_Ghadeer").unwrap();
        assert_eq!(
            out,
            vec![
                Transaction {
                    date: "06-03-2024".into(),
                    description: "Salary".into(),
                    amount: 5000.0,
                    account_name: "Rajhi_Ghadeer".into(),
                },
                Transaction {
                    date: "05-03-2024".into(),
                    description: "Transfer In".into(),
                    amount: 300.0,
                    account_name: "Rajhi_Ghadeer".into(),
                },
                Transaction {
                    date: "05-03-2024".into(),
                    description: "POS Purchase - Store ABC".into(),
                    amount: -1250.5,
                    account_name: "Rajhi_Ghadeer".into(),
                },
                Transaction {
                    date: "04-03-2024".into(),
                    description: "Fee".into(),
                    amount: -15.0,
                    account_name: "Rajhi_Ghadeer".into(),
                },
            ]
        );
    }

    #[test]
    fn test_parse_statement_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "stmt.txt", "Date,Credit,Debit\n");
        let err = parse_statement(&path, "Acct").unwrap_err();
        assert!(err.is_input_error());
    }
}
