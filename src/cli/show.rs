use std::path::PathBuf;

use colored::Colorize;
use comfy_table::{Cell, CellAlignment, Table};

use crate::error::Result;
use crate::fmt::amount;
use crate::models::Transaction;
use crate::parser::parse_statement;
use crate::settings::{load_settings, resolve_account_name};

const UNCATEGORIZED: &str = "Uncategorized";

pub struct Totals {
    pub credits: f64,
    pub debits: f64,
}

impl Totals {
    pub fn net(&self) -> f64 {
        self.credits - self.debits
    }
}

pub fn totals(transactions: &[Transaction]) -> Totals {
    transactions.iter().fold(
        Totals {
            credits: 0.0,
            debits: 0.0,
        },
        |mut acc, t| {
            if t.amount < 0.0 {
                acc.debits += -t.amount;
            } else {
                acc.credits += t.amount;
            }
            acc
        },
    )
}

pub fn format_transactions(account_name: &str, transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return format!("{account_name}\nNo transactions found.");
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Description", "Amount", "Category"]);
    for t in transactions {
        let value = amount(t.amount);
        let value = if t.amount < 0.0 {
            value.red().bold()
        } else {
            value.green().bold()
        };
        table.add_row(vec![
            Cell::new(&t.date),
            Cell::new(&t.description),
            Cell::new(value).set_alignment(CellAlignment::Right),
            Cell::new(UNCATEGORIZED),
        ]);
    }

    let sums = totals(transactions);
    format!(
        "{account_name}\n{table}\n{} transactions  credits {}  debits {}  net {}",
        transactions.len(),
        amount(sums.credits),
        amount(sums.debits),
        amount(sums.net()).bold()
    )
}

pub fn run(file: &str, account: Option<&str>) -> Result<()> {
    let settings = load_settings();
    let account_name = resolve_account_name(account, &settings);
    let transactions = parse_statement(&PathBuf::from(file), &account_name)?;
    println!("{}", format_transactions(&account_name, &transactions));
    Ok(())
}
