use std::path::PathBuf;

use crate::error::{Result, StatementError};
use crate::parser::parse_statement;
use crate::settings::{load_settings, resolve_account_name};

pub fn run(file: &str, account: Option<&str>, output: Option<&str>, compact: bool) -> Result<()> {
    let settings = load_settings();
    let account_name = resolve_account_name(account, &settings);
    let transactions = parse_statement(&PathBuf::from(file), &account_name)?;

    let encoded = if compact || !settings.pretty_json {
        serde_json::to_string(&transactions)
    } else {
        serde_json::to_string_pretty(&transactions)
    };
    let json = encoded.map_err(|e| StatementError::Other(format!("Failed to encode JSON: {e}")))?;

    match output {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))?;
            eprintln!("{} transactions written to {path}", transactions.len());
        }
        None => println!("{json}"),
    }
    Ok(())
}
