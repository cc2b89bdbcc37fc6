pub mod config;
pub mod detect;
pub mod parse;
pub mod show;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "stmtnorm",
    about = "Normalize bank statement spreadsheet exports into ordered transactions."
)]
pub struct Cli {
    /// Log pipeline decisions to stderr (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a statement and print its transactions as JSON.
    Parse {
        /// Path to an .xls, .xlsx or .csv statement
        file: String,
        /// Account label attached to every transaction (default from settings)
        #[arg(long)]
        account: Option<String>,
        /// Write JSON to this path instead of stdout
        #[arg(long, short)]
        output: Option<String>,
        /// Single-line JSON regardless of settings
        #[arg(long)]
        compact: bool,
    },
    /// Parse a statement and show its transactions as a table.
    Show {
        /// Path to an .xls, .xlsx or .csv statement
        file: String,
        /// Account label attached to every transaction (default from settings)
        #[arg(long)]
        account: Option<String>,
    },
    /// Report which row was taken as the column header.
    Detect {
        /// Path to an .xls, .xlsx or .csv statement
        file: String,
    },
    /// View or change settings.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print current settings and where they are stored.
    Show,
    /// Set the default account label.
    SetAccount {
        /// Account label, e.g. 'Rajhi_Ghadeer'
        name: String,
    },
    /// Choose pretty (true) or single-line (false) JSON output.
    SetPretty {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
}
