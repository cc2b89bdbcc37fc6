mod cli;
mod coerce;
mod document;
mod error;
mod fmt;
mod header;
mod logging;
mod models;
mod normalize;
mod parser;
mod sequence;
mod settings;

use clap::Parser;

use cli::{Cli, Commands, ConfigCommands};

/// Exit status for statements the tool cannot interpret (wrong file type, no header).
const EXIT_INPUT_ERROR: i32 = 2;
const EXIT_PROCESSING_ERROR: i32 = 1;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Parse {
            file,
            account,
            output,
            compact,
        } => cli::parse::run(&file, account.as_deref(), output.as_deref(), compact),
        Commands::Show { file, account } => cli::show::run(&file, account.as_deref()),
        Commands::Detect { file } => cli::detect::run(&file),
        Commands::Config { command } => match command {
            ConfigCommands::Show => cli::config::show(),
            ConfigCommands::SetAccount { name } => cli::config::set_account(&name),
            ConfigCommands::SetPretty { value } => cli::config::set_pretty(value),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        let code = if e.is_input_error() {
            EXIT_INPUT_ERROR
        } else {
            EXIT_PROCESSING_ERROR
        };
        std::process::exit(code);
    }
}
