use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the stderr subscriber. Stdout is reserved for command output.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "stmtnorm=debug" } else { "stmtnorm=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
