//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use compass_cli::CliError;
use tracing_subscriber::EnvFilter;

#[expect(clippy::print_stderr, reason = "the binary reports fatal errors on stderr")]
fn main() {
    init_logging();
    match compass_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("compass: {err}");
            std::process::exit(1);
        }
    }
}

/// Route `log` and `tracing` records to stderr, filtered by `RUST_LOG`.
#[expect(clippy::print_stderr, reason = "logging is unavailable when its setup fails")]
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("compass: logging disabled: {err}");
    }
}
