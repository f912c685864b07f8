//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use pupscore_cli::CliError;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(err) = pupscore_cli::run() {
        if let CliError::ArgumentParsing(parse_err) = &err {
            parse_err.exit();
        }
        report(&err);
        std::process::exit(1);
    }
}

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr before exiting"
)]
fn report(err: &CliError) {
    eprintln!("pupscore: {err}");
}
