// Entrypoint for the CLI.
// - Sets up stderr logging, parses flags and hands off to `Cli::run`.
// - Any fetch or decode failure ends up here and becomes one error line on
//   stderr and a nonzero exit, whatever the log filter says.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use realmstatus::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
