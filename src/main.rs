//! Main entry point for the unmtk CLI application.

use clap::Parser;
use std::process::ExitCode;

use unmtk::{Cli, app};

/// Application entry point.
///
/// Fatal errors are printed with an `* error:` prefix and turn into a
/// failure exit status.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match app::run(&cli, &mut std::io::stdout(), &mut std::io::stderr()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("* error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
