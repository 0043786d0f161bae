mod candidate;
mod cli;
mod dir_scanner;
mod error;
mod logging;
mod matcher;
mod tui;
mod workflow;

use clap::{CommandFactory, Parser};
use error::{EXIT_CANCELLED, FcdError};
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();

    let cli_args = cli::Cli::parse();

    // Delegate the main application logic to the workflow module
    match workflow::run_fcd(cli_args) {
        Ok(workflow::Outcome::Selected(path)) => match print_path(&path) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("failed to write the selected path: {e}");
                ExitCode::FAILURE
            }
        },
        Ok(workflow::Outcome::Cancelled) => ExitCode::from(EXIT_CANCELLED),
        Err(err) => report(err),
    }
}

fn print_path(path: &Path) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(path.as_os_str().as_encoded_bytes())?;
    stdout.write_all(b"\n")?;
    stdout.flush()
}

fn report(err: anyhow::Error) -> ExitCode {
    let Some(fcd_err) = err.downcast_ref::<FcdError>() else {
        eprintln!("Error: {err:#}");
        return ExitCode::FAILURE;
    };

    eprintln!("{fcd_err}");
    if matches!(fcd_err, FcdError::MissingPattern) {
        eprintln!("{}", cli::Cli::command().render_help());
    }
    ExitCode::from(fcd_err.exit_code())
}
