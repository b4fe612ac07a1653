use std::process::ExitCode;

use clap::Parser;
use texttable::cli::{Arguments, ExitStatus};
use tracing::Level;

fn main() -> ExitCode {
    let args = Arguments::parse();

    // Diagnostics are already part of the report; the log is for -v only.
    if args.verbose() {
        let _ = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(Level::DEBUG)
            .with_target(false)
            .try_init();
    }

    match texttable::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
