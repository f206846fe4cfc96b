use std::process::ExitCode;

use clap::Parser;
use bulbul::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();
    bulbul::cli::init_tracing(args.verbose());

    match bulbul::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
