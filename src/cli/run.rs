use anyhow::Result;

use super::{
    ExitStatus,
    args::{Arguments, Command},
    commands::{init::init, print::print, transform::transform},
};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Transform(cmd)) => transform(cmd),
        Some(Command::Print(cmd)) => print(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
