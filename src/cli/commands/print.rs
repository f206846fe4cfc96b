use std::io::{self, Write};

use anyhow::{Context, Result};

use super::TransformContext;
use crate::cli::{ExitStatus, args::PrintCommand};

pub fn print(cmd: PrintCommand) -> Result<ExitStatus> {
    let context = TransformContext::new(&cmd.common)?;
    let output = context.transform_file(&cmd.file)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.code.as_bytes())
        .context("Failed to write to stdout")?;

    Ok(ExitStatus::Success)
}
