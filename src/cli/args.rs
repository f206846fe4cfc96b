//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `transform`: Inject file and line into `Log.traceable` calls
//! - `print`: Print one transformed file to stdout
//! - `init`: Initialize bulbul configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Transform(cmd)) => cmd.common.verbose,
            Some(Command::Print(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by the transform commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory paths are made relative to (overrides config file)
    #[arg(long, env = "BULBUL_CWD")]
    pub cwd: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct TransformCommand {
    /// Files or directories to transform (default: config includes)
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct PrintCommand {
    /// File to transform
    pub file: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Inject file path and line number into Log.traceable() calls
    Transform(TransformCommand),
    /// Print a transformed file to stdout
    Print(PrintCommand),
    /// Initialize a new .bulbulrc.json configuration file
    Init,
}
