//! Command-line interface definition.

use std::io;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::app::report::ReportFormat;

/// Sort an integer sequence and locate a target via binary search.
#[derive(Debug, Parser)]
#[command(name = "seqprobe", version, about)]
pub struct Cli {
    /// Integers to sort; read from standard input when omitted.
    #[arg(allow_negative_numbers = true)]
    pub sequence: Vec<i64>,

    /// Target value to look up; prompted for interactively when omitted.
    #[arg(short, long, allow_negative_numbers = true)]
    pub target: Option<i64>,

    /// Output format, overriding the configured default.
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate shell completions on standard output.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn print_completions(shell: Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
}
