use crate::commands::cue::{DumpCommand, FormatCommand, InfoCommand};
use clap::{Parser, Subcommand};

pub mod cue;

/// CLI for reading, normalizing and inspecting CUE sheets.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Format(FormatCommand),
    Info(InfoCommand),
    Dump(DumpCommand),
}
