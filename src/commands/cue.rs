use clap::Parser;
use std::path::PathBuf;

/// Rewrites a .cue file in canonical form.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct FormatCommand {
    /// Input .cue file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output .cue file, stdout if omitted
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Force overwrite of the output file if it already exists
    #[arg(long, short = 'f', value_name = "FORCE", default_value_t = false)]
    pub force: bool,
}

/// Shows disc metadata and the track list of a .cue file.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct InfoCommand {
    /// Input .cue file
    pub input: PathBuf,
}

/// Prints the parsed .cue file as JSON.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct DumpCommand {
    /// Input .cue file
    pub input: PathBuf,
}
