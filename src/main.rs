use crate::actions::{dump_json, format_cue, show_info};
use crate::commands::{Cli, Commands};
use anyhow::Result;
use clap::Parser;

mod actions;
mod commands;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Format(cmd) => format_cue(&cmd.input, cmd.output.as_deref(), cmd.force).await?,
        Commands::Info(cmd) => show_info(&cmd.input).await?,
        Commands::Dump(cmd) => dump_json(&cmd.input).await?,
    }

    Ok(())
}
