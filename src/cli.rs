use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "renum")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Renumber four-digit-prefixed files in the current directory
    Lessons(RunArgs),
    /// Renumber zero-led four-digit-prefixed files under src/javascript
    Scripts(RunArgs),
}

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Override the target directory
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
