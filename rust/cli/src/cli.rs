//! Command-line argument types.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "pokerhud",
    version,
    about = "PokerStars hand-history importer"
)]
pub struct PokerhudCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse hand-history logs and emit one JSON object per hand
    Import {
        /// Session file or directory of session files
        #[arg(long)]
        input: String,
        /// Write hands here instead of stdout
        #[arg(long)]
        output: Option<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
