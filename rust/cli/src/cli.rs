//! Command-line surface of the `gunslinger` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gunslinger",
    version,
    about = "Gunslinger Loop: a text adventure with a poker table in it"
)]
pub struct GunslingerCli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play the game, reading commands from stdin (the default)
    Play {
        #[arg(long)]
        seed: Option<u64>,
        /// Append every finished poker hand to this JSONL file
        #[arg(long)]
        hand_log: Option<PathBuf>,
        /// Repeat each input line before its output
        #[arg(long)]
        echo: bool,
        /// Policy driving the other seats at the poker table
        #[arg(long, default_value = "house")]
        ai: String,
    },
    /// Deal a four-seat hand and show who would win it
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Best hand out of 5 to 7 cards, e.g. `eval As Ah Ad Ks Kh 2c 3d`
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Print the resolved configuration and where each value came from
    Cfg,
}
