//! # Gunslinger CLI Library
//!
//! The terminal front end of Gunslinger Loop. It runs the text adventure
//! against stdin/stdout and exposes a few poker utilities.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["gunslinger", "play", "--seed", "42"];
//! let code = gunslinger_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play the game, one command per stdin line (the default)
//! - `deal`: Deal a four-seat hand for inspection
//! - `eval`: Evaluate the best hand among 5 to 7 cards
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

#[macro_use]
mod macros;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::{Commands, GunslingerCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_play_command, PlayArgs,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
/// Without a subcommand the game is played.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// let args = vec!["gunslinger", "deal", "--seed", "42"];
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = gunslinger_cli::run(args, &mut out, &mut err);
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().starts_with("Seed: 42"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "deal", "eval", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match GunslingerCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    write_or_exit!(out, "{}", e);
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Usage: gunslinger <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: gunslinger --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd.unwrap_or(Commands::Play {
        seed: None,
        hand_log: None,
        echo: false,
        ai: "house".to_string(),
    }) {
        Commands::Play {
            seed,
            hand_log,
            echo,
            ai,
        } => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            let args = PlayArgs {
                seed,
                hand_log,
                echo,
                ai,
            };
            handle_play_command(args, out, err, &mut stdin_lock)
        }
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Config(_)) => exit_code::ERROR,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(args, &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn every_subcommand_parses() {
        for args in [
            vec!["gunslinger"],
            vec!["gunslinger", "play", "--seed", "3", "--hand-log", "h.jsonl"],
            vec!["gunslinger", "deal"],
            vec!["gunslinger", "eval", "As", "Ah", "Ad", "Ks", "Kh"],
            vec!["gunslinger", "cfg"],
        ] {
            assert!(GunslingerCli::try_parse_from(&args).is_ok(), "{args:?}");
        }
    }

    #[test]
    fn eval_needs_cards() {
        assert!(GunslingerCli::try_parse_from(["gunslinger", "eval"]).is_err());
    }

    #[test]
    fn unknown_subcommand_lists_commands() {
        let (code, out, err) = run_args(&["gunslinger", "shoot"]);
        assert_eq!(code, exit_code::ERROR);
        assert!(out.is_empty());
        assert!(err.contains("Commands:"));
        assert!(err.contains("  deal"));
    }

    #[test]
    fn help_goes_to_stdout() {
        let (code, out, _) = run_args(&["gunslinger", "--help"]);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(out.contains("Usage"));
    }

    #[test]
    fn engine_input_errors_exit_with_two() {
        let (code, out, err) = run_args(&["gunslinger", "eval", "A♠", "2♥"]);
        assert_eq!(code, exit_code::ERROR);
        assert!(out.is_empty());
        assert_eq!(err, "Error: Invalid input: eval needs 5 to 7 cards, got 2\n");
    }

    #[test]
    fn eval_through_run() {
        let (code, out, _) = run_args(&["gunslinger", "eval", "A♠,2♥,3♦,4♣,5♠"]);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(out.contains("Best hand: Straight"));
    }
}
