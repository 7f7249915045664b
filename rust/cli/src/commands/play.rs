//! # Play Command
//!
//! The interactive Gunslinger Loop session: one line from stdin per command,
//! game output on stdout, warnings and logs on stderr.
//!
//! ## Features
//!
//! - Seed, buy-in, starting money and blinds come from the resolved config,
//!   with `--seed` taking precedence
//! - Finished poker hands can be appended to a JSONL hand log
//! - The session ends at EOF or when the loop is broken

use crate::config::{self, ConfigResolved};
use crate::error::CliError;
use crate::io_utils::read_stdin_line;
use crate::ui::{self, TerminalPresenter};
use gunslinger_ai::create_ai;
use gunslinger_engine::logger::HandLogger;
use gunslinger_engine::rules::Blinds;
use gunslinger_world::{Game, GameOptions};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Flags of the `play` subcommand.
#[derive(Debug, Clone)]
pub struct PlayArgs {
    pub seed: Option<u64>,
    pub hand_log: Option<PathBuf>,
    pub echo: bool,
    /// Name passed to [`create_ai`] for the NPC seats.
    pub ai: String,
}

impl Default for PlayArgs {
    fn default() -> Self {
        Self {
            seed: None,
            hand_log: None,
            echo: false,
            ai: "house".to_string(),
        }
    }
}

/// Handle the play command.
///
/// # Returns
///
/// * `Ok(())` when input runs out or the game is won
/// * `Err(CliError)` on invalid configuration, an unknown `--ai` policy, an
///   unwritable hand log, or I/O errors on the output stream
///
/// # Examples
///
/// ```ignore
/// let mut input = std::io::Cursor::new("go east\n");
/// handle_play_command(PlayArgs::default(), &mut out, &mut err, &mut input).unwrap();
/// ```
pub fn handle_play_command(
    args: PlayArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r.with_cli_seed(args.seed),
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(e.into());
        }
    };
    execute_play_command(resolved, args, out, err, stdin)
}

fn execute_play_command(
    resolved: ConfigResolved,
    args: PlayArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = resolved.config;
    let ai = create_ai(&args.ai)
        .ok_or_else(|| CliError::InvalidInput(format!("unknown opponent policy '{}'", args.ai)))?;
    let seed = cfg.seed.unwrap_or_else(rand::random);
    let options = GameOptions {
        buy_in: cfg.buy_in,
        starting_money: cfg.starting_money,
        blinds: Blinds {
            small: cfg.small_blind,
            big: cfg.big_blind,
        },
    };

    let mut hand_log = match &args.hand_log {
        Some(path) => Some(HandLogger::create(path)?),
        None => None,
    };

    writeln!(out, "gunslinger: seed={}", seed)?;
    info!(seed, buy_in = options.buy_in, ai = ai.name(), "session started");

    let mut game = Game::with_options(seed, options).with_ai(ai);
    let mut presenter = TerminalPresenter::new(out).with_echo(args.echo);
    game.start_into(&mut presenter);

    let mut commands = 0u32;
    while game.is_running() {
        presenter.prompt()?;
        let Some(line) = read_stdin_line(stdin) else {
            break;
        };
        if line.is_empty() {
            continue;
        }
        commands += 1;
        debug!(line = %line, "command");
        game.process_command_into(&line, &mut presenter);
        presenter.finish()?;

        if let Some(logger) = hand_log.as_mut() {
            for record in game.take_hand_records() {
                let id = logger.write(&record)?;
                debug!(hand_id = %id, "hand logged");
            }
        }
    }
    presenter.finish()?;

    if game.state().at_table() {
        ui::display_warning(err, "input ended while seated at the poker table")?;
    }
    info!(
        commands,
        loop_counter = game.state().loop_counter,
        won = !game.is_running(),
        "session ended"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Cursor;

    fn clear_env() {
        for key in [
            "GUNSLINGER_CONFIG",
            "GUNSLINGER_SEED",
            "GUNSLINGER_STARTING_MONEY",
            "GUNSLINGER_BUY_IN",
            "GUNSLINGER_LOG",
        ] {
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    fn play(input: &str, args: PlayArgs) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let result = handle_play_command(args, &mut out, &mut err, &mut stdin);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn seeded(seed: u64) -> PlayArgs {
        PlayArgs {
            seed: Some(seed),
            ..PlayArgs::default()
        }
    }

    #[test]
    #[serial]
    fn walks_and_dies() {
        clear_env();
        let (result, out, err) = play("go east\n\ndie\n", seeded(42));
        assert!(result.is_ok());
        assert!(out.starts_with("gunslinger: seed=42\n"));
        assert!(out.contains("Gunslinger Loop I\n"));
        assert!(out.contains("[Main Road]"));
        assert!(out.contains("Gunslinger Loop II\n"));
        assert!(out.contains("! A wild-eyed outlaw draws his pistol"));
        assert!(err.is_empty());
    }

    #[test]
    #[serial]
    fn breaking_the_loop_ends_the_session() {
        clear_env();
        let script = "e\nn\ne\nget tarnished coin\nw\nw\nunlock door\ngo down\nlook\n";
        let (result, out, _) = play(script, seeded(1));
        assert!(result.is_ok());
        assert!(out.contains("--- YOU HAVE BROKEN THE LOOP ---"));
        assert!(out.trim_end().ends_with("Thank you for playing!"));
    }

    #[test]
    #[serial]
    fn echo_repeats_input() {
        clear_env();
        let args = PlayArgs {
            echo: true,
            ..seeded(5)
        };
        let (_, out, _) = play("look\n", args);
        assert!(out.contains("> look\n"));
    }

    #[test]
    #[serial]
    fn hands_go_to_the_log() {
        clear_env();
        unsafe {
            std::env::set_var("GUNSLINGER_STARTING_MONEY", "100");
        }
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hands").join("log.jsonl");
        let args = PlayArgs {
            seed: Some(8),
            hand_log: Some(path.clone()),
            ..seeded(8)
        };
        let (result, out, err) = play("e\nn\nplay poker\nfold\n", args);
        clear_env();

        assert!(result.is_ok());
        assert!(out.contains("--- Round Over ---"));
        assert!(err.is_empty());
        let logged = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = logged.lines().collect();
        assert_eq!(lines.len(), 1);
        let record: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(record["players"][0], "You");
        assert_eq!(record["meta"]["loop"], 1);
    }

    #[test]
    #[serial]
    fn leaving_mid_hand_warns() {
        clear_env();
        unsafe {
            std::env::set_var("GUNSLINGER_STARTING_MONEY", "100");
        }
        let (result, _, err) = play("e\nn\nplay poker\n", seeded(8));
        clear_env();
        assert!(result.is_ok());
        assert_eq!(
            err,
            "WARNING: input ended while seated at the poker table\n"
        );
    }

    #[test]
    #[serial]
    fn unknown_opponent_policy_is_refused() {
        clear_env();
        let args = PlayArgs {
            ai: "shark".to_string(),
            ..seeded(3)
        };
        let (result, out, _) = play("look\n", args);
        match result {
            Err(CliError::InvalidInput(msg)) => assert!(msg.contains("'shark'")),
            other => panic!("expected invalid input, got {:?}", other),
        }
        assert!(out.is_empty());
    }

    #[test]
    #[serial]
    fn invalid_config_is_reported() {
        clear_env();
        unsafe {
            std::env::set_var("GUNSLINGER_BUY_IN", "1");
        }
        let (result, out, err) = play("look\n", seeded(1));
        clear_env();
        assert!(matches!(result, Err(CliError::Config(_))));
        assert!(out.is_empty());
        assert!(err.starts_with("Error: Invalid configuration:"));
    }
}
