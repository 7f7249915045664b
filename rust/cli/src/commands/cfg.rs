//! Configuration command handler.
//!
//! Prints the resolved configuration with the source of every value
//! (default, file, env or cli).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "buy_in": {
//!     "value": 10,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "starting_money": {
            "value": config.starting_money,
            "source": sources.starting_money,
        },
        "buy_in": {
            "value": config.buy_in,
            "source": sources.buy_in,
        },
        "small_blind": {
            "value": config.small_blind,
            "source": sources.small_blind,
        },
        "big_blind": {
            "value": config.big_blind,
            "source": sources.big_blind,
        },
        "log_filter": {
            "value": config.log_filter,
            "source": sources.log_filter,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_cfg_displays_json_output() {
        unsafe {
            std::env::remove_var("GUNSLINGER_CONFIG");
            std::env::set_var("GUNSLINGER_STARTING_MONEY", "40");
        }
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_cfg_command(&mut out, &mut err);
        unsafe {
            std::env::remove_var("GUNSLINGER_STARTING_MONEY");
        }

        assert!(result.is_ok(), "cfg command should succeed");
        let output = String::from_utf8(out).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["starting_money"]["value"], 40);
        assert_eq!(json["starting_money"]["source"], "env");
        assert_eq!(json["buy_in"]["value"], 10);
        assert_eq!(json["buy_in"]["source"], "default");
        assert!(err.is_empty(), "should not write to stderr on success");
    }

    #[test]
    #[serial]
    fn test_cfg_reports_invalid_configuration() {
        unsafe {
            std::env::set_var("GUNSLINGER_SEED", "not-a-number");
        }
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_cfg_command(&mut out, &mut err);
        unsafe {
            std::env::remove_var("GUNSLINGER_SEED");
        }

        assert!(matches!(result, Err(CliError::Config(_))));
        assert!(out.is_empty());
        let error_output = String::from_utf8(err).unwrap();
        assert!(error_output.starts_with("Error: Invalid configuration: Invalid seed"));
    }
}
