//! Hand evaluation command.
//!
//! Parses 5 to 7 cards from the command line and prints the best five-card
//! hand they make.

use crate::error::CliError;
use gunslinger_engine::cards::{format_cards, parse_cards};
use gunslinger_engine::hand::best_hand;
use std::io::Write;

/// Handle the eval command.
///
/// Cards may be given as separate arguments or comma separated, with suit
/// symbols (`A♠`) or letters (`As`, `Td`).
///
/// # Errors
///
/// Returns `CliError::InvalidInput` for an unparseable card, a repeated card,
/// or fewer than 5 / more than 7 cards.
pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_cards(&cards.join(" ")).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    if !(5..=7).contains(&cards.len()) {
        return Err(CliError::InvalidInput(format!(
            "eval needs 5 to 7 cards, got {}",
            cards.len()
        )));
    }
    for (i, c) in cards.iter().enumerate() {
        if cards[..i].contains(c) {
            return Err(CliError::InvalidInput(format!("duplicate card: {}", c)));
        }
    }

    let hand = best_hand(&cards)
        .ok_or_else(|| CliError::InvalidInput("not enough cards".to_string()))?;
    writeln!(out, "Cards: {}", format_cards(&cards))?;
    writeln!(out, "Best hand: {} ({})", hand.name(), format_cards(&hand.cards))?;
    writeln!(
        out,
        "Values: {}",
        hand.values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    )?;
    Ok(())
}
