//! Deal command handler.
//!
//! Shuffles a deck, deals two cards to each of the four saloon seats and a
//! five-card board, and names the seat holding the best hand. With `--seed`
//! the deal is reproducible.

use crate::error::CliError;
use gunslinger_engine::cards::format_cards;
use gunslinger_engine::deck::Deck;
use gunslinger_engine::hand::{best_hand, compare_hands, Hand};
use gunslinger_world::poker::seat_players;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::cmp::Ordering;
use std::io::Write;

/// Handle the deal command.
///
/// # Examples
///
/// ```ignore
/// // Internal command handler - not part of public API
/// let mut out = Vec::new();
/// handle_deal_command(Some(42), &mut out).unwrap();
/// ```
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut deck = Deck::new();
    deck.shuffle(&mut rng);

    let names: Vec<String> = seat_players(0, Vec::new())
        .into_iter()
        .map(|p| p.name)
        .collect();
    let mut holes = Vec::with_capacity(names.len());
    for _ in &names {
        holes.push(deck.deal(2)?);
    }
    let board = deck.deal(5)?;

    writeln!(out, "Seed: {}", seed)?;
    let mut best: Vec<(usize, Hand)> = Vec::new();
    for (seat, (name, hole)) in names.iter().zip(&holes).enumerate() {
        let mut seven = hole.clone();
        seven.extend_from_slice(&board);
        let hand = best_hand(&seven)
            .ok_or_else(|| CliError::Engine("a seat ended up without a hand".to_string()))?;
        writeln!(out, "{}: {} ({})", name, format_cards(hole), hand.name())?;
        match best.first().map(|(_, b)| compare_hands(&hand, b)) {
            None | Some(Ordering::Equal) => best.push((seat, hand)),
            Some(Ordering::Greater) => best = vec![(seat, hand)],
            Some(Ordering::Less) => {}
        }
    }
    writeln!(out, "Board: {}", format_cards(&board))?;
    let winners: Vec<&str> = best.iter().map(|(seat, _)| names[*seat].as_str()).collect();
    let category = best.first().map(|(_, h)| h.name()).unwrap_or_default();
    writeln!(out, "Winner: {} with {}", winners.join(" and "), category)?;
    Ok(())
}
