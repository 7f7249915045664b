//! Glue between the saloon and the card table: who sits down, and how the
//! table's events read out loud.

use gunslinger_engine::cards::format_cards;
use gunslinger_engine::errors::GameError;
use gunslinger_engine::player::Player;
use gunslinger_engine::rules::ValidatedAction;
use gunslinger_engine::table::{Phase, Settlement, Table, TableEvent};
use tracing::error;

use crate::output::Out;

pub const HUMAN_SEAT: usize = 0;
pub const SEATS: usize = 4;

pub const POKER_COMMANDS: [&str; 6] = [
    "check",
    "bet [amount]",
    "call",
    "raise [amount]",
    "wager [item]",
    "fold",
];

/// The human plus the three regulars, in seat order.
pub fn seat_players(money: u32, inventory: Vec<String>) -> Vec<Player> {
    vec![
        Player::human("You", money, inventory),
        Player::new("Dealer", 1000),
        Player::new("The Jackal", 1500).with_items(vec!["ornate gun".to_string()]),
        Player::new("Vex", 800).with_items(vec!["silver locket".to_string()]),
    ]
}

fn name(table: &Table, seat: usize) -> &str {
    table.player(seat).map(|p| p.name.as_str()).unwrap_or("Someone")
}

fn is_human(table: &Table, seat: usize) -> bool {
    table.player(seat).is_some_and(|p| p.is_human)
}

pub(crate) fn announce_start(table: &Table, out: &mut Out<'_>) {
    out.say(format!(
        "The game begins. {} is the dealer.",
        name(table, table.button())
    ));
}

pub(crate) fn narrate(table: &Table, events: &[TableEvent], out: &mut Out<'_>) {
    for event in events {
        match event {
            TableEvent::BlindPosted { seat, amount } => {
                let which = if *seat == (table.button() + 1) % table.players().len() {
                    "small"
                } else {
                    "big"
                };
                out.say(format!(
                    "{} posts the {which} blind of ${amount}.",
                    name(table, *seat)
                ));
            }
            TableEvent::HoleCardsDealt => {
                out.say("The dealer deals the cards.");
                if let Some(you) = table.player(HUMAN_SEAT) {
                    out.say(format!("Your hand: {}", format_cards(&you.hole)));
                }
            }
            TableEvent::Acted { seat, action } => out.say(describe_action(table, *seat, action)),
            TableEvent::ItemWagered { seat, item } => {
                if is_human(table, *seat) {
                    out.say(format!("You toss your {item} into the pot, raising the stakes."));
                } else {
                    out.say(format!(
                        "{} smirks and throws their {item} into the pot!",
                        name(table, *seat)
                    ));
                }
            }
            TableEvent::StreetDealt { phase, board } => {
                let street = match phase {
                    Phase::Flop => "Flop",
                    Phase::Turn => "Turn",
                    _ => "River",
                };
                out.say(format!("The {street} is dealt: {}", format_cards(board)));
            }
            TableEvent::HandOver(settlement) => narrate_settlement(table, settlement, out),
        }
    }
}

fn describe_action(table: &Table, seat: usize, action: &ValidatedAction) -> String {
    if is_human(table, seat) {
        return match action {
            ValidatedAction::Fold => "You fold your hand.".to_string(),
            ValidatedAction::Check => "You check.".to_string(),
            ValidatedAction::Call(n) => format!("You call ${n}."),
            ValidatedAction::Bet(n) => format!("You bet ${n}."),
            ValidatedAction::Raise(n) => format!("You raise to ${n}."),
            ValidatedAction::AllIn(n) => format!("You push everything in, ${n} in front of you."),
        };
    }
    let who = name(table, seat);
    match action {
        ValidatedAction::Fold => format!("{who} folds."),
        ValidatedAction::Check => format!("{who} checks."),
        ValidatedAction::Call(_) => format!("{who} calls."),
        ValidatedAction::Bet(n) => format!("{who} bets ${n}."),
        ValidatedAction::Raise(n) => format!("{who} raises to ${n}."),
        ValidatedAction::AllIn(n) => format!("{who} goes all-in for ${n}."),
    }
}

fn narrate_settlement(table: &Table, s: &Settlement, out: &mut Out<'_>) {
    out.say("--- Round Over ---");
    if !s.uncontested() {
        out.say("Showdown! Cards are revealed.");
        for r in &s.revealed {
            let hole = table
                .player(r.seat)
                .map(|p| format_cards(&p.hole))
                .unwrap_or_default();
            out.say(format!(
                "{} has: {hole} (Best hand: {})",
                name(table, r.seat),
                r.hand.name()
            ));
        }
    }
    if s.winners.is_empty() {
        out.say("Everyone folded. The round is over.");
        return;
    }
    let names: Vec<&str> = s.winners.iter().map(|&w| name(table, w)).collect();
    out.say(format!("{} win(s) the pot of ${}!", names.join(" and "), s.pot));
    if let Some(seat) = s.item_recipient {
        out.say(format!(
            "{} also collects the wagered items: {}!",
            name(table, seat),
            s.items.join(", ")
        ));
    }
}

/// Pot and price shown before the human acts.
pub(crate) fn prompt(table: &Table, out: &mut Out<'_>) {
    let mut pot = format!("Current pot: ${}.", table.pot().chips);
    if !table.pot().items.is_empty() {
        pot.push_str(&format!(" Items in pot: {}.", table.pot().items.join(", ")));
    }
    out.say(pot);
    if let Some(you) = table.player(HUMAN_SEAT) {
        out.say(format!("Your money: ${}", you.chips));
    }
    out.say(format!(
        "Current bet to call: ${}.",
        table.to_call(HUMAN_SEAT)
    ));
    out.help("Actions: check, bet [amt], call, raise [amt], wager [item], fold");
}

/// What the human is told when the table refuses their action.
pub(crate) fn refusal(err: &GameError) -> String {
    match err {
        GameError::CannotCheck { .. } => {
            "You can't check, there is a bet to you. Try 'call' or 'raise'.".to_string()
        }
        GameError::NothingToCall => {
            "There is no bet to call. You can 'check' or 'bet'.".to_string()
        }
        GameError::BetAlreadyOpen { current_bet } => {
            format!("There is already a bet of ${current_bet}. Try 'call' or 'raise'.")
        }
        GameError::RaiseTooSmall { current_bet, .. } => {
            format!("A raise must be at least double the current bet of ${current_bet}.")
        }
        GameError::InvalidBetAmount { .. } => "You must bet a positive number.".to_string(),
        GameError::InsufficientChips { .. } | GameError::NoChips => {
            "You don't have enough money.".to_string()
        }
        GameError::UnknownItem(item) => {
            format!("You don't have a '{item}' in your inventory.")
        }
        other => {
            error!(error = %other, "table rejected a human action");
            "The dealer frowns. That can't be done right now.".to_string()
        }
    }
}
