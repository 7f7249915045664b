//! Turning a typed line into a command.
//!
//! Input is normalized (lowercased, trimmed, whitespace collapsed), whole-line
//! aliases are expanded, then the first word picks the verb and the rest is
//! the noun.

/// A command for the world dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(String),
    Travel(String),
    Look,
    Examine(String),
    Get(String),
    Inventory,
    Help,
    Play(String),
    Trade(String),
    Ask(String),
    Quit,
    Drink(String),
    Unlock(String),
    Die,
    Unknown,
}

/// A command typed while seated at the poker table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PokerCommand {
    Check,
    /// `None` when the amount is missing, not a number or not positive.
    Bet(Option<u32>),
    Call,
    Raise(Option<u32>),
    Wager(String),
    Fold,
    AllIn,
    Unknown,
}

/// Lowercases, trims and collapses runs of whitespace, then expands aliases.
pub fn normalize(raw: &str) -> String {
    let collapsed = raw
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    expand_alias(&collapsed)
}

fn expand_alias(line: &str) -> String {
    let whole = match line {
        "n" | "go n" => Some("go north"),
        "s" | "go s" => Some("go south"),
        "e" | "go e" => Some("go east"),
        "w" | "go w" => Some("go west"),
        "u" | "go u" => Some("go up"),
        "d" | "go d" => Some("go down"),
        "i" => Some("inventory"),
        "l" => Some("look"),
        "h" => Some("help"),
        "end it" => Some("die"),
        "exit" | "i quit" => Some("quit"),
        _ => None,
    };
    if let Some(w) = whole {
        return w.to_string();
    }
    if let Some(rest) = line.strip_prefix("pick up ") {
        return format!("get {rest}");
    }
    let (verb, noun) = split_verb(line);
    let verb = match verb {
        "x" => "examine",
        "take" => "get",
        "talk" => "ask",
        other => other,
    };
    if noun.is_empty() {
        verb.to_string()
    } else {
        format!("{verb} {noun}")
    }
}

fn split_verb(line: &str) -> (&str, &str) {
    match line.split_once(' ') {
        Some((verb, noun)) => (verb, noun),
        None => (line, ""),
    }
}

/// Parses a line for the world dispatcher.
///
/// # Example
///
/// ```rust
/// use gunslinger_world::command::{parse_command, Command};
///
/// assert_eq!(parse_command("  N "), Command::Go("north".into()));
/// assert_eq!(parse_command("X Poker   Table"), Command::Examine("poker table".into()));
/// assert_eq!(parse_command("end it"), Command::Die);
/// assert_eq!(parse_command("dance"), Command::Unknown);
/// ```
pub fn parse_command(raw: &str) -> Command {
    let line = normalize(raw);
    let (verb, noun) = split_verb(&line);
    let noun = noun.to_string();
    match verb {
        "go" => Command::Go(noun),
        "travel" => Command::Travel(noun),
        "look" => Command::Look,
        "examine" => Command::Examine(noun),
        "get" => Command::Get(noun),
        "inventory" => Command::Inventory,
        "help" => Command::Help,
        "play" => Command::Play(noun),
        "trade" => Command::Trade(noun),
        "ask" => Command::Ask(noun),
        "quit" => Command::Quit,
        "drink" => Command::Drink(noun),
        "unlock" => Command::Unlock(noun),
        "die" => Command::Die,
        _ => Command::Unknown,
    }
}

/// Parses a line typed at the poker table.
///
/// # Example
///
/// ```rust
/// use gunslinger_world::command::{parse_poker_command, PokerCommand};
///
/// assert_eq!(parse_poker_command("raise 40"), PokerCommand::Raise(Some(40)));
/// assert_eq!(parse_poker_command("bet lots"), PokerCommand::Bet(None));
/// assert_eq!(parse_poker_command("wager ornate gun"), PokerCommand::Wager("ornate gun".into()));
/// ```
pub fn parse_poker_command(raw: &str) -> PokerCommand {
    let line = normalize(raw);
    let (verb, noun) = split_verb(&line);
    let amount = || noun.parse::<u32>().ok().filter(|&n| n > 0);
    match verb {
        "check" => PokerCommand::Check,
        "bet" => PokerCommand::Bet(amount()),
        "call" => PokerCommand::Call,
        "raise" => PokerCommand::Raise(amount()),
        "wager" => PokerCommand::Wager(noun.to_string()),
        "fold" => PokerCommand::Fold,
        "all-in" | "allin" => PokerCommand::AllIn,
        "all" if noun == "in" => PokerCommand::AllIn,
        _ => PokerCommand::Unknown,
    }
}
