use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid card: '{0}'")]
    InvalidCard(String),
    #[error("Not enough cards in the deck: requested {requested}, {remaining} left")]
    InsufficientCards { requested: usize, remaining: usize },
    #[error("Invalid bet amount: {amount}, minimum: {minimum}")]
    InvalidBetAmount { amount: u32, minimum: u32 },
    #[error("A raise must be at least double the current bet of ${current_bet}")]
    RaiseTooSmall { amount: u32, current_bet: u32 },
    #[error("Not enough chips: {required} needed, {available} available")]
    InsufficientChips { required: u32, available: u32 },
    #[error("Cannot check, there is ${to_call} to call")]
    CannotCheck { to_call: u32 },
    #[error("There is no bet to call")]
    NothingToCall,
    #[error("There is already a bet of ${current_bet}")]
    BetAlreadyOpen { current_bet: u32 },
    #[error("No chips left to put in")]
    NoChips,
    #[error("Player does not hold '{0}'")]
    UnknownItem(String),
    #[error("A table needs between 2 and {max} seats, got {seats}")]
    InvalidSeatCount { seats: usize, max: usize },
    #[error("No such seat: {0}")]
    InvalidSeat(usize),
    #[error("Hand already complete")]
    HandAlreadyComplete,
    #[error("Player already folded")]
    PlayerAlreadyFolded,
    #[error("It's not player {actual}'s turn (expected player {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
}
