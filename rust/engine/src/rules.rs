use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::PlayerAction as A;

/// Small and big blind sizes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Blinds {
    pub small: u32,
    pub big: u32,
}

impl Default for Blinds {
    fn default() -> Self {
        Self { small: 5, big: 10 }
    }
}

/// An action that has passed validation, carrying the chips it moves.
///
/// `Bet`, `Raise` and `AllIn` carry the player's new street total;
/// `Call` carries the chips paid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call(u32),
    Bet(u32),
    Raise(u32),
    AllIn(u32),
}

/// Smallest legal "raise to" total against `current_bet`.
pub fn min_raise_to(current_bet: u32) -> u32 {
    current_bet.saturating_mul(2)
}

/// Validates a player action according to the saloon's betting rules.
///
/// # Arguments
///
/// * `stack` - Player's remaining chips
/// * `committed` - Chips the player already put in on this street
/// * `current_bet` - Highest street commitment at the table
/// * `action` - The action the player wishes to perform
///
/// # Returns
///
/// The action to execute. A bet or raise that uses the whole stack is
/// reported as [`ValidatedAction::AllIn`]; a call the stack cannot cover
/// becomes a short call for what remains.
///
/// # Errors
///
/// - [`GameError::CannotCheck`] - checking while facing a bet
/// - [`GameError::NothingToCall`] - calling with nothing to call
/// - [`GameError::BetAlreadyOpen`] - betting when a bet is already open
/// - [`GameError::InvalidBetAmount`] - zero-sized bet or raise
/// - [`GameError::RaiseTooSmall`] - raising to less than double the current bet
/// - [`GameError::InsufficientChips`] - bet or raise larger than the stack
/// - [`GameError::NoChips`] - going all-in with an empty stack
///
/// # Examples
///
/// ```
/// use gunslinger_engine::rules::{validate_action, ValidatedAction};
/// use gunslinger_engine::player::PlayerAction;
/// use gunslinger_engine::errors::GameError;
///
/// // raise to 20 against a big blind of 10
/// let result = validate_action(1000, 0, 10, PlayerAction::Raise(20));
/// assert_eq!(result, Ok(ValidatedAction::Raise(20)));
///
/// // 15 is less than double the current bet
/// let result = validate_action(1000, 0, 10, PlayerAction::Raise(15));
/// assert!(matches!(result, Err(GameError::RaiseTooSmall { .. })));
/// ```
pub fn validate_action(
    stack: u32,
    committed: u32,
    current_bet: u32,
    action: A,
) -> Result<ValidatedAction, GameError> {
    let to_call = current_bet.saturating_sub(committed);
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::CannotCheck { to_call })
            }
        }
        A::Call => {
            if to_call == 0 {
                Err(GameError::NothingToCall)
            } else {
                Ok(ValidatedAction::Call(stack.min(to_call)))
            }
        }
        A::Bet(amount) => validate_bet(stack, committed, current_bet, amount),
        A::Raise(amount) => {
            if current_bet == 0 {
                return validate_bet(stack, committed, current_bet, amount);
            }
            if amount == 0 {
                return Err(GameError::InvalidBetAmount { amount, minimum: 1 });
            }
            let minimum = min_raise_to(current_bet);
            if amount < minimum {
                return Err(GameError::RaiseTooSmall {
                    amount,
                    current_bet,
                });
            }
            let cost = amount.saturating_sub(committed);
            if cost > stack {
                return Err(GameError::InsufficientChips {
                    required: cost,
                    available: stack,
                });
            }
            if cost == stack {
                Ok(ValidatedAction::AllIn(amount))
            } else {
                Ok(ValidatedAction::Raise(amount))
            }
        }
        A::AllIn => {
            if stack == 0 {
                Err(GameError::NoChips)
            } else {
                Ok(ValidatedAction::AllIn(committed + stack))
            }
        }
    }
}

fn validate_bet(
    stack: u32,
    committed: u32,
    current_bet: u32,
    amount: u32,
) -> Result<ValidatedAction, GameError> {
    if current_bet > 0 {
        return Err(GameError::BetAlreadyOpen { current_bet });
    }
    if amount == 0 {
        return Err(GameError::InvalidBetAmount { amount, minimum: 1 });
    }
    if amount > stack {
        return Err(GameError::InsufficientChips {
            required: amount,
            available: stack,
        });
    }
    if amount == stack {
        Ok(ValidatedAction::AllIn(committed + amount))
    } else {
        Ok(ValidatedAction::Bet(committed + amount))
    }
}
