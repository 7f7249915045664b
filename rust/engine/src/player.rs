use crate::cards::Card;
use serde::{Deserialize, Serialize};

/// Represents a player action during a betting round.
/// Actions can involve betting amounts or no-cost moves like check/fold.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (no bet, only valid if nothing to call)
    Check,
    /// Call the current bet
    Call,
    /// Open the betting with the given amount
    Bet(u32),
    /// Raise the current bet *to* the given total
    Raise(u32),
    /// Put every remaining chip in
    AllIn,
}

impl PlayerAction {
    pub fn label(&self) -> String {
        match self {
            PlayerAction::Fold => "fold".to_string(),
            PlayerAction::Check => "check".to_string(),
            PlayerAction::Call => "call".to_string(),
            PlayerAction::Bet(n) => format!("bet {n}"),
            PlayerAction::Raise(n) => format!("raise {n}"),
            PlayerAction::AllIn => "all-in".to_string(),
        }
    }
}

/// A seat at the saloon table.
///
/// The betting round owns every `Player` for the duration of one hand.
/// `committed` is reset at each new street; `acted` is cleared whenever
/// somebody opens or raises.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub hole: Vec<Card>,
    pub folded: bool,
    pub is_human: bool,
    pub chips: u32,
    pub items: Vec<String>,
    pub last_action: Option<PlayerAction>,
    pub committed: u32,
    pub acted: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, chips: u32) -> Self {
        Self {
            name: name.into(),
            hole: Vec::with_capacity(2),
            folded: false,
            is_human: false,
            chips,
            items: Vec::new(),
            last_action: None,
            committed: 0,
            acted: false,
        }
    }

    pub fn human(name: impl Into<String>, chips: u32, items: Vec<String>) -> Self {
        Self {
            is_human: true,
            items,
            ..Self::new(name, chips)
        }
    }

    pub fn with_items(mut self, items: Vec<String>) -> Self {
        self.items = items;
        self
    }

    /// Still contesting the pot.
    pub fn in_hand(&self) -> bool {
        !self.folded
    }

    /// Still able to make a betting decision.
    pub fn can_act(&self) -> bool {
        !self.folded && self.chips > 0
    }

    pub fn is_all_in(&self) -> bool {
        !self.folded && self.chips == 0
    }

    /// Moves up to `amount` chips from the stack into this street's commitment
    /// and returns what was actually paid.
    pub fn pay(&mut self, amount: u32) -> u32 {
        let paid = amount.min(self.chips);
        self.chips -= paid;
        self.committed += paid;
        paid
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    pub fn take_item(&mut self, item: &str) -> Option<String> {
        let idx = self.items.iter().position(|i| i == item)?;
        Some(self.items.remove(idx))
    }

    pub(crate) fn reset_street(&mut self) {
        self.committed = 0;
        self.last_action = None;
        self.acted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pay_is_capped_at_the_stack() {
        let mut p = Player::new("Vex", 30);
        assert_eq!(p.pay(50), 30);
        assert_eq!(p.chips, 0);
        assert_eq!(p.committed, 30);
        assert!(p.is_all_in());
        assert!(!p.can_act());
    }

    #[test]
    fn take_item_removes_only_the_named_item() {
        let mut p = Player::human("You", 10, vec!["tarnished coin".into(), "rope".into()]);
        assert_eq!(p.take_item("rope").as_deref(), Some("rope"));
        assert_eq!(p.items, vec!["tarnished coin".to_string()]);
        assert!(p.take_item("rope").is_none());
    }

    #[test]
    fn action_labels() {
        assert_eq!(PlayerAction::Raise(40).label(), "raise 40");
        assert_eq!(PlayerAction::AllIn.label(), "all-in");
    }
}
