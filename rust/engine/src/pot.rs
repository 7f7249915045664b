use serde::{Deserialize, Serialize};

/// Chips and wagered items at stake in the current hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pot {
    pub chips: u32,
    pub items: Vec<String>,
}

/// How a pot was divided between its winners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    /// Chips each winner receives.
    pub share: u32,
    /// Chips lost to floor division.
    pub remainder: u32,
    /// Winner (by position in the winners list) who receives every item.
    pub item_recipient: Option<usize>,
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    pub fn add_item(&mut self, item: String) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.chips == 0 && self.items.is_empty()
    }

    /// Divides the pot evenly between `winners` players.
    ///
    /// The chip remainder is not redistributed. Items all go to the first
    /// winner. Returns `None` when there is nobody to pay.
    pub fn split(&self, winners: usize) -> Option<Split> {
        if winners == 0 {
            return None;
        }
        let n = winners as u32;
        Some(Split {
            share: self.chips / n,
            remainder: self.chips % n,
            item_recipient: if self.items.is_empty() { None } else { Some(0) },
        })
    }

    /// Empties the pot, returning what it held.
    pub fn take(&mut self) -> Pot {
        std::mem::take(self)
    }
}
