//! The house policy played by every regular at the saloon table.
//!
//! Pre-flop it looks only at the hole cards. Once the flop is out it reads
//! the category of its best hand and draws a single roll to decide how
//! aggressively to play it.

use crate::{NpcMove, NpcOpponent};
use gunslinger_engine::cards::Card;
use gunslinger_engine::hand::{Category, best_hand};
use gunslinger_engine::player::PlayerAction;
use gunslinger_engine::rules::min_raise_to;
use gunslinger_engine::table::Table;
use rand::{Rng, RngCore};
use tracing::debug;

/// Everything the policy looks at for one decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatView {
    pub hole: Vec<Card>,
    pub community: Vec<Card>,
    pub current_bet: u32,
    pub committed: u32,
    pub pot: u32,
    pub chips: u32,
}

impl SeatView {
    pub fn from_table(table: &Table, seat: usize) -> Option<Self> {
        let p = table.player(seat)?;
        Some(Self {
            hole: p.hole.clone(),
            community: table.community().to_vec(),
            current_bet: table.current_bet(),
            committed: p.committed,
            pot: table.pot().chips,
            chips: p.chips,
        })
    }

    pub fn to_call(&self) -> u32 {
        self.current_bet.saturating_sub(self.committed)
    }

    /// Category of the best hand so far; `None` before the flop.
    pub fn strength(&self) -> Option<Category> {
        let mut cards = self.hole.clone();
        cards.extend_from_slice(&self.community);
        best_hand(&cards).map(|h| h.category)
    }
}

/// Rule-based saloon opponent.
///
/// # Strategy
///
/// **Item wager:** with a held item, Two Pair or better, and nothing wagered
/// yet this hand, the first held item goes into the pot.
///
/// **Pre-flop:**
/// - Pocket pair above eights: raise to double the current bet
/// - Both cards above jacks: call
/// - Otherwise: fold to a bet, check when free
///
/// **Post-flop** (one roll `r` in `[0, 1)`):
/// - Two Pair or better: raise to half the pot when `r < 0.8`, else call
/// - One Pair: fold when the call is more than half the pot and `r < 0.6`, else call
/// - Nothing: bet a third of the pot when free and `r < 0.1`; fold to a bet; else check
///
/// Whatever the policy picks is then mapped onto a legal action with
/// [`legalize`].
#[derive(Debug, Clone, Default)]
pub struct HouseAI;

impl HouseAI {
    pub fn new() -> Self {
        Self
    }

    /// The raw policy choice, before legalization.
    pub fn decide(&self, view: &SeatView, rng: &mut dyn RngCore) -> PlayerAction {
        let to_call = view.to_call();
        if view.community.is_empty() {
            return Self::preflop(view, to_call);
        }

        let roll: f64 = rng.random();
        match view.strength() {
            Some(category) if category >= Category::TwoPair => {
                if roll < 0.8 {
                    PlayerAction::Raise(view.chips.min(view.pot / 2))
                } else {
                    PlayerAction::Call
                }
            }
            Some(Category::OnePair) => {
                let ratio = f64::from(to_call) / f64::from(view.pot + 1);
                if ratio > 0.5 && roll < 0.6 {
                    PlayerAction::Fold
                } else {
                    PlayerAction::Call
                }
            }
            _ => {
                if to_call == 0 && roll < 0.1 {
                    PlayerAction::Bet(view.pot / 3)
                } else if to_call > 0 {
                    PlayerAction::Fold
                } else {
                    PlayerAction::Check
                }
            }
        }
    }

    fn preflop(view: &SeatView, to_call: u32) -> PlayerAction {
        let [a, b] = match view.hole.as_slice() {
            [a, b] => [a.value(), b.value()],
            _ => return PlayerAction::Fold,
        };
        if a == b && a > 8 {
            PlayerAction::Raise(view.current_bet.saturating_mul(2))
        } else if a > 11 && b > 11 {
            PlayerAction::Call
        } else if to_call > 0 {
            PlayerAction::Fold
        } else {
            PlayerAction::Check
        }
    }
}

/// Maps a policy choice onto an action the table will accept.
///
/// - call with nothing to call becomes check; check facing a bet becomes fold
/// - a raise with no open bet is a bet
/// - a raise below the minimum is lifted to the minimum
/// - an amount the stack cannot cover becomes all-in
/// - a zero-sized bet becomes check
pub fn legalize(action: PlayerAction, view: &SeatView) -> PlayerAction {
    let to_call = view.to_call();
    match action {
        PlayerAction::Call if to_call == 0 => PlayerAction::Check,
        PlayerAction::Check if to_call > 0 => PlayerAction::Fold,
        PlayerAction::Bet(amount) | PlayerAction::Raise(amount) if view.current_bet == 0 => {
            if amount == 0 {
                PlayerAction::Check
            } else if amount >= view.chips {
                PlayerAction::AllIn
            } else {
                PlayerAction::Bet(amount)
            }
        }
        PlayerAction::Bet(amount) | PlayerAction::Raise(amount) => {
            let target = amount.max(min_raise_to(view.current_bet));
            if target.saturating_sub(view.committed) >= view.chips {
                PlayerAction::AllIn
            } else {
                PlayerAction::Raise(target)
            }
        }
        other => other,
    }
}

impl NpcOpponent for HouseAI {
    fn get_action(&self, table: &Table, seat: usize, rng: &mut dyn RngCore) -> NpcMove {
        let Some(view) = SeatView::from_table(table, seat) else {
            return NpcMove::Act(PlayerAction::Fold);
        };
        let items = table.player(seat).map(|p| p.items.as_slice()).unwrap_or(&[]);

        if !table.item_wagered()
            && let Some(item) = items.first()
            && view.strength().is_some_and(|c| c >= Category::TwoPair)
        {
            debug!(seat, item = %item, "npc wagers an item");
            return NpcMove::Wager(item.clone());
        }

        let choice = self.decide(&view, rng);
        let action = legalize(choice.clone(), &view);
        debug!(seat, ?choice, ?action, "npc decision");
        NpcMove::Act(action)
    }

    fn name(&self) -> &str {
        "HouseAI"
    }
}
