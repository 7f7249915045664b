//! # gunslinger-ai: Saloon Opponents
//!
//! Decision-making for the non-player seats at the Sligo poker table.
//!
//! ## Core Components
//!
//! - [`NpcOpponent`] - Trait defining the interface for NPC decision-making
//! - [`house`] - The house policy every regular at the table plays
//! - [`create_ai`] - Factory function for creating opponents by name
//!
//! ## Quick Start
//!
//! ```rust
//! use gunslinger_ai::{create_ai, NpcMove};
//! use gunslinger_engine::player::Player;
//! use gunslinger_engine::rules::Blinds;
//! use gunslinger_engine::table::Table;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let ai = create_ai("house").expect("house policy exists");
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let seats = vec![Player::human("You", 100, vec![]), Player::new("Dealer", 1000)];
//! let (table, _) = Table::start(seats, 0, Blinds::default(), &mut rng).unwrap();
//!
//! let seat = table.current_player().unwrap();
//! match ai.get_action(&table, seat, &mut rng) {
//!     NpcMove::Wager(item) => println!("wagers {item}"),
//!     NpcMove::Act(action) => println!("{}", action.label()),
//! }
//! ```

use gunslinger_engine::player::PlayerAction;
use gunslinger_engine::table::Table;
use rand::RngCore;

pub mod house;

/// What an NPC does with its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NpcMove {
    /// Throw a held item into the pot instead of betting this turn.
    Wager(String),
    /// A betting action, already legal for the current table.
    Act(PlayerAction),
}

/// Trait defining the interface for NPC opponents at the table.
///
/// # Required Methods
///
/// - [`get_action`](NpcOpponent::get_action) - Decide the seat's move
/// - [`name`](NpcOpponent::name) - Return the policy's identifier
///
/// # Example Implementation
///
/// ```rust
/// use gunslinger_ai::{NpcMove, NpcOpponent};
/// use gunslinger_engine::player::PlayerAction;
/// use gunslinger_engine::table::Table;
/// use rand::RngCore;
///
/// struct Folder;
///
/// impl NpcOpponent for Folder {
///     fn get_action(&self, _table: &Table, _seat: usize, _rng: &mut dyn RngCore) -> NpcMove {
///         NpcMove::Act(PlayerAction::Fold)
///     }
///
///     fn name(&self) -> &str {
///         "Folder"
///     }
/// }
/// ```
pub trait NpcOpponent: Send + Sync {
    /// Decide the move for `seat`, which must be the seat the table is waiting on.
    ///
    /// # Arguments
    ///
    /// * `table` - The hand in progress
    /// * `seat` - Seat index of the NPC
    /// * `rng` - Source of the post-flop roll
    ///
    /// # Returns
    ///
    /// An [`NpcMove`]; `Act` moves are always legal for the table as given.
    fn get_action(&self, table: &Table, seat: usize, rng: &mut dyn RngCore) -> NpcMove;

    /// Return the name/identifier of this policy.
    fn name(&self) -> &str;
}

/// Factory function to create NPC opponents by type string.
///
/// # Supported Types
///
/// - `"house"` - The saloon regulars' policy ([`house::HouseAI`])
///
/// # Example
///
/// ```rust
/// use gunslinger_ai::create_ai;
///
/// let ai = create_ai("house").unwrap();
/// assert_eq!(ai.name(), "HouseAI");
/// assert!(create_ai("shark").is_none());
/// ```
pub fn create_ai(ai_type: &str) -> Option<Box<dyn NpcOpponent>> {
    match ai_type {
        "house" => Some(Box::new(house::HouseAI::new())),
        _ => None,
    }
}
