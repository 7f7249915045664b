//! # gunslinger-engine: Saloon Hold'em Core
//!
//! The card game played at the Sligo saloon table: a four-seat Texas Hold'em
//! hand with blinds, chip and item wagers, and a showdown. All randomness is
//! injected, so a seeded RNG reproduces a hand exactly.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), parsing and formatting
//! - [`deck`] - The 52-card deck, shuffling and dealing
//! - [`hand`] - Five-card classification and best-of-seven evaluation
//! - [`player`] - Seats, actions and chip accounting
//! - [`rules`] - Blinds and betting validation
//! - [`pot`] - Chips and items at stake, and how they split
//! - [`table`] - The betting round state machine
//! - [`logger`] - HandRecord serialization (JSONL)
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use gunslinger_engine::cards::parse_cards;
//! use gunslinger_engine::hand::{best_hand, Category};
//!
//! let cards = parse_cards("A♠ A♥ A♦ K♠ K♥ 2♣ 3♦").unwrap();
//! let hand = best_hand(&cards).unwrap();
//! assert_eq!(hand.category, Category::FullHouse);
//! assert_eq!(&hand.values[..2], &[14, 13]);
//! ```
//!
//! ## Playing a Hand
//!
//! ```rust
//! use gunslinger_engine::player::{Player, PlayerAction};
//! use gunslinger_engine::rules::Blinds;
//! use gunslinger_engine::table::Table;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let seats = vec![Player::human("You", 100, vec![]), Player::new("Dealer", 1000)];
//! let (mut table, _events) = Table::start(seats, 0, Blinds::default(), &mut rng).unwrap();
//!
//! let seat = table.current_player().unwrap();
//! table.apply_action(seat, PlayerAction::Fold).unwrap();
//! assert!(table.is_closed());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod rules;
pub mod table;
