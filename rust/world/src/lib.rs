//! # gunslinger-world: The Town of Sligo
//!
//! The text-adventure half of Gunslinger Loop. A [`Game`] takes one typed line
//! at a time, moves the gunslinger around Sligo, resets the loop when they
//! die, and seats them at the poker table on request.
//!
//! ## Core Components
//!
//! - [`world`] - Locations, exits and items, rebuilt fresh every loop
//! - [`command`] - Input normalization and the command enums
//! - [`state`] - [`GameState`] and the [`Mode`] that owns the poker table
//! - [`game`] - The dispatcher
//! - [`poker`] - Seating and narration for hands at the saloon table
//! - [`output`] - Tagged output lines and the [`Presenter`] trait
//!
//! ## Quick Start
//!
//! ```rust
//! use gunslinger_world::{Game, LocationId};
//!
//! let mut game = Game::new(42);
//! game.start();
//! game.process_command("go east");
//! game.process_command("n");
//! assert_eq!(game.state().location, LocationId::SaloonMainRoom);
//!
//! game.process_command("die");
//! assert_eq!(game.state().loop_counter, 2);
//! assert_eq!(game.state().location, LocationId::SligoOutskirts);
//! ```

pub mod command;
pub mod game;
pub mod output;
pub mod poker;
pub mod state;
pub mod world;

pub use game::{Game, GameOptions};
pub use output::{LineKind, OutputLine, Presenter, Transcript};
pub use state::{GameState, Mode};
pub use world::LocationId;
