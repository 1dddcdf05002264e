//! Core game logic - pure, deterministic given its random source
//!
//! This crate holds the whole simulation and nothing else. It has no
//! dependency on terminals, input devices or clocks beyond the one-off seed
//! taken by [`clock_seed`].
//!
//! # Module Structure
//!
//! - [`shapes`]: the nine shapes, their offsets and colors
//! - [`rng`]: random sources and the four-slot upcoming-piece queue
//! - [`grid`]: playfield occupancy and row clearing
//! - [`piece`]: the falling piece (movement, rotation, locking, spawning)
//! - [`session`]: frame-by-frame orchestration of one game
//! - [`config`]: validated grid size and gravity period
//!
//! # Rules
//!
//! - Pieces are drawn uniformly from nine shapes; there is no bag.
//! - Rotation is a fixed offset rewrite with no wall kicks and no collision
//!   check. The square never rotates.
//! - A piece that cannot fall on a gravity tick locks immediately; there is
//!   no lock delay.
//! - Game over happens when a new piece cannot occupy its spawn cells.
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, GameSession, ScriptedSource, TickOutcome};
//! use blockfall_types::GameAction;
//!
//! let config = GameConfig::new(10, 20, 2).unwrap();
//! let mut game = GameSession::new(config, ScriptedSource::new(vec![3, 1, 4, 1, 5]));
//!
//! game.apply_action(GameAction::MoveRight);
//! assert_eq!(game.step([]), TickOutcome::Waiting);
//! assert_eq!(game.step([]), TickOutcome::Fell);
//! assert_eq!(game.active().y(), 1);
//! ```

pub mod config;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod session;
pub mod shapes;

pub use blockfall_types as types;

pub use config::{ConfigError, GameConfig};
pub use grid::Grid;
pub use piece::ActivePiece;
pub use rng::{clock_seed, PieceQueue, PieceSource, RandomSource, ScriptedSource};
pub use session::{GameSession, Phase, TickOutcome};
pub use shapes::{color, shape, Shape};
