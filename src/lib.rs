//! An automated opponent for the board game 'Connect 4'
//!
//! Given any board position, this agent picks the column the AI player
//! should drop its piece into, using a fixed-depth minimax search with
//! alpha-beta pruning over a positional heuristic.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_opponent::{service::{MoveService, Winner}, search::Searcher};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let searcher = Searcher::new(Default::default(), StdRng::seed_from_u64(1));
//! let mut service = MoveService::new(searcher, Vec::<Winner>::new());
//! let outcome = service.compute_move(&"0".repeat(42))?;
//!
//! assert!(outcome.move_valid && outcome.move_col < 7);
//! assert_eq!(outcome.winner, Winner::None);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod config;

pub mod error;

pub mod scorer;

pub mod search;

pub mod service;

pub mod tally;

pub mod terminal;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles needed to win
pub const WINDOW_LENGTH: usize = 4;

/// The length of the external board encoding, one character per tile
pub const ENCODED_LENGTH: usize = WIDTH * HEIGHT;

// a line window must fit along both axes of the board
const_assert!(WINDOW_LENGTH <= WIDTH && WINDOW_LENGTH <= HEIGHT);
