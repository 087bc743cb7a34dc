//! Gomoku against MiMiu
//!
//! Freestyle gomoku on a 15x15 board. The human plays Black and moves first;
//! MiMiu, the companion character, plays White using a one-ply scoring
//! heuristic whose strength depends on the chosen [`Difficulty`].
//!
//! - Five or more in a row wins (overlines count)
//! - A full board with no five is a draw
//! - No captures, no forbidden moves, no opening restrictions
//!
//! # Architecture
//!
//! - [`board`]: 15x15 cell grid and positions
//! - [`rules`]: five-in-a-row detection
//! - [`eval`]: per-cell scoring (win, block, connectivity, jitter)
//! - [`engine`]: White's move selection on top of the scores
//! - [`game`]: turn order, outcomes and snapshots for one match
//! - [`store`]: saved games per user
//! - [`persona`]: MiMiu's canned chat replies
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Difficulty, Game, Outcome, Stone};
//!
//! let mut game = Game::new(Difficulty::Normal);
//! game.play(7, 7).unwrap();
//! assert_eq!(game.turn(), Stone::White);
//!
//! let reply = game.play_opponent(&mut rand::rng()).unwrap();
//! assert!(reply.best_move.is_some());
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! assert_eq!(game.turn(), Stone::Black);
//! ```

pub mod board;
pub mod config;
pub mod difficulty;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod persona;
pub mod rules;
pub mod store;
pub mod ui;

pub use board::{Board, Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
pub use config::AppConfig;
pub use difficulty::Difficulty;
pub use engine::{Choice, MoveResult, MoveSelector, OPPONENT};
pub use error::{ConfigError, GameError, PlacementError, StoreError};
pub use game::{Game, GameSnapshot, Outcome, HUMAN};
pub use store::{GameKind, JsonFileStore, MemoryStore, StateStore};
