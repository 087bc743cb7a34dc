//! Error types for the game, persistence and configuration layers.

use derive_more::{Display, Error, From};

use crate::board::{Pos, Stone};
use crate::game::Outcome;

/// Why a placement was refused. A refused placement never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlacementError {
    /// Coordinates outside the 15x15 grid
    #[display("({row}, {col}) is off the board")]
    OffBoard { row: i32, col: i32 },
    /// Target cell already holds a stone
    #[display("cell {pos} is already occupied")]
    Occupied { pos: Pos },
    /// The other side is to move
    #[display("it is {turn:?}'s turn")]
    NotYourTurn { turn: Stone },
    /// The game has already finished
    #[display("the game is over ({outcome})")]
    GameOver { outcome: Outcome },
}

/// Errors from game-level operations other than placements.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Difficulty can only change before the first stone
    #[display("difficulty can only be changed before the first move")]
    GameAlreadyStarted,
}

/// Errors from loading or saving game state.
#[derive(Debug, Display, Error, From)]
pub enum StoreError {
    #[display("I/O error: {_0}")]
    #[from]
    Io(std::io::Error),
    #[display("malformed saved game: {_0}")]
    #[from]
    Json(serde_json::Error),
    /// Only `gomoku` is stored
    #[display("invalid game type: {kind}")]
    InvalidGameType { kind: String },
    /// User ids become directory names and must be plain
    #[display("invalid user id: {user:?}")]
    InvalidUser { user: String },
}

/// Errors from loading the configuration file.
#[derive(Debug, Display, Error, From)]
pub enum ConfigError {
    #[display("cannot read config {}: {source}", path.display())]
    Read {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[display("invalid config: {_0}")]
    #[from]
    Parse(toml::de::Error),
}
