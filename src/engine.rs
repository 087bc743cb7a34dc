//! MiMiu's move selector
//!
//! Picks White's next placement with a single scoring pass over every empty
//! cell (see [`crate::eval`]) and reports the outcome of that placement:
//!
//! 1. **Immediate win**: a cell that completes five for White always scores highest
//! 2. **Block**: a cell that would complete five for Black comes next
//! 3. **Connectivity**: otherwise, cells near existing stones are preferred
//!
//! On Easy the selector sometimes plays the second-ranked cell instead of the best.
//!
//! # Example
//!
//! ```
//! use gomoku::{Board, Difficulty, MoveSelector, Outcome, Pos, Stone};
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let selector = MoveSelector::new(Difficulty::Hard);
//! let result = selector.play(&mut board, &mut rand::rng());
//!
//! let pos = result.best_move.expect("board has empty cells");
//! assert_eq!(board.get(pos), Stone::White);
//! assert_eq!(result.outcome, Outcome::InProgress);
//! ```

use rand::Rng;
use std::time::Instant;
use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::difficulty::Difficulty;
use crate::eval::{rank, score_candidates, ScoredMove, EASY_SLIP_CHANCE};
use crate::game::Outcome;
use crate::rules::has_five_at_pos;

/// The color the selector plays
pub const OPPONENT: Stone = Stone::White;

/// Result of one selector invocation
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    /// Cell where White was placed, `None` when the board had no empty cell
    pub best_move: Option<Pos>,
    /// Score of the chosen cell
    pub score: f64,
    /// `WhiteWins`, `Draw` (no candidates) or `InProgress`
    pub outcome: Outcome,
    /// Whether Easy's slip picked the second-ranked cell
    pub slipped: bool,
    /// Number of cells scored
    pub candidates: usize,
    /// Time taken in microseconds
    pub time_us: u64,
}

impl MoveResult {
    fn no_candidates(time_us: u64) -> Self {
        Self {
            best_move: None,
            score: 0.0,
            outcome: Outcome::Draw,
            slipped: false,
            candidates: 0,
            time_us,
        }
    }
}

/// Choice made by [`MoveSelector::choose`] before anything is placed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Choice {
    pub chosen: ScoredMove,
    pub slipped: bool,
    pub candidates: usize,
}

/// Stateless move selector for the opponent.
///
/// Holds only the difficulty; every call is a function of the board passed
/// in and the random source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveSelector {
    difficulty: Difficulty,
}

impl MoveSelector {
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Rank every empty cell and pick one, without placing it.
    ///
    /// The board is only probed and comes back unchanged. Returns `None` when
    /// no empty cell remains.
    pub fn choose<R: Rng + ?Sized>(&self, board: &mut Board, rng: &mut R) -> Option<Choice> {
        let mut candidates = score_candidates(board, OPPONENT, self.difficulty, rng);
        rank(&mut candidates);

        let slipped = self.difficulty == Difficulty::Easy
            && candidates.len() > 1
            && rng.random_bool(EASY_SLIP_CHANCE);
        let index = usize::from(slipped);

        candidates.get(index).map(|&chosen| Choice {
            chosen,
            slipped,
            candidates: candidates.len(),
        })
    }

    /// Choose a cell, place White there and report the outcome.
    ///
    /// Must not be called once the game is over; the game layer guarantees that.
    pub fn play<R: Rng + ?Sized>(&self, board: &mut Board, rng: &mut R) -> MoveResult {
        let start = Instant::now();

        let Some(choice) = self.choose(board, rng) else {
            debug!(difficulty = %self.difficulty, "no empty cell left for the opponent");
            return MoveResult::no_candidates(start.elapsed().as_micros() as u64);
        };

        let pos = choice.chosen.pos;
        board.place_stone(pos, OPPONENT);
        let outcome = if has_five_at_pos(board, pos, OPPONENT) {
            Outcome::WhiteWins
        } else {
            Outcome::InProgress
        };

        let time_us = start.elapsed().as_micros() as u64;
        debug!(
            difficulty = %self.difficulty,
            %pos,
            score = choice.chosen.score,
            slipped = choice.slipped,
            candidates = choice.candidates,
            time_us,
            "opponent placed"
        );

        MoveResult {
            best_move: Some(pos),
            score: choice.chosen.score,
            outcome,
            slipped: choice.slipped,
            candidates: choice.candidates,
            time_us,
        }
    }
}
