//! Candidate scoring for the opponent's next placement
//!
//! Every empty cell gets one additive score:
//! - Offense: the mover would complete five here
//! - Defense: the other side would complete five here
//! - Connectivity: occupied cells in the surrounding 3x3 block
//! - Jitter: a random value below 1.0 to break ties
//!
//! Offense and defense use simulated placements that are undone before the
//! next cell is looked at, so no candidate sees another candidate's probe.

use rand::Rng;

use crate::board::{Board, Pos, Stone};
use crate::difficulty::Difficulty;
use crate::rules::has_five_at_pos;

use super::patterns::ScoreWeights;

/// An empty cell with its desirability for the mover
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMove {
    pub pos: Pos,
    pub score: f64,
}

/// Score a single empty cell for `color`, without the random tie-break.
///
/// The board is probed in place and restored before returning.
pub fn score_cell(board: &mut Board, pos: Pos, color: Stone, weights: &ScoreWeights) -> f64 {
    let mut score = 0.0;

    if board.probe(pos, color, |b| has_five_at_pos(b, pos, color)) {
        score += weights.win;
    }

    let opponent = color.opponent();
    if board.probe(pos, opponent, |b| has_five_at_pos(b, pos, opponent)) {
        score += weights.block;
    }

    let neighbors = board.occupied_neighbors(pos);
    if neighbors > 0 {
        score += weights.connectivity(neighbors);
    }

    score
}

/// Score every empty cell for `color`, in row-major order.
///
/// The board is left exactly as it was passed in.
pub fn score_candidates<R: Rng + ?Sized>(
    board: &mut Board,
    color: Stone,
    difficulty: Difficulty,
    rng: &mut R,
) -> Vec<ScoredMove> {
    let weights = ScoreWeights::for_difficulty(difficulty);
    let cells: Vec<Pos> = board.empty_cells().collect();

    cells
        .into_iter()
        .map(|pos| {
            let score = score_cell(board, pos, color, &weights) + rng.random::<f64>() * weights.jitter;
            ScoredMove { pos, score }
        })
        .collect()
}

/// Sort candidates best first
pub fn rank(candidates: &mut [ScoredMove]) {
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
}
