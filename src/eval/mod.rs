//! Evaluation module for candidate placements
//!
//! Single-pass positional scoring: immediate wins, immediate blocks and
//! closeness to existing stones. There is no lookahead.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{rank, score_candidates, score_cell, ScoredMove};
pub use patterns::{PatternScore, ScoreWeights, EASY_SLIP_CHANCE};
