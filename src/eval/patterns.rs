//! Score weights for candidate evaluation
//!
//! The terms are additive. The ordering
//! `WIN > BLOCK_BASE + BLOCK_PER_LEVEL * 2 + max connectivity + jitter`
//! makes an immediate win always outrank everything else, and a block
//! always outrank any quiet move.

use crate::difficulty::Difficulty;

/// Fixed scoring constants
pub struct PatternScore;

impl PatternScore {
    /// Placing here completes five for the mover
    pub const WIN: f64 = 10_000.0;
    /// Placing here stops the human's five (before difficulty scaling)
    pub const BLOCK_BASE: f64 = 5_000.0;
    /// Extra block weight per difficulty level
    pub const BLOCK_PER_LEVEL: f64 = 1_000.0;
    /// Bonus per occupied neighbor (before difficulty scaling)
    pub const NEIGHBOR_BASE: f64 = 10.0;
    /// Extra neighbor bonus per difficulty level
    pub const NEIGHBOR_PER_LEVEL: f64 = 5.0;
    /// Upper bound (exclusive) of the random tie-break
    pub const JITTER: f64 = 1.0;
}

/// Chance that Easy plays the second-ranked move instead of the best one
pub const EASY_SLIP_CHANCE: f64 = 0.3;

/// Weights resolved for one difficulty level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub win: f64,
    pub block: f64,
    pub per_neighbor: f64,
    pub jitter: f64,
}

impl ScoreWeights {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        let level = f64::from(difficulty.level());
        Self {
            win: PatternScore::WIN,
            block: PatternScore::BLOCK_BASE + PatternScore::BLOCK_PER_LEVEL * level,
            per_neighbor: PatternScore::NEIGHBOR_BASE + PatternScore::NEIGHBOR_PER_LEVEL * level,
            jitter: PatternScore::JITTER,
        }
    }

    /// Connectivity bonus for `neighbors` occupied cells around a candidate
    #[inline]
    pub fn connectivity(&self, neighbors: u32) -> f64 {
        f64::from(neighbors) * self.per_neighbor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_weights_scale_with_difficulty() {
        let easy = ScoreWeights::for_difficulty(Difficulty::Easy);
        let normal = ScoreWeights::for_difficulty(Difficulty::Normal);
        let hard = ScoreWeights::for_difficulty(Difficulty::Hard);

        assert_eq!(easy.block, 5_000.0);
        assert_eq!(normal.block, 6_000.0);
        assert_eq!(hard.block, 7_000.0);
        assert_eq!(easy.per_neighbor, 10.0);
        assert_eq!(hard.per_neighbor, 20.0);
        assert_eq!(hard.connectivity(3), 60.0);
    }

    #[test]
    fn test_term_ordering_holds_at_every_level() {
        for difficulty in Difficulty::iter() {
            let w = ScoreWeights::for_difficulty(difficulty);
            let max_quiet = w.connectivity(8) + w.jitter;
            assert!(w.block > max_quiet, "{difficulty}: block must beat quiet moves");
            assert!(w.win > w.block + max_quiet, "{difficulty}: win must beat blocks");
        }
    }
}
