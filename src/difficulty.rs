//! Opponent difficulty setting

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// How hard MiMiu plays.
///
/// The ordinal [`level`](Difficulty::level) scales the defense and
/// connectivity weights; Easy additionally slips to the second-best move
/// now and then. Win detection is the same at every level.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Ordinal used by the scoring weights (Easy = 0, Normal = 1, Hard = 2)
    #[inline]
    pub fn level(self) -> u32 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Normal => 1,
            Difficulty::Hard => 2,
        }
    }

    /// Short label for menus
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_levels_are_ordinal() {
        let levels: Vec<u32> = Difficulty::iter().map(Difficulty::level).collect();
        assert_eq!(levels, vec![0, 1, 2]);
        assert!(Difficulty::Easy < Difficulty::Hard);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(Difficulty::from_str("HARD").unwrap(), Difficulty::Hard);
        assert_eq!(Difficulty::from_str("easy").unwrap(), Difficulty::Easy);
        assert!(Difficulty::from_str("impossible").is_err());
        assert_eq!(Difficulty::Normal.to_string(), "normal");
        assert_eq!(Difficulty::default(), Difficulty::Normal);
    }
}
