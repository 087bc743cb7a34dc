//! Application configuration (TOML, every field optional)

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::difficulty::Difficulty;
use crate::error::ConfigError;

/// Runtime settings for the app
///
/// ```toml
/// difficulty = "hard"
/// opponent_delay_ms = 800
/// user_id = "local"
/// save_dir = "saves"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Difficulty for new games
    pub difficulty: Difficulty,
    /// Pause before MiMiu moves, purely cosmetic
    pub opponent_delay_ms: u64,
    /// Key for saved state
    pub user_id: String,
    /// Directory for saved games; `None` keeps state in memory only
    pub save_dir: Option<PathBuf>,
    /// Fixed RNG seed for reproducible play
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            opponent_delay_ms: 800,
            user_id: "local".to_string(),
            save_dir: None,
            seed: None,
        }
    }
}

impl AppConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.opponent_delay(), Duration::from_millis(800));
    }

    #[test]
    fn test_partial_config() {
        let config = AppConfig::from_toml("difficulty = \"hard\"\nsave_dir = \"saves\"\n").unwrap();
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.save_dir, Some(PathBuf::from("saves")));
        assert_eq!(config.user_id, "local");
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(matches!(
            AppConfig::from_toml("difficulty = \"normal\"\nboard_size = 19\n"),
            Err(ConfigError::Parse(_))
        ));
        assert!(AppConfig::from_toml("difficulty = \"nightmare\"").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::from_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("here.toml"));
    }
}
