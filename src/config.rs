use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ConfigError;

/// Weights of the positional heuristic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Per piece in the center column
    pub center: i64,
    /// A complete alignment
    pub four: i64,
    /// Three pieces and an empty tile
    pub three: i64,
    /// Two pieces and two empty tiles
    pub two: i64,
    /// Three opponent pieces and an empty tile
    pub opponent_three: i64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            center: 3,
            four: 100,
            three: 5,
            two: 2,
            opponent_three: -4,
        }
    }
}

/// Parameters of the game tree search
///
/// The win scores are deliberately asymmetric: a reachable loss weighs less
/// in magnitude than a reachable win, and both dwarf any heuristic value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Search depth in plies
    pub depth: usize,
    /// Score of a position the AI has won
    pub ai_win_score: i64,
    /// Score of a position the player has won
    pub player_win_score: i64,
    /// Search the root moves on the rayon thread pool
    pub parallel: bool,
    pub weights: ScoreWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 5,
            ai_win_score: 100_000_000_000_000,
            player_win_score: -10_000_000_000_000,
            parallel: false,
            weights: ScoreWeights::default(),
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::Validation(
                "search depth must be at least 1".to_string(),
            ));
        }
        if self.ai_win_score <= 0 || self.player_win_score >= 0 {
            return Err(ConfigError::Validation(
                "ai_win_score must be positive and player_win_score negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// File holding the win tally
    pub tally_path: PathBuf,
    pub search: SearchConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tally_path: PathBuf::from("win_tally.bin"),
            search: SearchConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.search.validate()
    }
}
