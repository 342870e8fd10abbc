//! Start-time match configuration

use serde::{Deserialize, Serialize};

use crate::error::MatchError;
use crate::strategy::Difficulty;

/// Difficulty and length of a match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub difficulty: Difficulty,
    pub total_rounds: u32,
}

impl MatchConfig {
    pub fn new(difficulty: Difficulty, total_rounds: u32) -> Self {
        Self { difficulty, total_rounds }
    }

    /// Best of three
    pub fn quick() -> Self {
        Self { difficulty: Difficulty::Easy, total_rounds: 3 }
    }

    /// Best of five
    pub fn standard() -> Self {
        Self { difficulty: Difficulty::Easy, total_rounds: 5 }
    }

    /// Best of seven
    pub fn long() -> Self {
        Self { difficulty: Difficulty::Easy, total_rounds: 7 }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if self.total_rounds < 1 {
            return Err(MatchError::InvalidConfiguration { total_rounds: self.total_rounds });
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    ///
    /// Missing fields fall back to [`MatchConfig::default`].
    pub fn from_json(json: &str) -> Result<Self, MatchError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| MatchError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::standard()
    }
}
