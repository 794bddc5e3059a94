//! Allocator configuration.
//!
//! Loaded from TOML:
//!
//! ```toml
//! [weights]
//! academic_performance = 1.0
//! behaviour = 1.5
//! learning_difficulty = 2.0
//! ```
//!
//! Missing keys fall back to [`DifficultyWeights::default`].

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::scoring::DifficultyWeights;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocatorConfig {
    pub weights: DifficultyWeights,
}

impl AllocatorConfig {
    pub fn new(weights: DifficultyWeights) -> Self {
        Self { weights }
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AllocatorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()
    }
}
