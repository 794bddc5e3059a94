//! Difficulty weighting configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Weights applied to each ordinal attribute when rating a student.
///
/// Passed explicitly to the scorer; there is no global default in use
/// unless the caller asks for [`DifficultyWeights::default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyWeights {
    /// Weight of academic performance.
    pub academic_performance: f64,
    /// Weight of behaviour.
    pub behaviour: f64,
    /// Weight of learning difficulty.
    pub learning_difficulty: f64,
}

impl DifficultyWeights {
    /// Creates a weight set.
    pub fn new(academic_performance: f64, behaviour: f64, learning_difficulty: f64) -> Self {
        Self {
            academic_performance,
            behaviour,
            learning_difficulty,
        }
    }

    /// Equal weight for every attribute.
    pub fn uniform() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Every weight must be finite and strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("academic_performance", self.academic_performance),
            ("behaviour", self.behaviour),
            ("learning_difficulty", self.learning_difficulty),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}

impl Default for DifficultyWeights {
    fn default() -> Self {
        Self::new(1.0, 1.5, 2.0)
    }
}
