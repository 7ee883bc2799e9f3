//! Session configuration.
//!
//! A config is a JSON document; every field is optional and falls back to
//! the reference values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use district_core::enums::ScenarioId;
use district_core::tuning::Tuning;

use crate::error::SimError;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for procedural scenarios. Same seed = same layout.
    pub seed: u64,
    /// Built-in scenario to load.
    pub scenario: ScenarioId,
    /// Gameplay tuning.
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            scenario: ScenarioId::default(),
            tuning: Tuning::default(),
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self, SimError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        self.tuning.validate().map_err(SimError::InvalidTuning)
    }
}
