use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{QHiveError, Result};

/// Hyperparameters of a [`crate::agent::DqnAgent`].
///
/// Missing fields fall back to [`AgentConfig::default`] when deserializing, so a
/// JSON file only has to list what it changes:
///
/// ```
/// use qhive::config::AgentConfig;
///
/// let config = AgentConfig::from_json_str(r#"{ "learning_rate": 0.01, "batch_size": 16 }"#).unwrap();
/// assert_eq!(config.batch_size, 16);
/// assert_eq!(config.gamma, 0.99);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Widths of the hidden layers between the state input and the action output.
    pub hidden_layers: Vec<usize>,
    /// Discount factor applied to the bootstrapped next-state value.
    pub gamma: f64,
    /// Initial exploration probability.
    pub epsilon: f64,
    /// Per-`train()` decay: a factor, or a step when `linear_epsilon_decay` is set.
    pub epsilon_decay: f64,
    /// Floor for epsilon.
    pub epsilon_min: f64,
    pub learning_rate: f64,
    /// Experiences sampled per `train()` call, each applied as its own SGD step.
    pub batch_size: usize,
    /// Subtract `epsilon_decay` instead of multiplying by it.
    pub linear_epsilon_decay: bool,
    /// Seed for the agent's random source; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            hidden_layers: vec![24, 24],
            gamma: 0.99,
            epsilon: 1.0,
            epsilon_decay: 0.995,
            epsilon_min: 0.01,
            learning_rate: 0.001,
            batch_size: 32,
            linear_epsilon_decay: false,
            seed: None,
        }
    }
}

impl AgentConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every hyperparameter range.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.gamma) {
            return Err(QHiveError::invalid_parameter(
                "gamma".to_string(),
                format!("must be in [0, 1], got {}", self.gamma),
            ));
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(QHiveError::invalid_parameter(
                "epsilon".to_string(),
                format!("must be in [0, 1], got {}", self.epsilon),
            ));
        }
        if !(0.0..=1.0).contains(&self.epsilon_min) || self.epsilon_min > self.epsilon {
            return Err(QHiveError::invalid_parameter(
                "epsilon_min".to_string(),
                format!("must be in [0, epsilon], got {}", self.epsilon_min),
            ));
        }
        if !(self.epsilon_decay >= 0.0) {
            return Err(QHiveError::invalid_parameter(
                "epsilon_decay".to_string(),
                format!("must be non-negative, got {}", self.epsilon_decay),
            ));
        }
        if !self.linear_epsilon_decay && self.epsilon_decay > 1.0 {
            return Err(QHiveError::invalid_parameter(
                "epsilon_decay".to_string(),
                format!("multiplicative decay factor must be at most 1, got {}", self.epsilon_decay),
            ));
        }
        if !(self.learning_rate > 0.0) || !self.learning_rate.is_finite() {
            return Err(QHiveError::invalid_parameter(
                "learning_rate".to_string(),
                format!("must be positive and finite, got {}", self.learning_rate),
            ));
        }
        if self.batch_size == 0 {
            return Err(QHiveError::invalid_parameter(
                "batch_size",
                "must be greater than 0",
            ));
        }
        if self.hidden_layers.contains(&0) {
            return Err(QHiveError::invalid_parameter(
                "hidden_layers",
                "every hidden layer needs at least one neuron",
            ));
        }
        Ok(())
    }
}

/// Settings for a [`crate::replay_buffer::ReplayBuffer`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayBufferConfig {
    pub max_size: usize,
}

impl Default for ReplayBufferConfig {
    fn default() -> Self {
        Self { max_size: 10_000 }
    }
}

impl ReplayBufferConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(QHiveError::invalid_parameter(
                "max_size",
                "must be greater than 0",
            ));
        }
        Ok(())
    }
}
