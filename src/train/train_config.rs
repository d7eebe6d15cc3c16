use serde::{Deserialize, Serialize};

use crate::loss::mse::MseNormalization;
use crate::train::termination::Termination;

pub const DEFAULT_LEARNING_RATE: f64 = 0.8;

/// Mutable training settings carried by every `Network`.
///
/// # Fields
/// - `learning_rate`   — step size of each online weight update
/// - `max_iterations`  — epoch bound; `0` stops after the first epoch
/// - `max_total_error` — error bound; `0.0` means "only an exact fit stops"
/// - `normalization`   — divisor applied to each example's squared error
///
/// With both bounds left at zero, training runs exactly one epoch. See
/// [`Termination`] for the full stop rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub max_iterations: usize,
    pub max_total_error: f64,
    pub normalization: MseNormalization,
}

impl TrainConfig {
    pub fn new(learning_rate: f64, max_iterations: usize, max_total_error: f64) -> Self {
        TrainConfig {
            learning_rate,
            max_iterations,
            max_total_error,
            normalization: MseNormalization::default(),
        }
    }

    pub fn termination(&self) -> Termination {
        Termination {
            max_iterations: self.max_iterations,
            max_total_error: self.max_total_error,
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(DEFAULT_LEARNING_RATE, 0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_single_epoch_guard() {
        let config = TrainConfig::default();
        assert_eq!(config.learning_rate, 0.8);
        assert_eq!(config.max_iterations, 0);
        assert_eq!(config.max_total_error, 0.0);
        assert!(config.termination().is_degenerate());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: TrainConfig = serde_json::from_str(r#"{ "max_iterations": 250 }"#).unwrap();
        assert_eq!(config.max_iterations, 250);
        assert_eq!(config.learning_rate, DEFAULT_LEARNING_RATE);
        assert_eq!(config.normalization, MseNormalization::OutputWidth);
    }
}
