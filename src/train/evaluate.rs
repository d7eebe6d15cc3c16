use serde::{Deserialize, Serialize};

use crate::data::target::TargetFunction;
use crate::network::network::Network;

/// One inference checked against its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub input: u8,
    pub expected: u8,
    pub predicted: u8,
}

impl Prediction {
    pub fn is_match(&self) -> bool {
        self.expected == self.predicted
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvalReport {
    pub predictions: Vec<Prediction>,
    pub matches: usize,
}

impl EvalReport {
    /// Fraction of matching predictions in [0, 1]; `0.0` for an empty report.
    pub fn accuracy(&self) -> f64 {
        if self.predictions.is_empty() {
            return 0.0;
        }
        self.matches as f64 / self.predictions.len() as f64
    }
}

/// Runs `compute` on every input and compares with `target`.
pub fn evaluate(network: &mut Network, inputs: &[u8], target: TargetFunction) -> EvalReport {
    let predictions: Vec<Prediction> = inputs
        .iter()
        .map(|&input| Prediction {
            input,
            expected: target.apply(input),
            predicted: network.compute(input),
        })
        .collect();
    let matches = predictions.iter().filter(|p| p.is_match()).count();
    EvalReport { predictions, matches }
}
