use serde::{Deserialize, Serialize};

/// Divisor applied to an example's summed squared output error.
///
/// - `OutputWidth`        — standard mean over the output neurons.
/// - `OutputWidthPlusOne` — divides by one more than the output width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MseNormalization {
    #[default]
    OutputWidth,
    OutputWidthPlusOne,
}

impl MseNormalization {
    pub fn divisor(self, output_width: usize) -> f64 {
        match self {
            MseNormalization::OutputWidth => output_width as f64,
            MseNormalization::OutputWidthPlusOne => (output_width + 1) as f64,
        }
    }
}

/// Accumulates the per-example error reported by back-propagation.
///
/// The terms are the output-layer error signals `φ·δ` (sigmoid slope times
/// target-minus-output), not raw output differences.
#[derive(Debug, Clone, Copy, Default)]
pub struct MseLoss {
    sum: f64,
}

impl MseLoss {
    pub fn new() -> MseLoss {
        MseLoss::default()
    }

    pub fn add(&mut self, term: f64) {
        self.sum += term * term;
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Scalar error for the example: Σ term² / divisor.
    pub fn finish(self, output_width: usize, normalization: MseNormalization) -> f64 {
        self.sum / normalization.divisor(output_width)
    }
}
