use serde::{Deserialize, Serialize};

/// Statistics for one completed epoch.
///
/// Collected into `TrainReport::epochs` and, when a progress channel is
/// passed to `train_loop`, sent as soon as the epoch finishes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Σ over examples of (per-example error / example count).
    pub total_error: f64,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}
