use std::sync::mpsc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::termination::StopReason;

/// Outcome of a `train_loop` run: one entry per completed epoch plus the
/// rule that ended it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainReport {
    pub epochs: Vec<EpochStats>,
    pub stop_reason: StopReason,
}

impl TrainReport {
    pub fn epoch_count(&self) -> usize {
        self.epochs.len()
    }

    /// Total error of the last epoch.
    pub fn final_error(&self) -> f64 {
        self.epochs.last().map(|s| s.total_error).unwrap_or(0.0)
    }
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` on paired byte examples until its `config` says stop.
///
/// Each epoch runs `compute` + `back_propagate` over every example in order
/// and sums `example_error / example_count` into the epoch's total error.
/// After each epoch the stop rule from `TrainConfig::termination` is
/// consulted; with both bounds at zero exactly one epoch runs.
///
/// # Arguments
/// - `network`         — modified in place; its `total_error` tracks the last epoch
/// - `inputs`          — input bytes
/// - `desired_outputs` — target bytes, same length as `inputs`
/// - `progress`        — optional channel; one `EpochStats` is sent per epoch.
///   A dropped receiver only stops the reporting, never the training.
///
/// # Errors
/// `Error::ShapeMismatch` when the slices differ in length; no weight is
/// touched in that case.
pub fn train_loop(
    network: &mut Network,
    inputs: &[u8],
    desired_outputs: &[u8],
    progress: Option<&mpsc::Sender<EpochStats>>,
) -> Result<TrainReport> {
    if inputs.len() != desired_outputs.len() {
        return Err(Error::ShapeMismatch {
            inputs: inputs.len(),
            outputs: desired_outputs.len(),
        });
    }

    let termination = network.config.termination();
    if termination.is_degenerate() {
        warn!("neither max_iterations nor max_total_error is set; training a single epoch");
    }
    info!(
        examples = inputs.len(),
        learning_rate = network.config.learning_rate,
        max_iterations = termination.max_iterations,
        max_total_error = termination.max_total_error,
        "training started"
    );

    let mut progress = progress;
    let mut epochs = Vec::new();
    let mut iteration = 0;

    loop {
        let t_start = Instant::now();
        let total_error = run_one_epoch(network, inputs, desired_outputs);
        network.set_total_error(total_error);
        iteration += 1;

        let stats = EpochStats {
            epoch: iteration,
            total_error,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };
        debug!(epoch = iteration, total_error, "epoch finished");

        if let Some(tx) = progress {
            if tx.send(stats.clone()).is_err() {
                progress = None;
            }
        }
        epochs.push(stats);

        if let Some(stop_reason) = termination.check(iteration, total_error) {
            info!(epochs = iteration, total_error, ?stop_reason, "training stopped");
            return Ok(TrainReport { epochs, stop_reason });
        }
    }
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// One online pass over the examples. Returns the epoch's total error.
fn run_one_epoch(network: &mut Network, inputs: &[u8], desired_outputs: &[u8]) -> f64 {
    let n = inputs.len() as f64;
    let mut total_error = 0.0;

    for (&input, &desired) in inputs.iter().zip(desired_outputs) {
        network.compute(input);
        total_error += network.back_propagate(desired) / n;
    }

    total_error
}
