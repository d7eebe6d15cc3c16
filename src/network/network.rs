use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::activation::sigmoid::Sigmoid;
use crate::error::{Error, Result};
use crate::loss::mse::MseLoss;
use crate::math::bits;
use crate::math::matrix::Matrix;
use crate::network::topology::Topology;
use crate::optim::sgd::Sgd;
use crate::train::loop_fn::{train_loop, TrainReport};
use crate::train::train_config::TrainConfig;

/// Fully connected sigmoid MLP mapping one byte to one byte.
///
/// Owns its weights and both scratch grids. `compute` leaves every layer's
/// activations in `results`; `back_propagate` reads them, so the two must
/// be called in pairs on the same example.
#[derive(Debug, Clone)]
pub struct Network {
    topology: Topology,
    weights: Vec<f64>,
    results: Matrix,
    errors: Matrix,
    total_error: f64,
    /// Learning rate, stop bounds and error normalisation used by `train`
    /// and `back_propagate`.
    pub config: TrainConfig,
}

/// Aggregate view of the weight store for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl Network {
    /// Builds a network with all weights at zero; call `randomize_weights`
    /// before training.
    pub fn new(widths: &[usize]) -> Result<Network> {
        Ok(Network::from_topology(Topology::new(widths)?))
    }

    pub fn from_topology(topology: Topology) -> Network {
        let weights = vec![0.0; topology.connection_count()];
        let results = Matrix::zeros(topology.layer_count(), topology.max_width());
        let errors = Matrix::zeros(topology.layer_count(), topology.max_width());
        Network {
            topology,
            weights,
            results,
            errors,
            total_error: 0.0,
            config: TrainConfig::default(),
        }
    }

    pub fn with_config(mut self, config: TrainConfig) -> Network {
        self.config = config;
        self
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Total error of the most recent training epoch.
    pub fn total_error(&self) -> f64 {
        self.total_error
    }

    pub(crate) fn set_total_error(&mut self, total_error: f64) {
        self.total_error = total_error;
    }

    /// Overwrites every weight with a uniform sample in `[-1, 1)` from the
    /// thread RNG and resets the total error.
    pub fn randomize_weights(&mut self) {
        self.randomize_weights_with(&mut rand::thread_rng());
    }

    pub fn randomize_weights_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.total_error = 0.0;
        for w in self.weights.iter_mut() {
            *w = rng.gen::<f64>() * 2.0 - 1.0;
        }
    }

    /// Weight on the connection from `neuron` in `layer` to `next` in `layer + 1`.
    pub fn weight(&self, layer: usize, neuron: usize, next: usize) -> Result<f64> {
        let index = self.topology.weight_index(layer, neuron, next)?;
        Ok(self.weights[index])
    }

    pub fn set_weight(&mut self, layer: usize, neuron: usize, next: usize, value: f64) -> Result<()> {
        let index = self.topology.weight_index(layer, neuron, next)?;
        self.weights[index] = value;
        Ok(())
    }

    pub fn weight_count(&self) -> usize {
        self.weights.len()
    }

    pub fn weight_summary(&self) -> WeightSummary {
        let count = self.weights.len();
        let (min, max, sum) = self.weights.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, sum), &w| (min.min(w), max.max(w), sum + w),
        );
        WeightSummary {
            count,
            min,
            max,
            mean: sum / count as f64,
        }
    }

    /// Copy of `layer`'s activations from the last forward pass.
    pub fn layer_outputs(&self, layer: usize) -> Result<Vec<f64>> {
        let layers = self.topology.layer_count();
        if layer >= layers {
            return Err(Error::LayerIndex { layer, layers });
        }
        Ok(self.results.row(layer)[..self.topology.width(layer)].to_vec())
    }

    /// Forward pass; stores every layer's activations for backprop and
    /// returns the rounded output layer as a byte.
    pub fn compute(&mut self, input: u8) -> u8 {
        self.results.clear();
        let input_width = self.topology.input_width();
        bits::load(input, &mut self.results.row_mut(0)[..input_width]);

        for layer in 1..self.topology.layer_count() {
            for neuron in 0..self.topology.width(layer) {
                let sum: f64 = (0..self.topology.width(layer - 1))
                    .map(|prev| {
                        let w = self.weights[self.topology.index_unchecked(layer - 1, prev, neuron)];
                        self.results[(layer - 1, prev)] * w
                    })
                    .sum();
                self.results[(layer, neuron)] = Sigmoid::function(sum);
            }
        }

        let last = self.topology.last_layer();
        bits::decode(&self.results.row(last)[..self.topology.output_width()])
    }

    /// Backward pass against `desired_output` for the example last passed
    /// to `compute`. Returns that example's mean squared error.
    ///
    /// Layers are processed from the output back. Each neuron's incoming
    /// weights are updated as soon as its error is known, so a hidden
    /// layer's error sum already sees the updated weights of the layer
    /// above it, while activations stay those of the forward pass.
    pub fn back_propagate(&mut self, desired_output: u8) -> f64 {
        self.errors.clear();
        let sgd = Sgd::new(self.config.learning_rate);
        let last = self.topology.last_layer();
        let mut loss = MseLoss::new();

        for layer in (1..=last).rev() {
            for neuron in 0..self.topology.width(layer) {
                let y = self.results[(layer, neuron)];
                let phi = Sigmoid::derivative_from_output(y);

                let error = if layer == last {
                    let term = phi * (bits::bit(desired_output, neuron) - y);
                    loss.add(term);
                    term
                } else {
                    let weighted: f64 = (0..self.topology.width(layer + 1))
                        .map(|next| {
                            let w = self.weights[self.topology.index_unchecked(layer, neuron, next)];
                            self.errors[(layer + 1, next)] * w
                        })
                        .sum();
                    phi * weighted
                };
                self.errors[(layer, neuron)] = error;

                for prev in 0..self.topology.width(layer - 1) {
                    let index = self.topology.index_unchecked(layer - 1, prev, neuron);
                    self.weights[index] = sgd.step(self.weights[index], error, self.results[(layer - 1, prev)]);
                }
            }
        }

        loss.finish(self.topology.output_width(), self.config.normalization)
    }

    /// Trains on paired examples until `self.config` says to stop.
    ///
    /// Fails before touching any weight if the two slices differ in length.
    pub fn train(&mut self, inputs: &[u8], desired_outputs: &[u8]) -> Result<TrainReport> {
        train_loop(self, inputs, desired_outputs, None)
    }
}
