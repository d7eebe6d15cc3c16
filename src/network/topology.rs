use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::math::bits::MAX_BYTE_WIDTH;

/// Ordered layer widths, input layer first.
///
/// Validated once at construction and immutable afterwards. Also owns the
/// flattening of `(layer, neuron, next)` connection keys into slots of the
/// flat weight store:
///
/// ```text
/// index = offset(layer) + neuron * widths[layer + 1] + next
/// offset(layer) = Σ_{l < layer} widths[l] * widths[l + 1]
/// ```
///
/// Layer blocks are concatenated in order and each block is row-major over
/// (source neuron, destination neuron), so the mapping is a bijection onto
/// `0..connection_count()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Topology {
    widths: Vec<usize>,
    offsets: Vec<usize>,
}

impl Topology {
    pub fn new(widths: &[usize]) -> Result<Topology> {
        if widths.len() < 2 {
            return Err(Error::InvalidTopology(format!(
                "need at least an input and an output layer, got {} layer(s)",
                widths.len()
            )));
        }
        if let Some(layer) = widths.iter().position(|&w| w == 0) {
            return Err(Error::InvalidTopology(format!("layer {layer} has no neurons")));
        }
        let input = widths[0];
        let output = widths[widths.len() - 1];
        if input > MAX_BYTE_WIDTH || output > MAX_BYTE_WIDTH {
            return Err(Error::InvalidTopology(format!(
                "input and output layers are limited to {MAX_BYTE_WIDTH} neurons, got {input} and {output}"
            )));
        }

        let mut offsets = Vec::with_capacity(widths.len() - 1);
        let mut acc = 0;
        for pair in widths.windows(2) {
            offsets.push(acc);
            acc += pair[0] * pair[1];
        }

        Ok(Topology {
            widths: widths.to_vec(),
            offsets,
        })
    }

    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    pub fn layer_count(&self) -> usize {
        self.widths.len()
    }

    pub fn width(&self, layer: usize) -> usize {
        self.widths[layer]
    }

    pub fn input_width(&self) -> usize {
        self.widths[0]
    }

    pub fn output_width(&self) -> usize {
        self.widths[self.widths.len() - 1]
    }

    pub fn last_layer(&self) -> usize {
        self.widths.len() - 1
    }

    pub fn max_width(&self) -> usize {
        self.widths.iter().copied().max().unwrap_or(0)
    }

    /// Σ widths[i] · widths[i + 1]: the size of the weight store.
    pub fn connection_count(&self) -> usize {
        let last = self.widths.len() - 2;
        self.offsets[last] + self.widths[last] * self.widths[last + 1]
    }

    /// Slot of the weight from `neuron` in `layer` to `next` in `layer + 1`.
    ///
    /// Fails for the output layer (it has no outgoing connections) and for
    /// neuron indices outside their layer.
    pub fn weight_index(&self, layer: usize, neuron: usize, next: usize) -> Result<usize> {
        let in_range = layer < self.last_layer()
            && neuron < self.widths[layer]
            && next < self.widths[layer + 1];
        if !in_range {
            return Err(Error::WeightIndex { layer, neuron, next });
        }
        Ok(self.index_unchecked(layer, neuron, next))
    }

    /// Same formula as [`Topology::weight_index`] for keys the engine has
    /// already bounded by its own loops.
    #[inline]
    pub(crate) fn index_unchecked(&self, layer: usize, neuron: usize, next: usize) -> usize {
        self.offsets[layer] + neuron * self.widths[layer + 1] + next
    }
}

impl TryFrom<Vec<usize>> for Topology {
    type Error = Error;

    fn try_from(widths: Vec<usize>) -> Result<Topology> {
        Topology::new(&widths)
    }
}

impl From<Topology> for Vec<usize> {
    fn from(topology: Topology) -> Vec<usize> {
        topology.widths
    }
}
