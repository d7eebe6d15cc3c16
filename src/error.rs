/// Library error type.
///
/// Every variant is a caller-side precondition violation or a spec-file I/O
/// failure; nothing here is retried internally.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    #[error("shape mismatch: {inputs} inputs but {outputs} desired outputs")]
    ShapeMismatch { inputs: usize, outputs: usize },

    #[error("weight index out of range: layer {layer}, neuron {neuron}, next {next}")]
    WeightIndex {
        layer: usize,
        neuron: usize,
        next: usize,
    },

    #[error("layer index out of range: layer {layer} of {layers}")]
    LayerIndex { layer: usize, layers: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
