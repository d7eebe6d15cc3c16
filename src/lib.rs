pub mod activation;
pub mod data;
pub mod error;
pub mod loss;
pub mod math;
pub mod network;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use activation::Sigmoid;
pub use data::{sample_inputs, ByteDataset, TargetFunction};
pub use error::{Error, Result};
pub use loss::{MseLoss, MseNormalization};
pub use math::matrix::Matrix;
pub use network::{Network, NetworkSpec, Topology, WeightSummary};
pub use optim::sgd::Sgd;
pub use train::{evaluate, train_loop, EpochStats, EvalReport, Prediction, StopReason, TrainConfig, TrainReport};
