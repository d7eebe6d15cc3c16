pub mod dataset;
pub mod target;

pub use dataset::{sample_inputs, ByteDataset};
pub use target::TargetFunction;
