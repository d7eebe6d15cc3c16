pub mod network;
pub mod spec;
pub mod topology;

pub use network::{Network, WeightSummary};
pub use spec::NetworkSpec;
pub use topology::Topology;
