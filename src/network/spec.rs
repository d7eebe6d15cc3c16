use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::data::dataset::ByteDataset;
use crate::data::target::TargetFunction;
use crate::error::Result;
use crate::network::network::Network;
use crate::network::topology::Topology;
use crate::train::train_config::TrainConfig;

/// A serializable training run: architecture, settings, target and data.
///
/// Stored as JSON next to a run so it can be repeated; trained weights are
/// never part of it. Missing optional fields fall back to the defaults of
/// [`NetworkSpec::default`].
///
/// ```json
/// {
///   "name": "odd",
///   "topology": [8, 12, 1],
///   "train": { "learning_rate": 0.8, "max_iterations": 500, "max_total_error": 1e-5 },
///   "target": "is_odd",
///   "train_range": { "start": 0, "end": 256 },
///   "seed": 7
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name of the run.
    pub name: String,
    /// Layer widths, input first; input and output at most 8 wide.
    pub topology: Topology,
    #[serde(default)]
    pub train: TrainConfig,
    pub target: TargetFunction,
    /// Byte values (end exclusive, at most 256) used as training inputs.
    #[serde(default = "default_train_range")]
    pub train_range: Range<u16>,
    /// Number of random bytes checked after training.
    #[serde(default = "default_test_samples")]
    pub test_samples: usize,
    /// Seed for weight init and test sampling; entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_train_range() -> Range<u16> {
    20..120
}

fn default_test_samples() -> usize {
    100
}

impl Default for NetworkSpec {
    fn default() -> Self {
        NetworkSpec {
            name: "is-prime".to_string(),
            topology: Topology::new(&[8, 12, 1]).expect("default topology is valid"),
            train: TrainConfig::new(0.8, 1000, 0.00001),
            target: TargetFunction::IsPrime,
            train_range: default_train_range(),
            test_samples: default_test_samples(),
            seed: None,
        }
    }
}

impl NetworkSpec {
    /// Fresh network (zero weights) with this spec's topology and settings.
    pub fn build(&self) -> Network {
        Network::from_topology(self.topology.clone()).with_config(self.train.clone())
    }

    pub fn dataset(&self) -> Result<ByteDataset> {
        ByteDataset::from_range(self.train_range.clone(), self.target)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
