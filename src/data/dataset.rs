use std::ops::Range;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::data::target::TargetFunction;
use crate::error::{Error, Result};

/// Paired input/target bytes ready for `Network::train`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteDataset {
    pub inputs: Vec<u8>,
    pub outputs: Vec<u8>,
}

impl ByteDataset {
    /// Every byte in `range` labelled by `target`.
    pub fn from_range(range: Range<u16>, target: TargetFunction) -> Result<ByteDataset> {
        if range.end > 256 {
            return Err(Error::InvalidConfig(format!(
                "byte range must end at or below 256, got {}",
                range.end
            )));
        }
        let inputs: Vec<u8> = range.map(|b| b as u8).collect();
        Ok(ByteDataset::labelled(inputs, target))
    }

    /// All 256 byte values labelled by `target`.
    pub fn all(target: TargetFunction) -> ByteDataset {
        ByteDataset::labelled((0..=u8::MAX).collect(), target)
    }

    pub fn labelled(inputs: Vec<u8>, target: TargetFunction) -> ByteDataset {
        let outputs = inputs.iter().map(|&b| target.apply(b)).collect();
        ByteDataset { inputs, outputs }
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Shuffles the pairs and splits them into `(train, test)`, with
    /// `train_fraction` of the pairs (rounded down) in the first half.
    pub fn split<R: Rng + ?Sized>(
        &self,
        train_fraction: f64,
        rng: &mut R,
    ) -> Result<(ByteDataset, ByteDataset)> {
        if !(0.0..=1.0).contains(&train_fraction) {
            return Err(Error::InvalidConfig(format!(
                "train fraction must lie in [0, 1], got {train_fraction}"
            )));
        }
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.shuffle(rng);
        let cut = (self.len() as f64 * train_fraction).floor() as usize;

        let pick = |indices: &[usize]| ByteDataset {
            inputs: indices.iter().map(|&i| self.inputs[i]).collect(),
            outputs: indices.iter().map(|&i| self.outputs[i]).collect(),
        };
        Ok((pick(&order[..cut]), pick(&order[cut..])))
    }
}

/// `n` bytes drawn uniformly with replacement.
pub fn sample_inputs<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<u8> {
    (0..n).map(|_| rng.gen::<u8>()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn from_range_labels_each_input() {
        let data = ByteDataset::from_range(20..120, TargetFunction::IsOdd).unwrap();
        assert_eq!(data.len(), 100);
        assert_eq!(data.inputs[0], 20);
        assert_eq!(data.inputs[99], 119);
        assert_eq!(data.outputs[0], 0);
        assert_eq!(data.outputs[1], 1);
    }

    #[test]
    fn from_range_accepts_full_byte_span() {
        let data = ByteDataset::from_range(0..256, TargetFunction::IsOdd).unwrap();
        assert_eq!(data, ByteDataset::all(TargetFunction::IsOdd));
        assert!(ByteDataset::from_range(0..257, TargetFunction::IsOdd).is_err());
    }

    #[test]
    fn split_partitions_pairs() {
        let data = ByteDataset::all(TargetFunction::DivisibleBy3);
        let mut rng = StdRng::seed_from_u64(42);
        let (train, test) = data.split(0.75, &mut rng).unwrap();
        assert_eq!(train.len(), 192);
        assert_eq!(test.len(), 64);

        let mut seen: Vec<u8> = train.inputs.iter().chain(&test.inputs).copied().collect();
        seen.sort_unstable();
        assert_eq!(seen, data.inputs);
        for (i, o) in train.inputs.iter().zip(&train.outputs) {
            assert_eq!(*o, TargetFunction::DivisibleBy3.apply(*i));
        }
    }

    #[test]
    fn split_rejects_bad_fraction() {
        let data = ByteDataset::all(TargetFunction::IsOdd);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(data.split(1.5, &mut rng), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn sample_inputs_has_requested_length() {
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(sample_inputs(&mut rng, 100).len(), 100);
    }
}
