//! Byte ⇄ neuron-activation codec.
//!
//! Bit `k` of a byte (little-endian, bit 0 = least significant) drives
//! neuron `k` of the input layer and is read back from neuron `k` of the
//! output layer. Both layers are therefore capped at eight neurons.

/// Widest layer a single byte can feed or be decoded from.
pub const MAX_BYTE_WIDTH: usize = 8;

/// Activation (0.0 or 1.0) of neuron `k` for `byte`.
pub fn bit(byte: u8, k: usize) -> f64 {
    debug_assert!(k < MAX_BYTE_WIDTH);
    ((byte >> k) & 1) as f64
}

/// Writes the low `out.len()` bits of `byte` into `out`, one per neuron.
pub fn load(byte: u8, out: &mut [f64]) {
    for (k, slot) in out.iter_mut().enumerate() {
        *slot = bit(byte, k);
    }
}

/// Rebuilds a byte from output activations, neuron 0 landing in bit 0.
///
/// Each activation is rounded half-to-even, so an undecided neuron sitting
/// at exactly 0.5 reads as 0.
pub fn decode(activations: &[f64]) -> u8 {
    debug_assert!(activations.len() <= MAX_BYTE_WIDTH);
    activations
        .iter()
        .rev()
        .fold(0u8, |acc, &y| (acc << 1) | (y.round_ties_even() as u8 & 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_then_decode_recovers_every_byte() {
        let mut buf = [0.0; MAX_BYTE_WIDTH];
        for b in 0..=u8::MAX {
            load(b, &mut buf);
            assert_eq!(decode(&buf), b);
        }
    }

    #[test]
    fn load_is_little_endian() {
        let mut buf = [0.0; 4];
        load(0b0000_0110, &mut buf);
        assert_eq!(buf, [0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn narrow_layers_drop_high_bits() {
        let mut buf = [0.0; 3];
        load(0b1111_1010, &mut buf);
        assert_eq!(buf, [0.0, 1.0, 0.0]);
        assert_eq!(decode(&buf), 0b010);
    }

    #[test]
    fn decode_rounds_activations() {
        assert_eq!(decode(&[0.93, 0.12]), 0b01);
        assert_eq!(decode(&[0.49, 0.51]), 0b10);
        assert_eq!(decode(&[0.5]), 0);
    }
}
