/// Logistic sigmoid, the only activation the engine uses.
///
/// Evaluated in `f64` with no clamping: very large negative inputs drive
/// `exp` to infinity and the result to exactly `0.0`, never to NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sigmoid;

impl Sigmoid {
    /// σ(x) = 1 / (1 + e^-x)
    pub fn function(x: f64) -> f64 {
        1.0 / (1.0 + (-x).exp())
    }

    /// Derivative expressed through the neuron's output: σ'(x) = y·(1 - y).
    ///
    /// Backprop only keeps outputs around, so this is the form it needs.
    pub fn derivative_from_output(y: f64) -> f64 {
        y * (1.0 - y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sigmoid_of_zero_is_one_half() {
        assert_relative_eq!(Sigmoid::function(0.0), 0.5);
    }

    #[test]
    fn sigmoid_stays_inside_open_unit_interval() {
        for x in [-30.0, -5.0, -0.1, 0.1, 5.0, 30.0] {
            let y = Sigmoid::function(x);
            assert!(y > 0.0 && y < 1.0, "sigmoid({x}) = {y}");
        }
    }

    #[test]
    fn sigmoid_is_symmetric() {
        for x in [0.25, 1.0, 3.5] {
            assert_relative_eq!(Sigmoid::function(-x), 1.0 - Sigmoid::function(x), epsilon = 1e-12);
        }
    }

    #[test]
    fn extreme_inputs_saturate_without_nan() {
        let low = Sigmoid::function(-1e6);
        let high = Sigmoid::function(1e6);
        assert!(!low.is_nan() && !high.is_nan());
        assert_eq!(low, 0.0);
        assert_eq!(high, 1.0);
    }

    #[test]
    fn derivative_peaks_at_one_half() {
        assert_relative_eq!(Sigmoid::derivative_from_output(0.5), 0.25);
        assert_relative_eq!(Sigmoid::derivative_from_output(0.0), 0.0);
        assert_relative_eq!(Sigmoid::derivative_from_output(1.0), 0.0);
    }
}
