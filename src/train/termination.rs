use serde::{Deserialize, Serialize};

/// Why a training run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Neither bound was set; exactly one epoch ran.
    SingleEpoch,
    /// Total error fell to or below `max_total_error`.
    Converged,
    /// `max_iterations` epochs ran without converging.
    MaxIterations,
}

/// Per-epoch stop rule.
///
/// Stops when `total_error <= max_total_error` OR `iteration >=
/// max_iterations`. Every run is therefore bounded: a zero `max_iterations`
/// is already reached after the first epoch. When both bounds are zero it
/// stops after the first epoch regardless of error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Termination {
    pub max_iterations: usize,
    pub max_total_error: f64,
}

impl Termination {
    pub fn is_degenerate(&self) -> bool {
        self.max_iterations == 0 && self.max_total_error == 0.0
    }

    /// Decision after `iteration` completed epochs ended at `total_error`.
    pub fn check(&self, iteration: usize, total_error: f64) -> Option<StopReason> {
        if self.is_degenerate() {
            Some(StopReason::SingleEpoch)
        } else if total_error <= self.max_total_error {
            Some(StopReason::Converged)
        } else if iteration >= self.max_iterations {
            Some(StopReason::MaxIterations)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(max_iterations: usize, max_total_error: f64) -> Termination {
        Termination { max_iterations, max_total_error }
    }

    #[test]
    fn zero_bounds_stop_after_first_epoch() {
        assert_eq!(rule(0, 0.0).check(1, 12.0), Some(StopReason::SingleEpoch));
    }

    #[test]
    fn zero_iteration_bound_stops_after_first_epoch() {
        let t = rule(0, 0.01);
        assert_eq!(t.check(1, 0.5), Some(StopReason::MaxIterations));
        assert_eq!(t.check(1, 0.005), Some(StopReason::Converged));
    }

    #[test]
    fn iteration_bound_alone_governs() {
        let t = rule(3, 0.0);
        assert_eq!(t.check(1, 0.2), None);
        assert_eq!(t.check(2, 0.2), None);
        assert_eq!(t.check(3, 0.2), Some(StopReason::MaxIterations));
    }

    #[test]
    fn either_bound_is_sufficient() {
        let t = rule(100, 1e-3);
        assert_eq!(t.check(5, 1e-4), Some(StopReason::Converged));
        assert_eq!(t.check(100, 0.3), Some(StopReason::MaxIterations));
        assert_eq!(t.check(50, 0.3), None);
    }
}
