/// Plain online gradient step, no momentum and no batching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Updated value of one weight given the error signal of the neuron it
    /// feeds and the activation of the neuron it comes from.
    pub fn step(&self, weight: f64, error: f64, input: f64) -> f64 {
        weight + self.learning_rate * error * input
    }
}
