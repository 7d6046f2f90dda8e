//! Weightless staging layers at the two ends of the chain.

/// The input layer: a staging buffer the raw feature vector is loaded into.
///
/// The signal carries one extra trailing element pinned to `1.0` — the bias
/// input consumed by the first weighted layer. `load` never touches it.
#[derive(Clone, Debug)]
pub struct Input {
    signal: Vec<f64>,
}

impl Input {
    pub fn new(width: usize) -> Self {
        let mut signal = vec![0.0; width + 1];
        signal[width] = 1.0;
        Input { signal: signal }
    }

    /// Copies `features` into the signal buffer.
    pub fn load(&mut self, features: &[f64]) {
        let width = self.signal.len() - 1;
        self.signal[..width].copy_from_slice(features);
    }

    /// The current signal, including the trailing bias element.
    pub fn signal(&self) -> &[f64] {
        &self.signal
    }
}

/// The terminal layer: holds the target vector during a backward pass.
///
/// It has no weights and no bias slot. It exists so the last weighted layer
/// can read its training target the same way every interior layer reads its
/// successor, keeping the backward pass free of special cases.
#[derive(Clone, Debug)]
pub struct Answer {
    targets: Vec<f64>,
}

impl Answer {
    pub fn new(width: usize) -> Self {
        Answer { targets: vec![0.0; width] }
    }

    /// Copies `targets` into the staging buffer.
    pub fn load(&mut self, targets: &[f64]) {
        self.targets.copy_from_slice(targets);
    }

    pub fn targets(&self) -> &[f64] {
        &self.targets
    }
}
