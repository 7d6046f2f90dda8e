//! A fixed-shape [multilayer perceptron]
//! (https://en.wikipedia.org/wiki/Multilayer_perceptron) trained by
//! backpropagation.
//!
//! The network owns its full layer chain: an input staging buffer, one
//! weighted sigmoid layer per consecutive width pair, and an answer buffer
//! holding the target during training. Every buffer is reused across calls;
//! `train` and `predict` allocate nothing.
//!
//! # Example
//!
//! ```
//! use synapses::mlp::{Mlp, Shape};
//! use synapses::rng::FastRand;
//!
//! let shape = Shape::new(2, &[3], 1).unwrap();
//! let mut rng = FastRand::new(5);
//! let mut mlp = Mlp::new(&shape, &mut rng);
//!
//! let out = mlp.predict(&[0.3, 0.9]);
//! assert_eq!(out.len(), 1);
//! assert!(out[0] > 0.0 && out[0] < 1.0);
//! ```

use error::{Error, Result};
use layers::{Answer, Dense, Input};
use rng::FastRand;

/// The fixed sequence of layer widths defining a network's topology.
///
/// A shape always has an input width and an output width, with any number of
/// hidden widths (possibly none) in between. Widths are validated once here,
/// so the engine itself never checks them again.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    widths: Vec<usize>,
}

impl Shape {
    /// Builds a shape descriptor from the three width groups.
    ///
    /// Returns an error if any width is zero. An empty `hiddens` list is
    /// valid and yields a direct input-to-output network.
    pub fn new(inputs: usize, hiddens: &[usize], outputs: usize) -> Result<Self> {
        let mut widths = Vec::with_capacity(hiddens.len() + 2);
        widths.push(inputs);
        widths.extend_from_slice(hiddens);
        widths.push(outputs);
        if widths.iter().any(|&width| width == 0) {
            return Err(Error::InvalidShape(format!(
                "layer widths must be positive, got {:?}",
                widths
            )));
        }
        Ok(Shape { widths: widths })
    }

    /// The width of the input layer.
    pub fn inputs(&self) -> usize {
        self.widths[0]
    }

    /// The width of the output layer.
    pub fn outputs(&self) -> usize {
        self.widths[self.widths.len() - 1]
    }

    /// Every width in chain order.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }
}

/// A multilayer perceptron with sigmoid activations throughout.
#[derive(Clone, Debug)]
pub struct Mlp {
    input: Input,
    dense: Vec<Dense>,
    answer: Answer,
}

impl Mlp {
    /// Creates a network matching `shape`, with every weight drawn from
    /// `rng`.
    ///
    /// Two networks built from equal shapes and identically seeded
    /// generators start with identical weights.
    pub fn new(shape: &Shape, rng: &mut FastRand) -> Self {
        let widths = shape.widths();
        let mut dense = Vec::with_capacity(widths.len() - 1);
        for i in 0..(widths.len() - 1) {
            dense.push(Dense::new(widths[i], widths[i + 1], rng));
        }
        Mlp {
            input: Input::new(shape.inputs()),
            dense: dense,
            answer: Answer::new(shape.outputs()),
        }
    }

    /// Returns the size of the input layer to the network.
    pub fn input_len(&self) -> usize {
        self.dense[0].input_len()
    }

    /// Returns the size of the output layer from the network.
    pub fn output_len(&self) -> usize {
        self.dense[self.dense.len() - 1].output_len()
    }

    /// Runs a forward pass and returns the output layer's activations.
    ///
    /// Every returned value is in the open interval `(0, 1)`. The slice
    /// aliases the network's own signal buffer: it is valid only until the
    /// next `train` or `predict` call, and must be copied to outlive it.
    ///
    /// `features` must be exactly `input_len()` long; the engine does not
    /// validate buffer lengths.
    pub fn predict(&mut self, features: &[f64]) -> &[f64] {
        self.forward(features);
        self.output()
    }

    /// Runs one stochastic gradient descent step on a single example.
    ///
    /// A full forward pass caches every layer's activations, then deltas and
    /// weight updates flow backward from the output layer, each layer tuned
    /// strictly before its predecessor. `features` and `targets` must match
    /// `input_len()` and `output_len()`; the engine does not validate buffer
    /// lengths.
    pub fn train(&mut self, features: &[f64], targets: &[f64], rate: f64) {
        self.forward(features);
        self.backward(targets, rate);
    }

    /// The output activations cached by the most recent pass.
    pub fn output(&self) -> &[f64] {
        self.dense[self.dense.len() - 1].activations()
    }

    /// Loads `features` and feeds each layer in chain order.
    fn forward(&mut self, features: &[f64]) {
        self.input.load(features);
        self.dense[0].feed(self.input.signal());
        for i in 1..self.dense.len() {
            let (fed, rest) = self.dense.split_at_mut(i);
            rest[0].feed(fed[i - 1].signal());
        }
    }

    /// Loads `targets` and tunes each layer in reverse chain order.
    ///
    /// The ordering is mandatory: every tune reads its successor's freshly
    /// computed deltas, so successors go first.
    fn backward(&mut self, targets: &[f64], rate: f64) {
        self.answer.load(targets);
        let last = self.dense.len() - 1;
        {
            let (fed, rest) = self.dense.split_at_mut(last);
            let inputs = if last == 0 {
                self.input.signal()
            } else {
                fed[last - 1].signal()
            };
            rest[0].tune_output(inputs, self.answer.targets(), rate);
        }
        for i in (0..last).rev() {
            let (head, tail) = self.dense.split_at_mut(i + 1);
            let (fed, this) = head.split_at_mut(i);
            let inputs = if i == 0 {
                self.input.signal()
            } else {
                fed[i - 1].signal()
            };
            this[0].tune_hidden(inputs, &tail[0], rate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rng::FastRand;

    fn build(inputs: usize, hiddens: &[usize], outputs: usize, seed: u32) -> Mlp {
        let shape = Shape::new(inputs, hiddens, outputs).unwrap();
        let mut rng = FastRand::new(seed);
        Mlp::new(&shape, &mut rng)
    }

    #[test]
    fn zero_widths_are_rejected() {
        assert!(Shape::new(0, &[2], 1).is_err());
        assert!(Shape::new(2, &[0], 1).is_err());
        assert!(Shape::new(2, &[2], 0).is_err());
        assert!(Shape::new(2, &[3, 1], 1).is_ok());
    }

    #[test]
    fn predict_matches_output_shape() {
        let mut mlp = build(3, &[4, 2], 2, 5);
        assert_eq!(mlp.input_len(), 3);
        assert_eq!(mlp.output_len(), 2);
        let out = mlp.predict(&[0.1, 0.5, 0.9]);
        assert_eq!(out.len(), 2);
        for &y in out {
            assert!(y > 0.0 && y < 1.0);
        }
    }

    #[test]
    fn empty_hidden_list_builds_a_direct_chain() {
        let mut mlp = build(2, &[], 1, 5);
        assert_eq!(mlp.predict(&[1.0, 0.0]).len(), 1);
        mlp.train(&[1.0, 0.0], &[1.0], 0.5);
    }

    #[test]
    fn identical_seeds_build_identical_networks() {
        let mut a = build(4, &[7, 3], 3, 17);
        let mut b = build(4, &[7, 3], 3, 17);
        let features = [0.2, 0.4, 0.6, 0.8];
        assert_eq!(a.predict(&features), b.predict(&features));

        let mut c = build(4, &[7, 3], 3, 18);
        assert!(a.predict(&features) != c.predict(&features));
    }

    #[test]
    fn predict_does_not_mutate_the_network() {
        let mut mlp = build(2, &[3], 2, 5);
        let first: Vec<f64> = mlp.predict(&[0.3, 0.7]).to_vec();
        for _ in 0..100 {
            assert_eq!(mlp.predict(&[0.3, 0.7]), &first[..]);
        }
    }

    #[test]
    fn train_moves_the_prediction() {
        let mut mlp = build(2, &[3], 1, 5);
        let before = mlp.predict(&[0.0, 1.0]).to_vec();
        for _ in 0..100 {
            mlp.train(&[0.0, 1.0], &[1.0], 0.5);
        }
        let after = mlp.predict(&[0.0, 1.0]).to_vec();
        assert!(after != before);
        assert!((1.0 - after[0]).abs() < (1.0 - before[0]).abs());
    }
}
