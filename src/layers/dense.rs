use activator;
use matrix::Mat;
use rng::FastRand;

use itertools::multizip;
use rblas::attribute::Transpose;
use rblas::matrix_vector::ops::{Gemv, Ger};
use rblas::Matrix;

/// A fully connected sigmoid layer.
///
/// Weights for every neuron are stored as a row of a single matrix, with one
/// extra column holding that neuron's bias weight. The layer caches its own
/// activations between the forward and backward passes, and like its input,
/// the cached signal carries a trailing element pinned to `1.0` so the next
/// layer's bias weight always sees a constant-1 input.
#[derive(Clone, Debug)]
pub struct Dense {
    /// The network weights, one neuron per row, bias weight in the last
    /// column.
    weights: Mat,
    /// Activations from the most recent forward pass, plus the bias element.
    outputs: Vec<f64>,
    /// Backpropagated error from the most recent backward pass. The final
    /// slot receives the bias column's error and is ignored.
    errors: Vec<f64>,
    /// Error scaled by the local activation derivative.
    deltas: Vec<f64>,
}

impl Dense {
    /// Initializes a layer of `outputs` neurons taking `inputs` inputs, with
    /// every weight drawn from `rng`.
    pub fn new(inputs: usize, outputs: usize, rng: &mut FastRand) -> Self {
        let mut signal = vec![0.0; outputs + 1];
        signal[outputs] = 1.0;
        Dense {
            weights: Mat::random(rng, outputs, inputs + 1),
            outputs: signal,
            errors: vec![0.0; outputs + 1],
            deltas: vec![0.0; outputs + 1],
        }
    }

    /// Returns the number of inputs to this layer, excluding the bias.
    pub fn input_len(&self) -> usize {
        self.weights.cols() as usize - 1
    }

    /// Returns the number of neurons in this layer.
    pub fn output_len(&self) -> usize {
        self.weights.rows() as usize
    }

    /// The cached activations, including the trailing bias element.
    pub fn signal(&self) -> &[f64] {
        &self.outputs
    }

    /// The cached activations alone.
    pub fn activations(&self) -> &[f64] {
        &self.outputs[..self.output_len()]
    }

    /// Feeds the previous layer's signal forward through this layer.
    ///
    /// Each neuron takes the dot product of `inputs` (bias element included)
    /// with its weight row and squashes it through the sigmoid. This layer's
    /// own bias slot is left untouched at `1.0`.
    pub fn feed(&mut self, inputs: &[f64]) {
        debug_assert_eq!(inputs.len(), self.input_len() + 1);
        let n = self.output_len();
        f64::gemv(
            Transpose::NoTrans,
            &1.0,
            &self.weights,
            inputs,
            &0.0,
            &mut self.outputs[..n],
        );
        for y in &mut self.outputs[..n] {
            *y = activator::sigmoid(*y);
        }
    }

    /// Backpropagates error from the already-tuned successor layer and
    /// updates this layer's weights in place.
    ///
    /// Each neuron's incoming error is the successor's deltas folded through
    /// the successor's weight column for that neuron. The local derivative is
    /// evaluated at the cached forward output, so this must run after `feed`,
    /// and strictly after the successor's own tune.
    pub fn tune_hidden(&mut self, inputs: &[f64], next: &Dense, rate: f64) {
        debug_assert_eq!(next.input_len(), self.output_len());
        let n = self.output_len();
        f64::gemv(
            Transpose::Trans,
            &1.0,
            &next.weights,
            &next.deltas[..next.output_len()],
            &0.0,
            &mut self.errors[..],
        );
        for (e, y, d) in multizip((
            self.errors[..n].iter(),
            self.outputs[..n].iter(),
            self.deltas[..n].iter_mut(),
        )) {
            *d = e * activator::derivative(*y);
        }
        f64::ger(&rate, &self.deltas[..n], inputs, &mut self.weights);
    }

    /// Seeds the backward pass from a target vector.
    ///
    /// The last weighted layer has no successor deltas to fold in; its delta
    /// comes straight from the distance to the target. The weight update is
    /// the same rank-one step interior layers take.
    pub fn tune_output(&mut self, inputs: &[f64], targets: &[f64], rate: f64) {
        let n = self.output_len();
        debug_assert_eq!(targets.len(), n);
        for (t, y, d) in multizip((
            targets.iter(),
            self.outputs[..n].iter(),
            self.deltas[..n].iter_mut(),
        )) {
            *d = (t - y) * activator::derivative(*y);
        }
        f64::ger(&rate, &self.deltas[..n], inputs, &mut self.weights);
    }
}
