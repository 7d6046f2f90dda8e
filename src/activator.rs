//! The [sigmoid](https://en.wikipedia.org/wiki/Sigmoid_function) activation
//! function and its derivative.

/// Evaluates the logistic sigmoid `1 / (1 + e^-x)`.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Evaluates the sigmoid derivative `f'(x)`, where `x = f^{-1}(y)`.
///
/// Note that this function takes in the *output* of the activation function,
/// rather than the input. This is an optimization that means we don't have to
/// store the intermediate results before activation.
pub fn derivative(y: f64) -> f64 {
    y * (1.0 - y)
}
