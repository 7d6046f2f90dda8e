//! The individual stages of a network's layer chain.
//!
//! A chain is always `Input`, one or more `Dense` layers, then `Answer`.
//! The two bookends are plain staging buffers; `Dense` carries the weights
//! and all of the arithmetic.

mod dense;
mod stage;

pub use self::dense::Dense;
pub use self::stage::{Answer, Input};
