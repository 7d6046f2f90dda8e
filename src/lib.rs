extern crate itertools;
extern crate rand;
extern crate rblas;

pub mod activator;
pub mod error;
pub mod mlp;
pub mod rng;
pub mod trainer;

mod layers;
mod matrix;
