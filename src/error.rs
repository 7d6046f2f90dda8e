//! Errors raised when building or training a network.
//!
//! The engine itself performs no runtime validation; everything here is
//! produced at the boundary, by shape construction or trainer input checks.

use std::error;
use std::fmt;

/// An invalid shape descriptor or training set.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// A shape descriptor contained a zero layer width.
    InvalidShape(String),
    /// A training example did not match the network's shape.
    InvalidData(String),
}

pub type Result<T> = ::std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &Error::InvalidShape(ref msg) => write!(f, "invalid shape: {}", msg),
            &Error::InvalidData(ref msg) => write!(f, "invalid data: {}", msg),
        }
    }
}

impl error::Error for Error {}
