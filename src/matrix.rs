use rng::FastRand;

use rblas::attribute::Order;
use rblas::Matrix;
use std::os::raw::c_int;

/// A column-major matrix of network weights.
///
/// The only job of this type is to hand its storage to BLAS; all arithmetic
/// on weights goes through `rblas` kernels.
#[derive(Clone, Debug, PartialEq)]
pub struct Mat {
    rows: usize,
    cols: usize,
    data: Vec<f64>, // column-major array
}

impl Mat {
    /// Creates a matrix with every element drawn from `rng`, uniform in
    /// `[0, 1)`.
    ///
    /// Elements are drawn in column-major storage order, so a fixed seed
    /// always produces the same matrix.
    pub fn random(rng: &mut FastRand, rows: usize, cols: usize) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for _ in 0..(rows * cols) {
            data.push(rng.next_f64());
        }
        Mat {
            rows: rows,
            cols: cols,
            data: data,
        }
    }

    /// Returns the element at (`row`, `col`).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[col * self.rows + row]
    }

    /// Overwrites the element at (`row`, `col`).
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[col * self.rows + row] = value;
    }
}

impl Matrix<f64> for Mat {
    fn rows(&self) -> c_int {
        self.rows as c_int
    }

    fn cols(&self) -> c_int {
        self.cols as c_int
    }

    fn as_ptr(&self) -> *const f64 {
        self.data.as_ptr()
    }

    fn as_mut_ptr(&mut self) -> *mut f64 {
        self.data.as_mut_ptr()
    }

    fn order(&self) -> Order {
        Order::ColMajor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rng::FastRand;

    #[test]
    fn get_set_roundtrip() {
        let mut rng = FastRand::new(0);
        let mut mat = Mat::random(&mut rng, 3, 2);
        mat.set(2, 1, 0.75);
        mat.set(0, 0, -1.5);
        assert_eq!(mat.get(2, 1), 0.75);
        assert_eq!(mat.get(0, 0), -1.5);
    }

    #[test]
    fn random_is_deterministic() {
        let mut a = FastRand::new(11);
        let mut b = FastRand::new(11);
        assert_eq!(Mat::random(&mut a, 4, 3), Mat::random(&mut b, 4, 3));
    }

    #[test]
    fn random_stays_in_unit_interval() {
        let mut rng = FastRand::new(3);
        let mat = Mat::random(&mut rng, 5, 5);
        for row in 0..5 {
            for col in 0..5 {
                let w = mat.get(row, col);
                assert!(w >= 0.0 && w < 1.0);
            }
        }
    }
}
