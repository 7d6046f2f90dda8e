//! A small linear congruential generator for weight initialization.
//!
//! Weight initialization is the only randomness inside the network itself,
//! so the generator is tiny and explicitly seeded: two networks built from
//! the same seed start from bit-identical weights.

/// A linear congruential generator yielding uniform values in `[0, 1)`.
#[derive(Clone, Debug)]
pub struct FastRand {
    state: u32,
}

impl FastRand {
    /// Creates a generator from an explicit seed.
    pub fn new(seed: u32) -> Self {
        FastRand { state: seed }
    }

    /// Advances the generator, returning the top 15 bits of the new state.
    fn next(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(214013).wrapping_add(2531011);
        (self.state >> 16) & 0x7fff
    }

    /// Returns a uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.next() as f64 / 32768.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = FastRand::new(42);
        let mut b = FastRand::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = FastRand::new(1);
        let mut b = FastRand::new(2);
        let draws_a: Vec<f64> = (0..10).map(|_| a.next_f64()).collect();
        let draws_b: Vec<f64> = (0..10).map(|_| b.next_f64()).collect();
        assert!(draws_a != draws_b);
    }

    #[test]
    fn unit_interval() {
        let mut rng = FastRand::new(7);
        for _ in 0..1000 {
            let x = rng.next_f64();
            assert!(x >= 0.0 && x < 1.0);
        }
    }
}
