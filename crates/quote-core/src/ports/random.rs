//! Random index selection

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of uniformly distributed indices.
pub trait RandomSource: Send {
    /// Returns a value in `0..n`. Callers never pass `n == 0`.
    fn next(&mut self, n: usize) -> usize;
}

/// `StdRng` seeded once, normally from the wall clock at startup.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn from_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_seed(seed)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::from_time()
    }
}

impl RandomSource for SeededRandom {
    fn next(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stays_in_range() {
        let mut source = SeededRandom::with_seed(42);
        for n in 1..50 {
            for _ in 0..20 {
                assert!(source.next(n) < n);
            }
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeededRandom::with_seed(7);
        let mut b = SeededRandom::with_seed(7);
        let left: Vec<usize> = (0..32).map(|_| a.next(1000)).collect();
        let right: Vec<usize> = (0..32).map(|_| b.next(1000)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_covers_every_index() {
        let mut source = SeededRandom::from_time();
        let mut seen = [false; 5];
        for _ in 0..1000 {
            seen[source.next(5)] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }
}
