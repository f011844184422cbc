use super::{check_range, RandomSource};
use crate::errors::FakerResult;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// `StdRng` behind a mutex, safe to share between threads
pub struct StdRandom {
    rng: Mutex<StdRng>,
}

impl StdRandom {
    /// Seed from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic generator; the same seed yields the same sequence
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // A panic while holding the lock cannot leave StdRng in an invalid state.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut rng)
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl std::fmt::Debug for StdRandom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StdRandom").finish_non_exhaustive()
    }
}

impl RandomSource for StdRandom {
    fn int_between(&self, min: i64, max: i64) -> FakerResult<i64> {
        check_range(min, max)?;
        Ok(self.with_rng(|rng| rng.gen_range(min..=max)))
    }

    fn unit_float(&self) -> f64 {
        self.with_rng(|rng| rng.gen::<f64>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_between_stays_in_range() {
        let rng = StdRandom::seeded(1);
        for _ in 0..1_000 {
            let value = rng.int_between(-3, 3).unwrap();
            assert!((-3..=3).contains(&value));
        }
    }

    #[test]
    fn test_single_value_range() {
        let rng = StdRandom::from_entropy();
        assert_eq!(rng.int_between(5, 5).unwrap(), 5);
    }

    #[test]
    fn test_invalid_range() {
        let rng = StdRandom::seeded(1);
        let error = rng.int_between(10, 1).unwrap_err();
        assert!(error.is_invalid_range());
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = StdRandom::seeded(42);
        let b = StdRandom::seeded(42);

        let left: Vec<i64> = (0..20).map(|_| a.int_between(0, 1_000).unwrap()).collect();
        let right: Vec<i64> = (0..20).map(|_| b.int_between(0, 1_000).unwrap()).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_unit_float_bounds() {
        let rng = StdRandom::seeded(3);
        for _ in 0..1_000 {
            let value = rng.unit_float();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_index_of_empty_collection_fails() {
        let rng = StdRandom::seeded(3);
        assert!(rng.index(0).is_err());
        assert_eq!(rng.index(1).unwrap(), 0);
    }
}
