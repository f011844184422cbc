//! Injected randomness source
//!
//! Every random decision in the crate goes through [`RandomSource`], so
//! callers can swap the entropy-backed [`StdRandom`] for a seeded one or for a
//! [`ScriptedRandom`] that replays exact draws.

mod scripted;
mod std_random;

pub use scripted::ScriptedRandom;
pub use std_random::StdRandom;

use crate::errors::{FakerError, FakerResult};

/// Uniform integer/float generator shared by all formatters
pub trait RandomSource: Send + Sync {
    /// Uniform integer in `[min, max]` inclusive
    fn int_between(&self, min: i64, max: i64) -> FakerResult<i64>;

    /// Uniform float in `[0, 1)`
    fn unit_float(&self) -> f64;

    /// Uniform index into a collection of `len` elements
    fn index(&self, len: usize) -> FakerResult<usize> {
        if len == 0 {
            return Err(FakerError::invalid_range(0, -1));
        }
        let max = i64::try_from(len - 1).unwrap_or(i64::MAX);
        Ok(self.int_between(0, max)? as usize)
    }

    fn coin_flip(&self) -> FakerResult<bool> {
        Ok(self.int_between(0, 1)? == 0)
    }
}

pub(crate) fn check_range(min: i64, max: i64) -> FakerResult<()> {
    if min > max {
        return Err(FakerError::invalid_range(min, max));
    }
    Ok(())
}
