use super::{check_range, RandomSource};
use crate::errors::FakerResult;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays a fixed script of draws, for exact-output tests
///
/// Each `int_between` call pops the next scripted integer and clamps it into
/// the requested range; once the script runs out every draw returns `min`.
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    ints: Mutex<VecDeque<i64>>,
    floats: Mutex<VecDeque<f64>>,
}

impl ScriptedRandom {
    pub fn new(ints: impl IntoIterator<Item = i64>) -> Self {
        Self {
            ints: Mutex::new(ints.into_iter().collect()),
            floats: Mutex::new(VecDeque::new()),
        }
    }

    pub fn with_floats(self, floats: impl IntoIterator<Item = f64>) -> Self {
        Self {
            ints: self.ints,
            floats: Mutex::new(floats.into_iter().collect()),
        }
    }

    /// Number of integer draws not yet consumed
    pub fn remaining(&self) -> usize {
        self.ints
            .lock()
            .map(|ints| ints.len())
            .unwrap_or_else(|poisoned| poisoned.into_inner().len())
    }
}

impl RandomSource for ScriptedRandom {
    fn int_between(&self, min: i64, max: i64) -> FakerResult<i64> {
        check_range(min, max)?;
        let next = self
            .ints
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front();
        Ok(next.map_or(min, |value| value.clamp(min, max)))
    }

    fn unit_float(&self) -> f64 {
        self.floats
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front()
            .map_or(0.0, |value| value.clamp(0.0, 1.0 - f64::EPSILON))
    }
}
