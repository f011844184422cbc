//! Fixed option sets and element choice

use crate::errors::{FakerError, FakerResult};
use crate::random::RandomSource;

#[derive(Debug, Clone, Copy)]
enum Entries<T: 'static> {
    Uniform(&'static [T]),
    Weighted(&'static [(T, u32)]),
}

/// A named, non-empty, immutable collection of alternatives
///
/// Sets are `const`-constructible, so an empty set declared as a `static`
/// fails at compile time.
#[derive(Debug, Clone, Copy)]
pub struct OptionSet<T: 'static> {
    name: &'static str,
    entries: Entries<T>,
}

impl<T: 'static> OptionSet<T> {
    /// Every value is equally likely
    pub const fn uniform(name: &'static str, values: &'static [T]) -> Self {
        assert!(!values.is_empty(), "option set must not be empty");
        Self {
            name,
            entries: Entries::Uniform(values),
        }
    }

    /// Each value is chosen proportionally to its weight
    pub const fn weighted(name: &'static str, entries: &'static [(T, u32)]) -> Self {
        assert!(!entries.is_empty(), "option set must not be empty");
        let mut total: u64 = 0;
        let mut i = 0;
        while i < entries.len() {
            total += entries[i].1 as u64;
            i += 1;
        }
        assert!(total > 0, "option set weights must not all be zero");
        Self {
            name,
            entries: Entries::Weighted(entries),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        match self.entries {
            Entries::Uniform(values) => values.len(),
            Entries::Weighted(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate `(value, weight)` pairs; uniform sets report weight 1
    pub fn iter(&self) -> impl Iterator<Item = (&'static T, u32)> {
        let pairs: Vec<(&'static T, u32)> = match self.entries {
            Entries::Uniform(values) => values.iter().map(|value| (value, 1)).collect(),
            Entries::Weighted(entries) => entries
                .iter()
                .map(|(value, weight)| (value, *weight))
                .collect(),
        };
        pairs.into_iter()
    }

    /// Pick one entry; each call is independent of the previous ones
    pub fn choose(&self, rng: &dyn RandomSource) -> FakerResult<&'static T> {
        match self.entries {
            Entries::Uniform(values) => random_element(rng, values),
            Entries::Weighted(entries) => {
                let total: u64 = entries.iter().map(|(_, weight)| u64::from(*weight)).sum();
                let total = i64::try_from(total).unwrap_or(i64::MAX);
                let mut roll = rng.int_between(1, total)?;
                for (value, weight) in entries {
                    roll -= i64::from(*weight);
                    if roll <= 0 {
                        return Ok(value);
                    }
                }
                // Unreachable while weights sum to `total`.
                entries
                    .last()
                    .map(|(value, _)| value)
                    .ok_or_else(|| FakerError::empty_option_set(self.name))
            }
        }
    }
}

/// Uniformly choose one element of a slice
pub fn random_element<'a, T>(rng: &dyn RandomSource, items: &'a [T]) -> FakerResult<&'a T> {
    if items.is_empty() {
        return Err(FakerError::empty_option_set("slice"));
    }
    let index = rng.index(items.len())?;
    Ok(&items[index])
}
