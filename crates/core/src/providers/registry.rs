use crate::errors::{FakerError, FakerResult};
use crate::generator::Generator;
use crate::value::FakeValue;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// A zero-argument formatter; receives the generator to dispatch nested formatters
pub type FormatterFn = Arc<dyn Fn(&Generator) -> FakerResult<FakeValue> + Send + Sync>;

/// Formatter registry maps exact, case-sensitive names to formatters
#[derive(Clone, Default)]
pub struct FormatterRegistry {
    formatters: HashMap<String, FormatterFn>,
}

impl FormatterRegistry {
    pub fn new() -> Self {
        Self {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any previous one with the same name
    pub fn register<F, V>(&mut self, name: impl Into<String>, formatter: F)
    where
        F: Fn(&Generator) -> FakerResult<V> + Send + Sync + 'static,
        V: Into<FakeValue>,
    {
        let name = name.into();
        let formatter: FormatterFn = Arc::new(move |generator: &Generator| formatter(generator).map(Into::into));
        if self.formatters.insert(name.clone(), formatter).is_some() {
            debug!("Overriding formatter: {}", name);
        }
    }

    /// Register a formatter that always yields the same value
    pub fn register_constant(&mut self, name: impl Into<String>, value: impl Into<FakeValue>) {
        let value: FakeValue = value.into();
        self.register(name, move |_| Ok(value.clone()));
    }

    pub fn get(&self, name: &str) -> FakerResult<&FormatterFn> {
        self.formatters
            .get(name)
            .ok_or_else(|| FakerError::unknown_formatter(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<FormatterFn> {
        self.formatters.remove(name)
    }

    /// Registered formatter names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }
}

impl std::fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatterRegistry")
            .field("formatters", &self.names())
            .finish()
    }
}
