//! # forgery-core
//!
//! The engine behind the forgery fake-data generator: a `{{formatter}}`
//! template evaluator, `#`/`?`/`*` wildcard expanders, a name-keyed formatter
//! registry with recursive dispatch, and the injected randomness source every
//! random choice goes through.
//!
//! ```rust
//! use forgery_core::{Generator, GeneratorConfig};
//!
//! let mut generator = Generator::new(GeneratorConfig::default().with_seed(1));
//! generator.registry_mut().register_constant("user", "jdoe");
//! generator.registry_mut().register_constant("host", "example.com");
//!
//! assert_eq!(generator.parse("{{user}}@{{host}}").unwrap(), "jdoe@example.com");
//! ```

pub mod config;
pub mod errors;
pub mod expander;
pub mod generator;
pub mod options;
pub mod providers;
pub mod random;
pub mod template;
pub mod value;

pub use config::{ConfigError, ConfigSource, GeneratorConfig, LetterCase, TransliterationMode};
pub use errors::{FakerError, FakerResult};
pub use expander::Expander;
pub use generator::{Generator, Resolve};
pub use options::{random_element, OptionSet};
pub use providers::{FormatterFn, FormatterRegistry, Provider, ProviderMetadata};
pub use random::{RandomSource, ScriptedRandom, StdRandom};
pub use template::{evaluate, Segment, Template};
pub use value::FakeValue;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version
pub fn version() -> &'static str {
    VERSION
}
