//! # forgery
//!
//! Locale-aware fake data. Formatters are looked up by name, composed through
//! `{{formatter}}` templates and randomized with `#`/`?`/`*` wildcards; names
//! from non-Latin locales are transliterated before they end up in user names
//! and domains.
//!
//! This is the umbrella package: it re-exports the engine, the text utilities
//! and the bundled providers behind the [`Faker`] facade.
//!
//! ```rust
//! use forgery::prelude::*;
//!
//! let faker = Faker::from_config(GeneratorConfig::default().with_locale("it_IT").with_seed(7))?;
//! let email = faker.email()?;
//! assert!(email.contains('@'));
//!
//! // any registered formatter is reachable by name, in templates too
//! let line = faker.parse("{{firstName}} <{{safeEmail}}>")?;
//! assert!(line.ends_with('>'));
//! # Ok::<(), forgery::FakerError>(())
//! ```

pub use forgery_core as core;
pub use forgery_providers as providers;
pub use forgery_text as text;

pub use forgery_core::{
    ConfigError, ConfigSource, FakeValue, FakerError, FakerResult, FormatterRegistry, Generator,
    GeneratorConfig, LetterCase, OptionSet, Provider, RandomSource, Resolve, ScriptedRandom,
    StdRandom, Template, TransliterationMode,
};
pub use forgery_providers::Locale;
pub use forgery_text::Transliterator;

mod faker;
pub mod logging;
pub mod prelude;

pub use faker::Faker;
pub use logging::{init_logging, LoggingConfig};

/// Current version of forgery
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version() -> &'static str {
    VERSION
}
