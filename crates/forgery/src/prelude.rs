//! # Prelude
//!
//! ```rust
//! use forgery::prelude::*;
//! ```

pub use crate::{Faker, Locale};
pub use crate::{FakeValue, FakerError, FakerResult};
pub use crate::{Generator, GeneratorConfig, LetterCase, TransliterationMode};
pub use crate::{FormatterRegistry, Provider, Resolve};
pub use crate::{RandomSource, ScriptedRandom, StdRandom};
