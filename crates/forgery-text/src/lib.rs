//! # forgery-text
//!
//! Turns arbitrary-locale text into identifier-safe ASCII (`[A-Za-z0-9_.]`)
//! for usernames and domain words.
//!
//! Two strategies share one contract: a static mapping table that is always
//! available, and a Unicode-normalization backed one compiled in with the
//! `normalization` feature. Whatever either leaves outside the safe set is
//! stripped.
//!
//! ```rust
//! use forgery_text::{Transliterator, TransliterationMode};
//!
//! let transliterator = Transliterator::new(TransliterationMode::Table);
//! assert_eq!(transliterator.transliterate("Ærøskøbing"), "Aroskobing");
//! assert_eq!(transliterator.transliterate("Иванов"), "IVANOV");
//! ```

pub mod sanitize;
pub mod table;
pub mod transliterator;

pub use forgery_core::TransliterationMode;
pub use sanitize::{
    collapse_dots, ensure_usable, is_exhausted, is_identifier_char, is_identifier_safe,
    strip_unsafe, trim_trailing_dots,
};
pub use table::TRANSLITERATION_TABLE;
pub use transliterator::{
    transliterate, unicode_available, TableTransliterator, Transliterate, Transliterator,
};

#[cfg(feature = "normalization")]
pub use transliterator::UnicodeTransliterator;
