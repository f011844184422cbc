//! Transliteration strategies
//!
//! [`TableTransliterator`] rewrites every table key in a single left-to-right
//! pass: keys are compiled into one regex alternation, longest first, so a
//! digraph wins over its prefix and replaced text is never rescanned.
//! [`UnicodeTransliterator`] (feature `normalization`) decomposes first and
//! drops combining marks, then falls back to the table for letters that carry
//! no decomposition.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use forgery_core::TransliterationMode;
use regex::{Captures, Regex};
use tracing::{debug, warn};

use crate::sanitize::{is_identifier_safe, strip_unsafe};
use crate::table::TRANSLITERATION_TABLE;

/// A best-effort Unicode to ASCII conversion.
///
/// Output may still contain characters outside the identifier-safe set;
/// [`Transliterator`] strips those afterwards.
pub trait Transliterate: Send + Sync {
    fn name(&self) -> &'static str;

    fn to_ascii(&self, input: &str) -> String;
}

struct TableMatcher {
    pattern: Regex,
    replacements: HashMap<&'static str, &'static str>,
}

fn table_matcher() -> Option<&'static TableMatcher> {
    static MATCHER: OnceLock<Option<TableMatcher>> = OnceLock::new();
    MATCHER
        .get_or_init(|| {
            let mut keys: Vec<&'static str> =
                TRANSLITERATION_TABLE.iter().map(|(key, _)| *key).collect();
            keys.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

            let alternation = keys
                .iter()
                .map(|key| regex::escape(key))
                .collect::<Vec<_>>()
                .join("|");

            match Regex::new(&alternation) {
                Ok(pattern) => Some(TableMatcher {
                    pattern,
                    replacements: TRANSLITERATION_TABLE.iter().copied().collect(),
                }),
                Err(error) => {
                    warn!(error = %error, "failed to compile transliteration table");
                    None
                }
            }
        })
        .as_ref()
}

/// Static-table strategy, always available
#[derive(Debug, Clone, Copy, Default)]
pub struct TableTransliterator;

impl Transliterate for TableTransliterator {
    fn name(&self) -> &'static str {
        "table"
    }

    fn to_ascii(&self, input: &str) -> String {
        let Some(matcher) = table_matcher() else {
            return input.to_string();
        };

        matcher
            .pattern
            .replace_all(input, |caps: &Captures| {
                matcher
                    .replacements
                    .get(&caps[0])
                    .copied()
                    .unwrap_or_default()
            })
            .into_owned()
    }
}

/// Decompose, drop combining marks, map what is left through the table
#[cfg(feature = "normalization")]
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeTransliterator;

#[cfg(feature = "normalization")]
impl Transliterate for UnicodeTransliterator {
    fn name(&self) -> &'static str {
        "unicode"
    }

    fn to_ascii(&self, input: &str) -> String {
        use unicode_normalization::char::is_combining_mark;
        use unicode_normalization::UnicodeNormalization;

        let stripped: String = input.nfd().filter(|c| !is_combining_mark(*c)).collect();
        TableTransliterator.to_ascii(&stripped).nfc().collect()
    }
}

/// Whether the Unicode strategy can be used in this build.
///
/// Probed once; the result is cached for the process lifetime.
pub fn unicode_available() -> bool {
    static PROBE: OnceLock<bool> = OnceLock::new();
    *PROBE.get_or_init(|| {
        let available = probe_unicode();
        debug!(available = available, "probed unicode transliteration support");
        available
    })
}

#[cfg(feature = "normalization")]
fn probe_unicode() -> bool {
    UnicodeTransliterator.to_ascii("\u{e9}") == "e"
}

#[cfg(not(feature = "normalization"))]
fn probe_unicode() -> bool {
    false
}

/// Converts text to identifier-safe ASCII with the selected strategy
pub struct Transliterator {
    strategy: Box<dyn Transliterate>,
}

impl Transliterator {
    /// Select a strategy for `mode`.
    ///
    /// `Auto` prefers Unicode when available. `Unicode` without support logs a
    /// warning and uses the table.
    pub fn new(mode: TransliterationMode) -> Self {
        match mode {
            TransliterationMode::Table => Self::table(),
            TransliterationMode::Auto => {
                if unicode_available() {
                    Self::unicode_or_table()
                } else {
                    Self::table()
                }
            }
            TransliterationMode::Unicode => {
                if !unicode_available() {
                    warn!("unicode transliteration unavailable, using the static table");
                }
                Self::unicode_or_table()
            }
        }
    }

    pub fn table() -> Self {
        Self::with_strategy(TableTransliterator)
    }

    pub fn with_strategy<T: Transliterate + 'static>(strategy: T) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    #[cfg(feature = "normalization")]
    fn unicode_or_table() -> Self {
        if unicode_available() {
            Self::with_strategy(UnicodeTransliterator)
        } else {
            Self::table()
        }
    }

    #[cfg(not(feature = "normalization"))]
    fn unicode_or_table() -> Self {
        Self::table()
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Map `input` to `[A-Za-z0-9_.]*`.
    ///
    /// Input that is already identifier-safe comes back unchanged.
    pub fn transliterate(&self, input: &str) -> String {
        if is_identifier_safe(input) {
            return input.to_string();
        }
        strip_unsafe(&self.strategy.to_ascii(input))
    }
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new(TransliterationMode::Auto)
    }
}

impl fmt::Debug for Transliterator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transliterator")
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

/// Transliterate with the process-wide `Auto` transliterator
pub fn transliterate(input: &str) -> String {
    static DEFAULT: OnceLock<Transliterator> = OnceLock::new();
    DEFAULT.get_or_init(Transliterator::default).transliterate(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitize::is_exhausted;

    #[test]
    fn test_fast_path_returns_input_unchanged() {
        let transliterator = Transliterator::table();
        assert_eq!(transliterator.transliterate("John.Doe_99"), "John.Doe_99");
        assert_eq!(transliterator.transliterate(""), "");
    }

    #[test]
    fn test_latin_diacritics() {
        let transliterator = Transliterator::table();
        assert_eq!(transliterator.transliterate("Müller"), "Muller");
        assert_eq!(transliterator.transliterate("Straße"), "Strase");
        assert_eq!(transliterator.transliterate("Đorđević"), "Dordevic");
    }

    #[test]
    fn test_cyrillic_and_greek() {
        let transliterator = Transliterator::table();
        assert_eq!(transliterator.transliterate("Жуков"), "ZUKOV");
        assert_eq!(transliterator.transliterate("λ"), "l");
    }

    #[test]
    fn test_armenian_digraph_beats_prefix() {
        let transliterator = Transliterator::table();
        // ու must be consumed as one unit, not as ո followed by ւ
        assert_eq!(TableTransliterator.to_ascii("ու"), "u");
        assert_eq!(transliterator.transliterate("ու"), "u");
        assert_eq!(TableTransliterator.to_ascii("ո"), "o");
    }

    #[test]
    fn test_replacements_are_not_rescanned() {
        // "/" maps to nothing; surrounding mapped text is unaffected
        assert_eq!(TableTransliterator.to_ascii("a/ö"), "ao");
        assert_eq!(TableTransliterator.to_ascii("ßß"), "ss");

        // curly apostrophes map to "'" which itself maps to ""; output is not re-read
        assert_eq!(TableTransliterator.to_ascii("\u{2019}"), "'");
        assert_eq!(TableTransliterator.to_ascii("\u{2018}"), "'");
        assert_eq!(TableTransliterator.to_ascii("\u{2bc}'x"), "'x");
    }

    #[test]
    fn test_unmapped_characters_are_stripped() {
        let transliterator = Transliterator::table();
        assert_eq!(transliterator.transliterate("王伟"), "");
        assert!(is_exhausted(&transliterator.transliterate("王.伟")));
        assert_eq!(transliterator.transliterate("Anna Maria"), "AnnaMaria");
    }

    #[test]
    fn test_idempotent() {
        let transliterator = Transliterator::table();
        for input in ["Ærøskøbing", "Иванов", "ἀλέξανδρος", "王伟", "o'neil"] {
            let once = transliterator.transliterate(input);
            assert_eq!(transliterator.transliterate(&once), once);
            assert!(is_identifier_safe(&once));
        }
    }

    #[test]
    fn test_table_mode_selects_table() {
        assert_eq!(
            Transliterator::new(TransliterationMode::Table).strategy_name(),
            "table"
        );
    }

    #[test]
    fn test_unicode_mode_always_yields_a_strategy() {
        let transliterator = Transliterator::new(TransliterationMode::Unicode);
        let expected = if unicode_available() { "unicode" } else { "table" };
        assert_eq!(transliterator.strategy_name(), expected);
        assert_eq!(transliterator.transliterate("Müller"), "Muller");
    }

    #[test]
    fn test_custom_strategy() {
        struct Upper;
        impl Transliterate for Upper {
            fn name(&self) -> &'static str {
                "upper"
            }
            fn to_ascii(&self, input: &str) -> String {
                input.to_uppercase()
            }
        }

        let transliterator = Transliterator::with_strategy(Upper);
        assert_eq!(transliterator.strategy_name(), "upper");
        assert_eq!(transliterator.transliterate("a-b"), "AB");
    }

    #[test]
    fn test_global_transliterate() {
        assert_eq!(transliterate("Ñandú"), "Nandu");
    }

    #[cfg(feature = "normalization")]
    #[test]
    fn test_unicode_strategy_handles_unlisted_decompositions() {
        assert!(unicode_available());
        // U+1E69 is not in the table but decomposes to s + marks
        assert_eq!(TableTransliterator.to_ascii("\u{1e69}"), "\u{1e69}");
        assert_eq!(UnicodeTransliterator.to_ascii("\u{1e69}"), "s");
        assert_eq!(
            Transliterator::new(TransliterationMode::Auto).transliterate("Bi\u{1e69}ap"),
            "Bisap"
        );
    }

    #[cfg(not(feature = "normalization"))]
    #[test]
    fn test_auto_without_normalization_uses_table() {
        assert!(!unicode_available());
        assert_eq!(
            Transliterator::new(TransliterationMode::Auto).strategy_name(),
            "table"
        );
    }
}
