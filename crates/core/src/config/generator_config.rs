use crate::config::{ConfigError, ConfigSource, ConfigValidator, LengthRangeValidator, LocaleValidator};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::str::FromStr;

pub const ENV_LOCALE: &str = "FORGERY_LOCALE";
pub const ENV_SEED: &str = "FORGERY_SEED";
pub const ENV_LETTER_CASE: &str = "FORGERY_LETTER_CASE";
pub const ENV_TRANSLITERATION: &str = "FORGERY_TRANSLITERATION";
pub const ENV_PASSWORD_MIN_LENGTH: &str = "FORGERY_PASSWORD_MIN_LENGTH";
pub const ENV_PASSWORD_MAX_LENGTH: &str = "FORGERY_PASSWORD_MAX_LENGTH";

pub const DEFAULT_LOCALE: &str = "en_US";

/// Case convention for letters produced by the `?` wildcard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterCase {
    #[default]
    Lower,
    Upper,
    Mixed,
}

impl FromStr for LetterCase {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lower" | "lowercase" => Ok(LetterCase::Lower),
            "upper" | "uppercase" => Ok(LetterCase::Upper),
            "mixed" | "any" => Ok(LetterCase::Mixed),
            _ => Err(ConfigError::invalid_value(
                "letter_case",
                s,
                "lower, upper, or mixed",
            )),
        }
    }
}

impl std::fmt::Display for LetterCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let case_str = match self {
            LetterCase::Lower => "lower",
            LetterCase::Upper => "upper",
            LetterCase::Mixed => "mixed",
        };
        write!(f, "{}", case_str)
    }
}

/// Which transliteration strategy to use for identifier-safe output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransliterationMode {
    /// Unicode normalizer when compiled in, static table otherwise
    #[default]
    Auto,
    /// Always use the static transliteration table
    Table,
    /// Prefer the Unicode normalizer
    Unicode,
}

impl FromStr for TransliterationMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(TransliterationMode::Auto),
            "table" => Ok(TransliterationMode::Table),
            "unicode" | "icu" => Ok(TransliterationMode::Unicode),
            _ => Err(ConfigError::invalid_value(
                "transliteration",
                s,
                "auto, table, or unicode",
            )),
        }
    }
}

impl std::fmt::Display for TransliterationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mode_str = match self {
            TransliterationMode::Auto => "auto",
            TransliterationMode::Table => "table",
            TransliterationMode::Unicode => "unicode",
        };
        write!(f, "{}", mode_str)
    }
}

/// Generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Locale tag selecting provider data, e.g. `en_US`
    pub locale: String,
    /// Fixed seed for reproducible output; entropy-seeded when `None`
    pub seed: Option<u64>,
    /// Case of letters produced by `?`
    pub letter_case: LetterCase,
    pub transliteration: TransliterationMode,
    pub password_min_length: usize,
    pub password_max_length: usize,
    #[serde(skip)]
    sources: HashMap<String, ConfigSource>,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            seed: None,
            letter_case: LetterCase::default(),
            transliteration: TransliterationMode::default(),
            password_min_length: 6,
            password_max_length: 20,
            sources: HashMap::new(),
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self.mark("locale", ConfigSource::Programmatic);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self.mark("seed", ConfigSource::Programmatic);
        self
    }

    pub fn with_letter_case(mut self, letter_case: LetterCase) -> Self {
        self.letter_case = letter_case;
        self.mark("letter_case", ConfigSource::Programmatic);
        self
    }

    pub fn with_transliteration(mut self, mode: TransliterationMode) -> Self {
        self.transliteration = mode;
        self.mark("transliteration", ConfigSource::Programmatic);
        self
    }

    /// Set the inclusive password length range
    pub fn with_password_length(mut self, min: usize, max: usize) -> Self {
        self.password_min_length = min;
        self.password_max_length = max;
        self.mark("password_min_length", ConfigSource::Programmatic);
        self.mark("password_max_length", ConfigSource::Programmatic);
        self
    }

    /// Load configuration from `FORGERY_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::new();

        if let Ok(locale) = env::var(ENV_LOCALE) {
            config.locale = locale;
            config.mark("locale", ConfigSource::EnvVar(ENV_LOCALE.to_string()));
        }

        if let Ok(seed_str) = env::var(ENV_SEED) {
            config.seed = Some(seed_str.parse().map_err(|_| {
                ConfigError::invalid_value("seed", seed_str.clone(), "unsigned 64-bit integer")
            })?);
            config.mark("seed", ConfigSource::EnvVar(ENV_SEED.to_string()));
        }

        if let Ok(case_str) = env::var(ENV_LETTER_CASE) {
            config.letter_case = case_str.parse()?;
            config.mark("letter_case", ConfigSource::EnvVar(ENV_LETTER_CASE.to_string()));
        }

        if let Ok(mode_str) = env::var(ENV_TRANSLITERATION) {
            config.transliteration = mode_str.parse()?;
            config.mark(
                "transliteration",
                ConfigSource::EnvVar(ENV_TRANSLITERATION.to_string()),
            );
        }

        if let Ok(min_str) = env::var(ENV_PASSWORD_MIN_LENGTH) {
            config.password_min_length = parse_length("password_min_length", &min_str)?;
            config.mark(
                "password_min_length",
                ConfigSource::EnvVar(ENV_PASSWORD_MIN_LENGTH.to_string()),
            );
        }

        if let Ok(max_str) = env::var(ENV_PASSWORD_MAX_LENGTH) {
            config.password_max_length = parse_length("password_max_length", &max_str)?;
            config.mark(
                "password_max_length",
                ConfigSource::EnvVar(ENV_PASSWORD_MAX_LENGTH.to_string()),
            );
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a YAML document; missing fields keep their defaults
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yaml::from_str(yaml)?;
        config.mark_document_fields(&serde_yaml::from_str::<serde_yaml::Value>(yaml)?);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a JSON document; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(json)?;
        let value: serde_json::Value = serde_json::from_str(json)?;
        if let Some(object) = value.as_object() {
            let keys: Vec<String> = object.keys().cloned().collect();
            for key in keys {
                config.mark(&key, ConfigSource::Document);
            }
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        LocaleValidator.validate(self.locale.as_str())?;
        LengthRangeValidator.validate(&(self.password_min_length, self.password_max_length))?;
        Ok(())
    }

    /// Get configuration source information for debugging
    pub fn config_sources(&self) -> HashMap<String, ConfigSource> {
        let defaults = [
            ("locale", DEFAULT_LOCALE.to_string()),
            ("seed", "entropy".to_string()),
            ("letter_case", LetterCase::default().to_string()),
            ("transliteration", TransliterationMode::default().to_string()),
            ("password_min_length", "6".to_string()),
            ("password_max_length", "20".to_string()),
        ];

        defaults
            .into_iter()
            .map(|(field, default)| {
                let source = self
                    .sources
                    .get(field)
                    .cloned()
                    .unwrap_or(ConfigSource::Default(default));
                (field.to_string(), source)
            })
            .collect()
    }

    fn mark(&mut self, field: &str, source: ConfigSource) {
        self.sources.insert(field.to_string(), source);
    }

    fn mark_document_fields(&mut self, document: &serde_yaml::Value) {
        if let Some(mapping) = document.as_mapping() {
            let keys: Vec<String> = mapping
                .keys()
                .filter_map(|key| key.as_str().map(str::to_string))
                .collect();
            for key in keys {
                self.mark(&key, ConfigSource::Document);
            }
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_length(field: &str, value: &str) -> Result<usize, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::invalid_value(field, value, "non-negative integer"))
}
