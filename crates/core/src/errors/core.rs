use crate::config::ConfigError;
use thiserror::Error;

/// Core error type for fake-data generation
#[derive(Debug, Error)]
pub enum FakerError {
    #[error("Unknown formatter: '{name}'")]
    UnknownFormatter { name: String },

    #[error(
        "{operation} failed with the selected locale '{locale}': no usable character mapping. \
         Try a different locale or enable the `normalization` feature"
    )]
    TransliterationExhausted { operation: String, locale: String },

    #[error("Invalid range: min ({min}) is greater than max ({max})")]
    InvalidRange { min: i64, max: i64 },

    #[error("Option set '{name}' has no entries")]
    EmptyOptionSet { name: String },

    #[error("Unknown locale: '{locale}'")]
    UnknownLocale { locale: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type FakerResult<T> = Result<T, FakerError>;

impl FakerError {
    /// Create a new unknown formatter error
    pub fn unknown_formatter(name: impl Into<String>) -> Self {
        Self::UnknownFormatter { name: name.into() }
    }

    /// Create a new exhausted transliteration error
    pub fn transliteration_exhausted(
        operation: impl Into<String>,
        locale: impl Into<String>,
    ) -> Self {
        Self::TransliterationExhausted {
            operation: operation.into(),
            locale: locale.into(),
        }
    }

    /// Create a new invalid range error
    pub fn invalid_range(min: i64, max: i64) -> Self {
        Self::InvalidRange { min, max }
    }

    pub fn empty_option_set(name: impl Into<String>) -> Self {
        Self::EmptyOptionSet { name: name.into() }
    }

    pub fn unknown_locale(locale: impl Into<String>) -> Self {
        Self::UnknownLocale {
            locale: locale.into(),
        }
    }

    /// Check if the error is an unknown formatter error
    pub fn is_unknown_formatter(&self) -> bool {
        matches!(self, Self::UnknownFormatter { .. })
    }

    /// Check if the error is an exhausted transliteration error
    pub fn is_transliteration_exhausted(&self) -> bool {
        matches!(self, Self::TransliterationExhausted { .. })
    }

    /// Check if the error is an invalid range error
    pub fn is_invalid_range(&self) -> bool {
        matches!(self, Self::InvalidRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_formatter_message() {
        let error = FakerError::unknown_formatter("nope");
        assert!(error.is_unknown_formatter());
        assert_eq!(error.to_string(), "Unknown formatter: 'nope'");
    }

    #[test]
    fn test_exhausted_message_names_operation_and_locale() {
        let error = FakerError::transliteration_exhausted("userName", "zh_CN");
        let message = error.to_string();

        assert!(error.is_transliteration_exhausted());
        assert!(message.starts_with("userName failed"));
        assert!(message.contains("zh_CN"));
        assert!(message.contains("different locale"));
    }

    #[test]
    fn test_config_error_conversion() {
        let error: FakerError = ConfigError::validation_failed("bad").into();
        assert!(matches!(error, FakerError::Config(_)));
        assert!(!error.is_invalid_range());
    }
}
