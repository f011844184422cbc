use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired { field: String, hint: String },

    #[error("Invalid value for field '{field}': '{value}'. Expected: {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    #[error("Configuration validation failed: {message}")]
    ValidationFailed { message: String },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    /// Create a missing required field error
    pub fn missing_required(field: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::MissingRequired {
            field: field.into(),
            hint: hint.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Create a validation failed error
    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}

/// Trait for validating configuration values
pub trait ConfigValidator<T: ?Sized> {
    /// Validate a configuration value
    fn validate(&self, value: &T) -> Result<(), ConfigError>;
}

/// Locale tag validator (`ll` or `ll_CC`)
pub struct LocaleValidator;

impl ConfigValidator<str> for LocaleValidator {
    fn validate(&self, value: &str) -> Result<(), ConfigError> {
        if value.is_empty() {
            return Err(ConfigError::missing_required(
                "locale",
                "Set FORGERY_LOCALE or call with_locale()",
            ));
        }

        let mut parts = value.split('_');
        let language_ok = parts
            .next()
            .map(|lang| lang.len() == 2 && lang.chars().all(|c| c.is_ascii_lowercase()))
            .unwrap_or(false);
        let region_ok = match parts.next() {
            Some(region) => region.len() == 2 && region.chars().all(|c| c.is_ascii_uppercase()),
            None => true,
        };

        if !language_ok || !region_ok || parts.next().is_some() {
            return Err(ConfigError::invalid_value(
                "locale",
                value,
                "locale tag such as 'en' or 'en_US'",
            ));
        }
        Ok(())
    }
}

/// Inclusive length range validator
pub struct LengthRangeValidator;

impl ConfigValidator<(usize, usize)> for LengthRangeValidator {
    fn validate(&self, value: &(usize, usize)) -> Result<(), ConfigError> {
        let (min, max) = *value;
        if min > max {
            return Err(ConfigError::invalid_value(
                "password_min_length",
                min.to_string(),
                format!("value not greater than password_max_length ({})", max),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_validator() {
        assert!(LocaleValidator.validate("en_US").is_ok());
        assert!(LocaleValidator.validate("it").is_ok());
        assert!(LocaleValidator.validate("").is_err());
        assert!(LocaleValidator.validate("english").is_err());
        assert!(LocaleValidator.validate("en_us").is_err());
        assert!(LocaleValidator.validate("en_US_x").is_err());
    }

    #[test]
    fn test_length_range_validator() {
        assert!(LengthRangeValidator.validate(&(6, 20)).is_ok());
        assert!(LengthRangeValidator.validate(&(8, 8)).is_ok());

        let error = LengthRangeValidator.validate(&(21, 20)).unwrap_err();
        assert!(matches!(error, ConfigError::InvalidValue { .. }));
    }
}
