//! # Logging bootstrap
//!
//! The library only emits `tracing` events; applications and test harnesses
//! that want to see them install a subscriber with [`init_logging`].

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::io;
use tracing_subscriber::{fmt::Layer, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration for applications embedding forgery
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "warn")
    pub level: String,
    /// Emit JSON lines instead of text
    pub json_format: bool,
    pub pretty_print: bool,
    /// Include file and line number information
    pub include_location: bool,
    /// Fields echoed in the initialization event
    pub global_fields: serde_json::Map<String, Value>,
    /// Directive string such as `forgery_text=debug,forgery_core=info`
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            pretty_print: false,
            include_location: false,
            global_fields: serde_json::Map::new(),
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    pub fn production() -> Self {
        Self {
            level: "warn".to_string(),
            json_format: true,
            pretty_print: false,
            include_location: false,
            global_fields: env_field("production"),
            env_filter: Some(
                "forgery=warn,forgery_core=warn,forgery_text=warn,forgery_providers=warn"
                    .to_string(),
            ),
        }
    }

    /// Verbose: strategy selection, provider registration and formatter overrides
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            json_format: false,
            pretty_print: true,
            include_location: true,
            global_fields: env_field("development"),
            env_filter: Some(
                "forgery=debug,forgery_core=debug,forgery_text=debug,forgery_providers=debug"
                    .to_string(),
            ),
        }
    }

    /// Errors only
    pub fn test() -> Self {
        Self {
            level: "error".to_string(),
            json_format: false,
            pretty_print: false,
            include_location: false,
            global_fields: env_field("test"),
            env_filter: None,
        }
    }

    pub fn with_level<S: Into<String>>(mut self, level: S) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_global_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.global_fields.insert(key.into(), value.into());
        self
    }

    pub fn with_env_filter<S: Into<String>>(mut self, filter: S) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Effective filter directives; `RUST_LOG` still takes precedence at init
    pub fn filter_directives(&self) -> &str {
        self.env_filter.as_deref().unwrap_or(&self.level)
    }
}

fn env_field(env: &str) -> serde_json::Map<String, Value> {
    let mut fields = serde_json::Map::new();
    fields.insert("env".to_string(), json!(env));
    fields
}

/// Install a global subscriber; fails if one is already installed
pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.filter_directives()))?;

    let layer = Layer::new()
        .with_writer(io::stderr)
        .with_file(config.include_location)
        .with_line_number(config.include_location);

    if config.json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .try_init()?;
    } else if config.pretty_print {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.pretty())
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()?;
    }

    let mut init_msg = json!({
        "message": "logging initialized",
        "level": config.level,
        "json_format": config.json_format,
    });
    for (key, value) in config.global_fields {
        init_msg[key] = value;
    }
    tracing::debug!(target: "forgery::logging", "{}", init_msg);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let production = LoggingConfig::production();
        assert!(production.json_format);
        assert_eq!(production.global_fields["env"], json!("production"));
        for target in ["forgery=", "forgery_core=", "forgery_text=", "forgery_providers="] {
            assert!(production.filter_directives().contains(target), "{target}");
        }

        let development = LoggingConfig::development();
        assert!(development.pretty_print);
        assert!(development.filter_directives().contains("forgery_text=debug"));

        let test = LoggingConfig::test();
        assert_eq!(test.filter_directives(), "error");
    }

    #[test]
    fn test_builders() {
        let config = LoggingConfig::default()
            .with_level("trace")
            .with_global_field("suite", "integration");
        assert_eq!(config.filter_directives(), "trace");
        assert_eq!(config.global_fields["suite"], json!("integration"));

        let config = config.with_env_filter("forgery_core=warn");
        assert_eq!(config.filter_directives(), "forgery_core=warn");
    }

    #[test]
    fn test_deserializes_with_defaults() {
        let config: LoggingConfig =
            serde_json::from_str(r#"{"level": "debug", "json_format": true}"#).unwrap();
        assert_eq!(config.level, "debug");
        assert!(config.json_format);
        assert!(config.env_filter.is_none());
    }
}
