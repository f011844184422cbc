//! Values produced by formatters

use serde::Serialize;
use std::fmt;

/// A formatter result; its `Display` form is what templates substitute
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FakeValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl FakeValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FakeValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FakeValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Consume the value, returning its string representation
    pub fn into_string(self) -> String {
        match self {
            FakeValue::Text(text) => text,
            other => other.to_string(),
        }
    }
}

impl fmt::Display for FakeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FakeValue::Text(text) => f.write_str(text),
            FakeValue::Integer(value) => write!(f, "{}", value),
            FakeValue::Float(value) => write!(f, "{}", value),
            FakeValue::Bool(value) => write!(f, "{}", value),
        }
    }
}

impl From<String> for FakeValue {
    fn from(value: String) -> Self {
        FakeValue::Text(value)
    }
}

impl From<&str> for FakeValue {
    fn from(value: &str) -> Self {
        FakeValue::Text(value.to_string())
    }
}

impl From<i64> for FakeValue {
    fn from(value: i64) -> Self {
        FakeValue::Integer(value)
    }
}

impl From<i32> for FakeValue {
    fn from(value: i32) -> Self {
        FakeValue::Integer(value.into())
    }
}

impl From<u32> for FakeValue {
    fn from(value: u32) -> Self {
        FakeValue::Integer(value.into())
    }
}

impl From<f64> for FakeValue {
    fn from(value: f64) -> Self {
        FakeValue::Float(value)
    }
}

impl From<bool> for FakeValue {
    fn from(value: bool) -> Self {
        FakeValue::Bool(value)
    }
}
