//! Typed access to one plugin's settings namespace.
//!
//! Settings arrive as LSP JSON (`serde_json::Value`). Plugins read them
//! through typed accessors that turn shape mismatches into
//! [`SettingsError`] values instead of panicking; a malformed setting fails
//! the lint call that reads it.

use serde_json::{Map, Value};

/// A resolved setting value that may be a string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    /// A single string.
    Str(String),
    /// A list of strings.
    List(Vec<String>),
}

/// Errors produced when a setting value has an unexpected JSON shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// A present setting did not have the expected JSON type.
    UnexpectedType {
        /// The setting key that was read.
        key: String,
        /// Description of the expected shape.
        expected: &'static str,
    },
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::UnexpectedType { key, expected } => {
                write!(f, "setting '{}' is not {}", key, expected)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

/// One plugin's settings namespace.
#[derive(Debug, Clone, Default)]
pub struct PluginSettings {
    values: Map<String, Value>,
}

impl PluginSettings {
    /// Build from a JSON value. Anything but an object yields empty
    /// settings.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(values) => Self { values },
            _ => Self::default(),
        }
    }

    /// `true` if no settings are present.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `true` if `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// The raw value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// The value for `key` as a string. A present non-string is an error.
    pub fn str_setting(&self, key: &str) -> Result<Option<&str>, SettingsError> {
        match self.values.get(key) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value)),
            Some(_) => Err(SettingsError::UnexpectedType {
                key: key.to_string(),
                expected: "a string",
            }),
        }
    }

    /// The value for `key` as a boolean. A present non-boolean is an error.
    pub fn bool_setting(&self, key: &str) -> Result<Option<bool>, SettingsError> {
        match self.values.get(key) {
            None => Ok(None),
            Some(Value::Bool(value)) => Ok(Some(*value)),
            Some(_) => Err(SettingsError::UnexpectedType {
                key: key.to_string(),
                expected: "a boolean",
            }),
        }
    }

    /// The value for `key` as a string or list of strings.
    ///
    /// A present value of any other shape, including a list with a
    /// non-string element, is an error.
    pub fn string_or_list(&self, key: &str) -> Result<Option<SettingValue>, SettingsError> {
        let error = || SettingsError::UnexpectedType {
            key: key.to_string(),
            expected: "a string or list of strings",
        };
        match self.values.get(key) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(SettingValue::Str(value.clone()))),
            Some(Value::Array(items)) => {
                let mut list = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(value) => list.push(value.clone()),
                        _ => return Err(error()),
                    }
                }
                Ok(Some(SettingValue::List(list)))
            }
            Some(_) => Err(error()),
        }
    }
}
