use std::collections::BTreeMap;

use thiserror::Error;

use super::options::{OptionSpec, OptionValue, ProfileCallback};

/// Errors produced while building a configuration against its schema.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown configuration key: {0}")]
    UnknownKey(String),
    #[error("configuration key '{key}' expects {expected}, got {actual}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("configuration key '{key}' is required but has no value")]
    MissingValue { key: String },
    #[error("invalid value for configuration key '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Validated key/value bag handed to an action run. Built once against the
/// action's declared schema and immutable afterwards.
#[derive(Debug, Default)]
pub struct Configuration {
    values: BTreeMap<String, OptionValue>,
}

impl Configuration {
    /// Validates the supplied entries against the declared schema.
    ///
    /// Unknown keys and kind mismatches are rejected. Absent keys fall back
    /// to their declared environment variable (parsed by kind), then to the
    /// declared default. Non-optional keys must end up populated.
    pub fn build(
        entries: Vec<(String, OptionValue)>,
        schema: &[OptionSpec],
    ) -> Result<Self, ConfigError> {
        let mut values = BTreeMap::new();

        for (key, value) in entries {
            let spec = schema
                .iter()
                .find(|spec| spec.key == key)
                .ok_or_else(|| ConfigError::UnknownKey(key.clone()))?;
            if value.kind() != spec.kind {
                return Err(ConfigError::TypeMismatch {
                    key,
                    expected: spec.kind.as_str(),
                    actual: value.kind().as_str(),
                });
            }
            values.insert(key, value);
        }

        for spec in schema {
            if values.contains_key(spec.key) {
                continue;
            }
            if let Some(env_name) = spec.env_name {
                if let Ok(raw) = std::env::var(env_name) {
                    let value = OptionValue::parse(spec.kind, &raw).ok_or_else(|| {
                        ConfigError::InvalidValue {
                            key: spec.key.to_string(),
                            reason: format!("${env_name} is not a valid {}", spec.kind.as_str()),
                        }
                    })?;
                    values.insert(spec.key.to_string(), value);
                    continue;
                }
            }
            if let Some(default) = &spec.default {
                values.insert(spec.key.to_string(), default.clone());
                continue;
            }
            if !spec.optional {
                return Err(ConfigError::MissingValue {
                    key: spec.key.to_string(),
                });
            }
        }

        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    pub fn string(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(OptionValue::as_str)
    }

    pub fn boolean(&self, key: &str) -> Option<bool> {
        self.values.get(key).and_then(OptionValue::as_bool)
    }

    pub fn integer(&self, key: &str) -> Option<i64> {
        self.values.get(key).and_then(OptionValue::as_int)
    }

    pub fn callback(&self, key: &str) -> Option<ProfileCallback> {
        self.values.get(key).and_then(OptionValue::as_callback)
    }
}
