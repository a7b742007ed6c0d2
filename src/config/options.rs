use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Callback invoked with the absolute path of a newly created push profile.
/// The callback only borrows the path; it does not own or release it.
pub type ProfileCallback = Arc<dyn Fn(&Path) + Send + Sync>;

/// Enumerates the value shapes a configuration option can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    String,
    Bool,
    Int,
    Callback,
}

impl OptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::String => "string",
            OptionKind::Bool => "bool",
            OptionKind::Int => "int",
            OptionKind::Callback => "callback",
        }
    }
}

/// A single configuration value.
#[derive(Clone)]
pub enum OptionValue {
    String(String),
    Bool(bool),
    Int(i64),
    Callback(ProfileCallback),
}

impl OptionValue {
    pub fn kind(&self) -> OptionKind {
        match self {
            OptionValue::String(_) => OptionKind::String,
            OptionValue::Bool(_) => OptionKind::Bool,
            OptionValue::Int(_) => OptionKind::Int,
            OptionValue::Callback(_) => OptionKind::Callback,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            OptionValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_callback(&self) -> Option<ProfileCallback> {
        match self {
            OptionValue::Callback(callback) => Some(callback.clone()),
            _ => None,
        }
    }

    /// Parses a raw environment string into a value of the expected kind.
    /// Callbacks cannot come from the environment.
    pub fn parse(kind: OptionKind, raw: &str) -> Option<OptionValue> {
        match kind {
            OptionKind::String => Some(OptionValue::String(raw.to_string())),
            OptionKind::Bool => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Some(OptionValue::Bool(true)),
                "false" | "no" | "0" => Some(OptionValue::Bool(false)),
                _ => None,
            },
            OptionKind::Int => raw.trim().parse::<i64>().ok().map(OptionValue::Int),
            OptionKind::Callback => None,
        }
    }
}

impl fmt::Debug for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::String(value) => f.debug_tuple("String").field(value).finish(),
            OptionValue::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            OptionValue::Int(value) => f.debug_tuple("Int").field(value).finish(),
            OptionValue::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// Declared schema entry for one configuration key.
#[derive(Debug, Clone)]
pub struct OptionSpec {
    pub key: &'static str,
    pub description: &'static str,
    /// Environment variable consulted when the key is absent from the
    /// supplied entries.
    pub env_name: Option<&'static str>,
    pub kind: OptionKind,
    pub optional: bool,
    pub default: Option<OptionValue>,
    /// Sensitive values are never echoed in error messages.
    pub sensitive: bool,
}

impl OptionSpec {
    pub fn new(key: &'static str, description: &'static str, kind: OptionKind) -> Self {
        Self {
            key,
            description,
            env_name: None,
            kind,
            optional: true,
            default: None,
            sensitive: false,
        }
    }

    pub fn env(mut self, env_name: &'static str) -> Self {
        self.env_name = Some(env_name);
        self
    }

    pub fn default_value(mut self, value: OptionValue) -> Self {
        self.default = Some(value);
        self
    }

    pub fn required(mut self) -> Self {
        self.optional = false;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }
}
