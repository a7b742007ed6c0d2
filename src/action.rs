use std::str::FromStr;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{Configuration, OptionSpec};

/// Target platforms an action can declare support for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    Mac,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Mac => "mac",
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown platform: {0}")]
pub struct UnknownPlatformError(String);

impl FromStr for Platform {
    type Err = UnknownPlatformError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            "mac" => Ok(Platform::Mac),
            _ => Err(UnknownPlatformError(raw.to_string())),
        }
    }
}

/// Host-facing grouping tag for an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionCategory {
    Building,
    CodeSigning,
    Push,
    Notifications,
    Misc,
}

impl ActionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionCategory::Building => "building",
            ActionCategory::CodeSigning => "code_signing",
            ActionCategory::Push => "push",
            ActionCategory::Notifications => "notifications",
            ActionCategory::Misc => "misc",
        }
    }
}

/// Execution context supplied by the host runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunContext {
    /// Substitute fixed sentinel results instead of real external work.
    pub dry_run: bool,
}

/// A single named unit of work the host automation runtime can invoke.
///
/// Metadata accessors are pure and constant; all side effects live in
/// [`Action::run`].
pub trait Action {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn author(&self) -> &'static str;

    fn details(&self) -> &'static str;

    /// Declared configuration schema. The bag passed to [`Action::run`]
    /// must have been validated against exactly this sequence.
    fn available_options(&self) -> &[OptionSpec];

    fn is_supported(&self, platform: Platform) -> bool;

    /// Capability gate for hosts that track platforms as raw strings.
    /// Unrecognized names are unsupported.
    fn supports(&self, platform: &str) -> bool {
        platform
            .parse::<Platform>()
            .map(|parsed| self.is_supported(parsed))
            .unwrap_or(false)
    }

    fn example_code(&self) -> &'static [&'static str];

    fn category(&self) -> ActionCategory;

    fn run(&self, config: &Configuration, ctx: &RunContext) -> Result<()>;
}
