use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

/// Canonical form of an app bundle identifier (e.g. "com.example.app").
pub fn normalize_app_identifier(input: &str) -> Result<String> {
    let trimmed = input.trim().trim_matches('.');
    if trimmed.is_empty() {
        return Err(anyhow!("app identifier is required"));
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(anyhow!("invalid app identifier: {trimmed}"));
    }
    Ok(trimmed.to_string())
}

/// Absolute form of a profile path. The file does not need to exist yet;
/// relative paths are resolved against the current working directory.
pub fn absolute_profile_path(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path)
        .map_err(|err| anyhow!("failed to resolve profile path {}: {err}", path.display()))
}
