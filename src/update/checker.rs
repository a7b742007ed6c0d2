use std::cmp::Ordering;
use std::sync::Mutex;
use std::thread::JoinHandle;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::http::{resolve_registry_url, HttpClient};
use super::UpdateChecker;

/// Latest release metadata fetched from the registry.
#[derive(Debug, Clone, Serialize)]
pub struct LatestRelease {
    pub version: String,
    pub checked_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct RegistryResponse {
    #[serde(rename = "crate")]
    krate: RegistryCrate,
}

#[derive(Debug, Deserialize)]
struct RegistryCrate {
    max_version: String,
}

/// Update checker backed by a crates registry. The lookup runs on a
/// background thread so the action does not pay for registry latency;
/// `show_update_status` joins it once the action finishes.
pub struct RegistryUpdateChecker {
    registry_url: String,
    pending: Mutex<Option<JoinHandle<Option<LatestRelease>>>>,
}

impl RegistryUpdateChecker {
    pub fn new() -> Self {
        Self::with_registry_url(resolve_registry_url())
    }

    pub fn with_registry_url(registry_url: String) -> Self {
        Self {
            registry_url,
            pending: Mutex::new(None),
        }
    }

    /// Synchronous lookup of the latest published release of `tool_name`.
    /// Returns `None` on any transport or decoding failure.
    pub fn check_now(&self, tool_name: &str) -> Option<LatestRelease> {
        fetch_latest_release(&self.registry_url, tool_name)
    }
}

impl Default for RegistryUpdateChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateChecker for RegistryUpdateChecker {
    fn start_looking_for_update(&self, tool_name: &str) {
        let registry_url = self.registry_url.clone();
        let tool = tool_name.to_string();
        let handle = std::thread::spawn(move || fetch_latest_release(&registry_url, &tool));
        match self.pending.lock() {
            // A replaced handle detaches its lookup; the result is simply
            // never reported.
            Ok(mut pending) => {
                pending.replace(handle);
            }
            Err(err) => debug!("[update-check] pending lookup lock poisoned: {err}"),
        }
    }

    fn show_update_status(&self, tool_name: &str, current_version: &str) {
        let handle = match self.pending.lock() {
            Ok(mut pending) => pending.take(),
            Err(_) => None,
        };
        let Some(handle) = handle else {
            debug!("[update-check] no pending lookup for {tool_name}");
            return;
        };
        let latest = match handle.join() {
            Ok(result) => result,
            Err(_) => {
                warn!("[update-check] lookup thread for {tool_name} panicked");
                None
            }
        };
        match latest {
            Some(release) if is_version_newer(&release.version, current_version) => {
                info!(
                    "[update-check] {tool_name} {} is available (running {current_version}, checked {})",
                    release.version,
                    release.checked_at.format("%Y-%m-%d %H:%M UTC"),
                );
            }
            Some(release) => {
                debug!(
                    "[update-check] {tool_name} {current_version} is up to date (registry has {})",
                    release.version,
                );
            }
            None => debug!("[update-check] no release information for {tool_name}"),
        }
    }
}

fn fetch_latest_release(registry_url: &str, tool_name: &str) -> Option<LatestRelease> {
    let url = format!("{}/{}", registry_url.trim_end_matches('/'), tool_name);
    let response = match HttpClient::shared().get(&url).send() {
        Ok(response) => response,
        Err(err) => {
            debug!("[update-check] lookup failed for {tool_name}: {err}");
            return None;
        }
    };
    if !response.status().is_success() {
        debug!(
            "[update-check] registry returned {} for {tool_name}",
            response.status(),
        );
        return None;
    }
    let body = match response.text() {
        Ok(body) => body,
        Err(err) => {
            debug!("[update-check] failed to read registry response for {tool_name}: {err}");
            return None;
        }
    };
    match serde_json::from_str::<RegistryResponse>(&body) {
        Ok(parsed) => Some(LatestRelease {
            version: parsed.krate.max_version,
            checked_at: Utc::now(),
        }),
        Err(err) => {
            debug!("[update-check] unreadable registry response for {tool_name}: {err}");
            None
        }
    }
}

/// Compares dotted version strings segment by segment. Numeric segments
/// compare numerically, anything else falls back to string order; missing
/// segments count as zero.
pub(crate) fn is_version_newer(candidate: &str, current: &str) -> bool {
    let candidate: Vec<&str> = candidate.trim().split('.').collect();
    let current: Vec<&str> = current.trim().split('.').collect();
    for index in 0..candidate.len().max(current.len()) {
        let left = candidate.get(index).copied().unwrap_or("0");
        let right = current.get(index).copied().unwrap_or("0");
        let ordering = match (left.parse::<u64>(), right.parse::<u64>()) {
            (Ok(left), Ok(right)) => left.cmp(&right),
            _ => left.cmp(right),
        };
        match ordering {
            Ordering::Greater => return true,
            Ordering::Less => return false,
            Ordering::Equal => {}
        }
    }
    false
}
