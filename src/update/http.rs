use std::sync::OnceLock;
use std::time::Duration;

use log::warn;
use reqwest::blocking::Client;

const DEFAULT_REGISTRY_URL: &str = "https://crates.io/api/v1/crates";

pub struct HttpClient;

impl HttpClient {
    pub fn shared() -> &'static Client {
        static CLIENT: OnceLock<Client> = OnceLock::new();
        CLIENT.get_or_init(|| {
            let timeout = resolve_timeout();
            reqwest::blocking::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|err| {
                    warn!("[update-http] failed to build shared client: {err}");
                    reqwest::blocking::Client::new()
                })
        })
    }
}

pub fn resolve_timeout() -> Duration {
    const DEFAULT_TIMEOUT_SECS: u64 = 10;
    let timeout = std::env::var("PUSHCERT_HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|raw| raw.parse::<u64>().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    if timeout == 0 {
        warn!("[update-http] invalid timeout value; using default");
        return Duration::from_secs(DEFAULT_TIMEOUT_SECS);
    }
    Duration::from_secs(timeout)
}

/// Base URL of the release registry queried for newer versions.
pub fn resolve_registry_url() -> String {
    match std::env::var("PUSHCERT_UPDATE_URL") {
        Ok(raw) if !raw.trim().is_empty() => raw.trim().trim_end_matches('/').to_string(),
        _ => DEFAULT_REGISTRY_URL.to_string(),
    }
}
