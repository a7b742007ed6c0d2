use std::path::PathBuf;

use anyhow::Result;

use crate::config::Configuration;

mod options;
pub mod testing;

pub use options::available_options;

/// Seam to the external certificate tooling. Implementations own profile
/// validity checking, signing-request generation, provider API calls and
/// private-key handling; the action only orchestrates.
pub trait CertificateManager: Send + Sync {
    /// Ensures a valid push certificate exists, creating one if absent or
    /// expired. Returns the path of the produced artifact, or `None` when
    /// the active certificate was still valid and nothing was written.
    ///
    /// The validated configuration is handed over explicitly; the manager
    /// must not rely on any process-wide state.
    fn start(&self, config: &Configuration) -> Result<Option<PathBuf>>;

    /// Version string of the backing certificate tooling.
    fn version(&self) -> &str;
}

/// Placeholder manager for hosts without a configured certificate backend.
pub struct UnsupportedCertificateManager {
    reason: String,
}

impl UnsupportedCertificateManager {
    pub fn new(reason: String) -> Self {
        Self { reason }
    }
}

impl CertificateManager for UnsupportedCertificateManager {
    fn start(&self, _config: &Configuration) -> Result<Option<PathBuf>> {
        Err(anyhow::anyhow!(self.reason.clone()))
    }

    fn version(&self) -> &str {
        "unavailable"
    }
}
