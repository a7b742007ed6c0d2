use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{anyhow, Result};

use super::CertificateManager;
use crate::config::Configuration;

enum Outcome {
    Produce(PathBuf),
    Noop,
    Fail(String),
}

/// Scripted manager for exercising action flows without touching any
/// certificate backend.
pub struct StubCertificateManager {
    outcome: Outcome,
    version: &'static str,
    starts: AtomicUsize,
}

impl StubCertificateManager {
    /// A manager that reports `path` as the freshly produced profile.
    pub fn producing(path: impl Into<PathBuf>) -> Self {
        Self::with_outcome(Outcome::Produce(path.into()))
    }

    /// A manager that finds the active profile still valid.
    pub fn noop() -> Self {
        Self::with_outcome(Outcome::Noop)
    }

    /// A manager whose `start` fails with the given message.
    pub fn failing(message: &str) -> Self {
        Self::with_outcome(Outcome::Fail(message.to_string()))
    }

    pub fn with_version(mut self, version: &'static str) -> Self {
        self.version = version;
        self
    }

    pub fn start_count(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }

    fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            version: "1.2.0",
            starts: AtomicUsize::new(0),
        }
    }
}

impl CertificateManager for StubCertificateManager {
    fn start(&self, _config: &Configuration) -> Result<Option<PathBuf>> {
        self.starts.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Outcome::Produce(path) => Ok(Some(path.clone())),
            Outcome::Noop => Ok(None),
            Outcome::Fail(message) => Err(anyhow!(message.clone())),
        }
    }

    fn version(&self) -> &str {
        self.version
    }
}
