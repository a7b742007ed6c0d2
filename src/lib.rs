//! Push-certificate action for automation hosts.
//!
//! The crate exposes a single [`Action`], [`PushCertificateAction`], that
//! keeps a valid push notification certificate active by delegating the
//! actual certificate work to an injected [`CertificateManager`], while
//! emitting fire-and-forget update telemetry through an [`UpdateChecker`].
//! The host runtime builds a [`Configuration`] against the action's
//! declared option schema and invokes [`Action::run`] synchronously.

pub mod action;
pub mod actions;
pub mod certificates;
pub mod config;
pub mod domain;
pub mod update;

pub use action::{Action, ActionCategory, Platform, RunContext};
pub use actions::{PushCertificateAction, NEW_PROFILE_KEY};
pub use certificates::{CertificateManager, UnsupportedCertificateManager};
pub use config::{ConfigError, Configuration, OptionKind, OptionSpec, OptionValue, ProfileCallback};
pub use update::{LatestRelease, RegistryUpdateChecker, UpdateChecker, UpdateStatusGuard};
