mod checker;
pub(crate) mod http;
mod status;
pub mod testing;

pub use checker::{LatestRelease, RegistryUpdateChecker};
pub use status::UpdateStatusGuard;

/// Fire-and-forget update telemetry. Failures inside an implementation must
/// never surface to the action; they are logged and swallowed.
pub trait UpdateChecker: Send + Sync {
    /// Kicks off a lookup for a newer release of `tool_name`.
    fn start_looking_for_update(&self, tool_name: &str);

    /// Reports the outcome of the lookup together with the version the
    /// running tooling identifies itself as.
    fn show_update_status(&self, tool_name: &str, current_version: &str);
}
