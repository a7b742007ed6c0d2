use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use anyhow::Result;
use log::{debug, info};

use crate::action::{Action, ActionCategory, Platform, RunContext};
use crate::certificates::{self, CertificateManager};
use crate::config::{Configuration, OptionKind, OptionSpec};
use crate::domain;
use crate::update::{UpdateChecker, UpdateStatusGuard};

/// Key of the optional callback invoked when a new profile was produced.
pub const NEW_PROFILE_KEY: &str = "new_profile";

/// Profile path substituted for real certificate work in dry-run mode.
const DRY_RUN_PROFILE_PATH: &str = "test.pem";

/// Ensures a valid push notification certificate is active and creates a
/// new one if needed. All certificate work is delegated to the injected
/// [`CertificateManager`]; the action validates nothing beyond the contract
/// already enforced by [`Configuration::build`].
pub struct PushCertificateAction {
    manager: Arc<dyn CertificateManager>,
    update_checker: Arc<dyn UpdateChecker>,
    options: OnceLock<Vec<OptionSpec>>,
}

impl PushCertificateAction {
    pub fn new(
        manager: Arc<dyn CertificateManager>,
        update_checker: Arc<dyn UpdateChecker>,
    ) -> Self {
        Self {
            manager,
            update_checker,
            options: OnceLock::new(),
        }
    }
}

impl Action for PushCertificateAction {
    fn name(&self) -> &'static str {
        "get_push_certificate"
    }

    fn description(&self) -> &'static str {
        "Ensures a valid push profile is active and creates a new one if needed"
    }

    fn author(&self) -> &'static str {
        "hartwigc"
    }

    fn details(&self) -> &'static str {
        "Additionally to the available options you can pass a `new_profile` \
         callback that only runs when a new profile was created, e.g. to \
         upload the fresh certificate to your servers."
    }

    fn available_options(&self) -> &[OptionSpec] {
        self.options.get_or_init(|| {
            let mut options = certificates::available_options();
            options.push(OptionSpec::new(
                NEW_PROFILE_KEY,
                "Callback invoked with the absolute profile path when a new profile was created",
                OptionKind::Callback,
            ));
            options
        })
    }

    fn is_supported(&self, platform: Platform) -> bool {
        platform == Platform::Ios
    }

    fn example_code(&self) -> &'static [&'static str] {
        &[
            "get_push_certificate()",
            "get_push_certificate(\n\
             \x20   force: true,\n\
             \x20   app_identifier: \"net.sunapps.9\",\n\
             \x20   save_private_key: true,\n\
             \x20   new_profile: |profile_path| upload(profile_path),\n\
             )",
        ]
    }

    fn category(&self) -> ActionCategory {
        ActionCategory::Push
    }

    fn run(&self, config: &Configuration, ctx: &RunContext) -> Result<()> {
        // Installed before anything else so the status notification fires
        // on every exit path, manager failures included.
        let _status = UpdateStatusGuard::new(
            self.update_checker.as_ref(),
            self.name(),
            self.manager.version(),
        );

        if !ctx.dry_run {
            self.update_checker.start_looking_for_update(self.name());
        }

        if let Some(raw) = config.string("app_identifier") {
            let app_identifier = domain::normalize_app_identifier(raw)?;
            debug!("[push-cert] target app identifier {app_identifier}");
        }

        let profile_path = if ctx.dry_run {
            debug!("[push-cert] dry run, using sentinel profile path");
            Some(PathBuf::from(DRY_RUN_PROFILE_PATH))
        } else {
            self.manager.start(config)?
        };

        match profile_path {
            Some(path) => {
                let absolute = domain::absolute_profile_path(&path)?;
                info!("[push-cert] profile available at {}", absolute.display());
                if let Some(callback) = config.callback(NEW_PROFILE_KEY) {
                    callback(&absolute);
                }
            }
            None => debug!("[push-cert] active profile still valid, nothing to do"),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    use super::*;
    use crate::certificates::testing::StubCertificateManager;
    use crate::config::{OptionValue, ProfileCallback};
    use crate::update::testing::{RecordingUpdateChecker, TelemetryEvent};

    struct Harness {
        action: PushCertificateAction,
        manager: Arc<StubCertificateManager>,
        checker: Arc<RecordingUpdateChecker>,
    }

    fn harness(manager: StubCertificateManager) -> Harness {
        let manager = Arc::new(manager);
        let checker = Arc::new(RecordingUpdateChecker::new());
        let action = PushCertificateAction::new(manager.clone(), checker.clone());
        Harness {
            action,
            manager,
            checker,
        }
    }

    fn config_with_callback(
        action: &PushCertificateAction,
        seen: &Arc<Mutex<Vec<PathBuf>>>,
    ) -> Configuration {
        let seen = seen.clone();
        let callback: ProfileCallback = Arc::new(move |path: &Path| {
            seen.lock().unwrap().push(path.to_path_buf());
        });
        Configuration::build(
            vec![(NEW_PROFILE_KEY.to_string(), OptionValue::Callback(callback))],
            action.available_options(),
        )
        .unwrap()
    }

    fn empty_config(action: &PushCertificateAction) -> Configuration {
        Configuration::build(Vec::new(), action.available_options()).unwrap()
    }

    #[test]
    fn run_without_callback_invokes_nothing() {
        let harness = harness(StubCertificateManager::producing("push.pem"));
        let config = empty_config(&harness.action);

        harness
            .action
            .run(&config, &RunContext::default())
            .unwrap();

        assert_eq!(harness.manager.start_count(), 1);
        assert_eq!(harness.checker.lookup_count(), 1);
        assert_eq!(harness.checker.status_count(), 1);
    }

    #[test]
    fn run_invokes_callback_once_with_absolute_path() {
        let harness = harness(StubCertificateManager::producing("push.pem"));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let config = config_with_callback(&harness.action, &seen);

        harness
            .action
            .run(&config, &RunContext::default())
            .unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].is_absolute());
        assert!(seen[0].ends_with("push.pem"));
    }

    #[test]
    fn run_skips_callback_when_nothing_was_produced() {
        let harness = harness(StubCertificateManager::noop());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let config = config_with_callback(&harness.action, &seen);

        harness
            .action
            .run(&config, &RunContext::default())
            .unwrap();

        assert!(seen.lock().unwrap().is_empty());
        assert_eq!(harness.checker.status_count(), 1);
    }

    #[test]
    fn manager_failure_still_reports_status() {
        let harness = harness(
            StubCertificateManager::failing("portal rejected the signing request")
                .with_version("1.3.7"),
        );
        let config = empty_config(&harness.action);

        let err = harness
            .action
            .run(&config, &RunContext::default())
            .unwrap_err();

        assert!(err.to_string().contains("portal rejected"));
        let events = harness.checker.events();
        assert!(events.contains(&TelemetryEvent::StatusShown {
            tool_name: "get_push_certificate".to_string(),
            current_version: "1.3.7".to_string(),
        }));
    }

    #[test]
    fn mangled_app_identifier_fails_fast_but_still_reports_status() {
        let harness = harness(StubCertificateManager::producing("push.pem"));
        let config = Configuration::build(
            vec![(
                "app_identifier".to_string(),
                OptionValue::String("com.example app".into()),
            )],
            harness.action.available_options(),
        )
        .unwrap();

        let err = harness
            .action
            .run(&config, &RunContext::default())
            .unwrap_err();

        assert!(err.to_string().contains("invalid app identifier"));
        assert_eq!(harness.manager.start_count(), 0);
        assert_eq!(harness.checker.status_count(), 1);
    }

    #[test]
    fn dry_run_completes_without_callback_or_lookup() {
        let harness = harness(StubCertificateManager::producing("push.pem"));
        let config = empty_config(&harness.action);

        harness
            .action
            .run(&config, &RunContext { dry_run: true })
            .unwrap();

        assert_eq!(harness.manager.start_count(), 0);
        assert_eq!(harness.checker.lookup_count(), 0);
        assert_eq!(harness.checker.status_count(), 1);
    }

    #[test]
    fn dry_run_hands_callback_the_absolute_sentinel() {
        let harness = harness(StubCertificateManager::noop());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let config = config_with_callback(&harness.action, &seen);

        harness
            .action
            .run(&config, &RunContext { dry_run: true })
            .unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].is_absolute());
        assert!(seen[0].ends_with("test.pem"));
        assert_eq!(harness.manager.start_count(), 0);
    }

    #[test]
    fn available_options_are_cached() {
        let harness = harness(StubCertificateManager::noop());
        let first = harness.action.available_options();
        let second = harness.action.available_options();
        assert_eq!(first.as_ptr(), second.as_ptr());
        assert_eq!(
            first.len(),
            certificates::available_options().len() + 1,
        );
        assert!(first.iter().any(|spec| spec.key == NEW_PROFILE_KEY));
    }

    #[test]
    fn only_ios_is_supported() {
        let harness = harness(StubCertificateManager::noop());
        assert!(harness.action.supports("ios"));
        assert!(!harness.action.supports("android"));
        assert!(!harness.action.supports("watchos"));
        assert!(!harness.action.supports(""));
    }

    #[test]
    fn metadata_is_constant() {
        let harness = harness(StubCertificateManager::noop());
        assert_eq!(harness.action.name(), "get_push_certificate");
        assert_eq!(harness.action.category(), ActionCategory::Push);
        assert!(!harness.action.example_code().is_empty());
        assert!(harness.action.details().contains("new_profile"));
    }
}
