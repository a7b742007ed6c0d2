use super::UpdateChecker;

/// Emits the final update-status notification on every exit path of an
/// action run, including early returns, propagated errors and panics.
pub struct UpdateStatusGuard<'a> {
    checker: &'a dyn UpdateChecker,
    tool_name: &'a str,
    version: String,
}

impl<'a> UpdateStatusGuard<'a> {
    pub fn new(
        checker: &'a dyn UpdateChecker,
        tool_name: &'a str,
        version: impl Into<String>,
    ) -> Self {
        Self {
            checker,
            tool_name,
            version: version.into(),
        }
    }
}

impl Drop for UpdateStatusGuard<'_> {
    fn drop(&mut self) {
        self.checker.show_update_status(self.tool_name, &self.version);
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use super::*;
    use crate::update::testing::RecordingUpdateChecker;

    #[test]
    fn guard_reports_status_on_drop() {
        let checker = RecordingUpdateChecker::new();
        {
            let _guard = UpdateStatusGuard::new(&checker, "get_push_certificate", "1.2.0");
            assert_eq!(checker.status_count(), 0);
        }
        assert_eq!(checker.status_count(), 1);
    }

    #[test]
    fn guard_reports_status_even_on_panic() {
        let checker = RecordingUpdateChecker::new();
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            let _guard = UpdateStatusGuard::new(&checker, "get_push_certificate", "1.2.0");
            panic!("boom");
        }));
        assert!(outcome.is_err());
        assert_eq!(checker.status_count(), 1);
    }
}
