use std::sync::Mutex;

use super::UpdateChecker;

/// A telemetry call observed by [`RecordingUpdateChecker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelemetryEvent {
    LookupStarted {
        tool_name: String,
    },
    StatusShown {
        tool_name: String,
        current_version: String,
    },
}

/// Records telemetry calls for assertions in action-level tests.
#[derive(Default)]
pub struct RecordingUpdateChecker {
    events: Mutex<Vec<TelemetryEvent>>,
}

impl RecordingUpdateChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TelemetryEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn lookup_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|event| matches!(event, TelemetryEvent::LookupStarted { .. }))
            .count()
    }

    pub fn status_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|event| matches!(event, TelemetryEvent::StatusShown { .. }))
            .count()
    }
}

impl UpdateChecker for RecordingUpdateChecker {
    fn start_looking_for_update(&self, tool_name: &str) {
        self.events.lock().unwrap().push(TelemetryEvent::LookupStarted {
            tool_name: tool_name.to_string(),
        });
    }

    fn show_update_status(&self, tool_name: &str, current_version: &str) {
        self.events.lock().unwrap().push(TelemetryEvent::StatusShown {
            tool_name: tool_name.to_string(),
            current_version: current_version.to_string(),
        });
    }
}
