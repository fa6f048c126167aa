use std::sync::{Arc, Mutex};

use unglue::report::Reporter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    Info(String),
    Error(String),
    Success(String),
}

/// Reporter that remembers every event instead of printing it.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    events: Arc<Mutex<Vec<ReportEvent>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReportEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ReportEvent::Error(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    pub fn infos(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ReportEvent::Info(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    pub fn successes(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ReportEvent::Success(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.events.lock().unwrap().push(ReportEvent::Info(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.events.lock().unwrap().push(ReportEvent::Error(message.to_string()));
    }

    fn success(&self, message: &str) {
        self.events.lock().unwrap().push(ReportEvent::Success(message.to_string()));
    }
}
