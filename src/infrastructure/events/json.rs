//! JSON Notifier
//!
//! Outputs notifications as NDJSON for scripts and editor integrations.

use crate::domain::ports::Notifier;
use std::io::{self, Write};
use std::sync::Mutex;

/// Notifier that outputs NDJSON events to stdout
pub struct JsonNotifier {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonNotifier {
    /// Create a new JSON notifier writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON notifier writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            if let Err(e) = writeln!(writer, "{}", event).and_then(|()| writer.flush()) {
                tracing::warn!(event = %event["event"], error = %e, "failed to write JSON event");
            }
        }
    }
}

impl Notifier for JsonNotifier {
    fn info(&self, message: &str) {
        self.write_event(serde_json::json!({ "event": "info", "message": message }));
    }

    fn error(&self, message: &str) {
        self.write_event(serde_json::json!({ "event": "error", "message": message }));
    }
}
