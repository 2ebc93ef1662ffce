//! Notification Port
//!
//! User-facing messages. Implementations decide how to render them
//! (themed console lines or NDJSON events).

/// Notification sink
pub trait Notifier {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}
