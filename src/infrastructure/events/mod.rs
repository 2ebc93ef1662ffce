//! Notifier Implementations

mod json;

pub use json::JsonNotifier;
