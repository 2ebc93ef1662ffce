//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `transfer/` - scp/ssh transfer client
//! - `fs/` - Local file system
//! - `config/` - Configuration source over the merged TOML layers
//! - `prompt/` - Terminal and line-based prompts
//! - `events/` - NDJSON notifier
//! - `editor` - External editor and path printer
//! - `workspace` - Workspace root discovery and the active document

pub mod config;
pub mod editor;
pub mod events;
pub mod fs;
pub mod prompt;
pub mod transfer;
pub mod workspace;

// Re-export for convenience
pub use config::TomlConfigSource;
pub use editor::{CommandEditor, PathPrinter};
pub use events::JsonNotifier;
pub use fs::{expand_home, LocalFs};
pub use prompt::{InteractivePrompt, LinePrompt, TerminalPrompt};
pub use transfer::ScpClient;
pub use workspace::{discover_workspace_root, ActiveFile, LocalWorkspace, ACTIVE_FILE_ENV};
