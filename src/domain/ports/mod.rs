//! Domain Ports (Interfaces)
//!
//! Every collaborator the orchestrator talks to is a trait here.
//! Infrastructure provides the concrete implementations.

pub mod config_source;
pub mod editor;
pub mod file_system;
pub mod notifier;
pub mod prompt;
pub mod transfer_client;
pub mod workspace;

pub use config_source::ConfigSource;
pub use editor::{Document, EditorError, EditorSurface, ShowOptions};
pub use file_system::{FileSystem, FsError, FsResult};
pub use notifier::Notifier;
pub use prompt::{FolderPicker, Prompt};
pub use transfer_client::{TransferClient, TransferFailure, TransferResult};
pub use workspace::{ActiveDocument, Workspace};
