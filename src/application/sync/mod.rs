//! Sync Use Case
//!
//! Orchestrates one download or upload invocation.
//!
//! This module handles:
//! - Resolving host, user and root directory (config first, then prompts)
//! - Mapping remote paths to local targets and back
//! - Running the transfer and surfacing its outcome

mod config;
mod options;
mod result;
mod use_case;


pub use config::resolve_config;
pub use options::{DownloadRequest, SyncContext, UploadRequest};
pub use result::SyncOutcome;
pub use use_case::{
    SyncOrchestrator, FOLDER_PICKER_TITLE, NO_ACTIVE_DOCUMENT_MESSAGE, REMOTE_DIR_PROMPT,
    REMOTE_PATH_PROMPT,
};
