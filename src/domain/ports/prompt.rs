//! Interactive Prompt Ports
//!
//! `None` always means the user dismissed the prompt.

use std::path::PathBuf;

/// Free-text prompt
pub trait Prompt {
    fn ask(&self, prompt: &str) -> Option<String>;
}

/// Local folder selection
pub trait FolderPicker {
    fn pick_folder(&self, title: &str) -> Option<PathBuf>;
}
