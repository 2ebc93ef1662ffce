//! Terminal prompts backed by dialoguer.

use std::path::{Path, PathBuf};

use dialoguer::theme::Theme;
use dialoguer::Input;

use crate::domain::ports::{FolderPicker, Prompt};
use crate::infrastructure::fs::expand_home;

/// Prompts for an interactive terminal
pub struct TerminalPrompt {
    theme: Box<dyn Theme>,
}

impl TerminalPrompt {
    pub fn with_theme(theme: Box<dyn Theme>) -> Self {
        Self { theme }
    }

    fn read_line(&self, prompt: &str) -> Option<String> {
        let answer: String = Input::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .ok()?;
        let answer = answer.trim().to_string();
        (!answer.is_empty()).then_some(answer)
    }
}

impl Prompt for TerminalPrompt {
    fn ask(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt)
    }
}

impl FolderPicker for TerminalPrompt {
    /// Re-asks until the answer names an existing directory; empty cancels.
    fn pick_folder(&self, title: &str) -> Option<PathBuf> {
        loop {
            let answer = self.read_line(title)?;
            let dir = expand_home(Path::new(&answer));
            if dir.is_dir() {
                return Some(dir);
            }
            let mut message = String::new();
            let _ = self
                .theme
                .format_error(&mut message, &format!("Not a directory: {}", dir.display()));
            eprintln!("{}", message);
        }
    }
}
