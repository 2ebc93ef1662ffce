//! Prompt and Folder Picker Implementations
//!
//! `TerminalPrompt` drives dialoguer on a TTY; `LinePrompt` reads plain
//! lines when stdin is a pipe. `InteractivePrompt` picks one at startup.

mod lines;
mod terminal;

use std::io::{self, StdinLock};
use std::path::PathBuf;

use dialoguer::theme::Theme;
use is_terminal::IsTerminal;

use crate::domain::ports::{FolderPicker, Prompt};

pub use lines::LinePrompt;
pub use terminal::TerminalPrompt;

/// Prompt that matches how stdin is attached
pub enum InteractivePrompt {
    Terminal(TerminalPrompt),
    Lines(LinePrompt<StdinLock<'static>>),
}

impl InteractivePrompt {
    /// Terminal prompts when both stdin and stderr are TTYs, line prompts otherwise
    pub fn detect(theme: Box<dyn Theme>) -> Self {
        if io::stdin().is_terminal() && io::stderr().is_terminal() {
            InteractivePrompt::Terminal(TerminalPrompt::with_theme(theme))
        } else {
            InteractivePrompt::Lines(LinePrompt::stdin())
        }
    }
}

impl Prompt for InteractivePrompt {
    fn ask(&self, prompt: &str) -> Option<String> {
        match self {
            InteractivePrompt::Terminal(p) => p.ask(prompt),
            InteractivePrompt::Lines(p) => p.ask(prompt),
        }
    }
}

impl FolderPicker for InteractivePrompt {
    fn pick_folder(&self, title: &str) -> Option<PathBuf> {
        match self {
            InteractivePrompt::Terminal(p) => p.pick_folder(title),
            InteractivePrompt::Lines(p) => p.pick_folder(title),
        }
    }
}
