use crossterm::style::Color;
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use std::fmt;

/// Design tokens for the remote-edit CLI.
///
/// Design constraints:
/// - Only 4 semantic colors (`colors::*`)
/// - All icons must be sourced from this module
pub mod colors {
    use super::Color;

    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const INFO: &str = "ℹ";
    pub const ARROW: &str = "↳";

    // Command identifiers (used in headers).
    pub const CONFIG: &str = "⚙";
}

pub mod icons_ascii {
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const INFO: &str = "[INFO]";
    pub const ARROW: &str = "[>]";

    pub const CONFIG: &str = "[CONFIG]";
}

// ----------------------------------------------------------------------------
// PromptTheme - dialoguer theme that follows the resolved color setting
// ----------------------------------------------------------------------------

/// Theme for dialoguer prompts.
///
/// Wraps `ColorfulTheme` when color output is enabled and `SimpleTheme`
/// otherwise, so `--color never` and `NO_COLOR` reach the prompts too.
pub struct PromptTheme {
    color: bool,
    colorful: ColorfulTheme,
}

impl PromptTheme {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            colorful: ColorfulTheme::default(),
        }
    }

    fn inner(&self) -> &dyn Theme {
        if self.color {
            &self.colorful
        } else {
            &SimpleTheme
        }
    }
}

impl Theme for PromptTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner().format_prompt(f, prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.inner().format_error(f, err)
    }

    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<&str>,
    ) -> fmt::Result {
        self.inner().format_input_prompt(f, prompt, default)
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.inner().format_input_prompt_selection(f, prompt, sel)
    }
}
