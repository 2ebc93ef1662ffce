//! Console notifier: themed one-line notices.

use remote_edit::domain::ports::Notifier;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

pub fn render_notice(
    level: NoticeLevel,
    message: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    match level {
        NoticeLevel::Info => format!(
            "{} {}",
            Icon::Info.colored(supports_color, supports_unicode),
            message
        ),
        NoticeLevel::Error => format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(message).render(supports_color)
        ),
    }
}

/// Info goes to stdout, errors to stderr
pub struct ConsoleNotifier {
    ui: UiContext,
}

impl ConsoleNotifier {
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }
}

impl Notifier for ConsoleNotifier {
    fn info(&self, message: &str) {
        println!(
            "{}",
            render_notice(NoticeLevel::Info, message, self.ui.color, self.ui.unicode)
        );
    }

    fn error(&self, message: &str) {
        eprintln!(
            "{}",
            render_notice(NoticeLevel::Error, message, self.ui.color, self.ui.unicode)
        );
    }
}
