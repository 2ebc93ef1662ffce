//! Editor Surface Implementations
//!
//! `CommandEditor` launches `$VISUAL` / `$EDITOR` on the downloaded file.
//! `PathPrinter` only reports the path, for `--no-open` and scripts.

use std::io::{self, Write};
use std::path::Path;
use std::process::Command;
use std::sync::Mutex;

use crate::domain::ports::{Document, EditorError, EditorSurface, ShowOptions};

/// Editor launched as an external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEditor {
    command: String,
}

impl CommandEditor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// `$VISUAL`, then `$EDITOR`; `None` when neither is set.
    pub fn from_env() -> Option<Self> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    pub fn from_env_with(get_env: impl Fn(&str) -> Option<String>) -> Option<Self> {
        get_env("VISUAL")
            .filter(|v| !v.trim().is_empty())
            .or_else(|| get_env("EDITOR").filter(|v| !v.trim().is_empty()))
            .map(Self::new)
    }

    /// Program and arguments for showing `path`.
    ///
    /// The configured command is split into shell words, so it may carry
    /// its own arguments (`code --wait`) and a quoted program path with
    /// spaces. `None` for an empty command or unbalanced quotes.
    fn build(&self, path: &Path, options: ShowOptions) -> Option<(String, Vec<String>)> {
        let mut parts = shlex::split(&self.command)?.into_iter();
        let program = parts.next()?;
        let mut args: Vec<String> = parts.collect();

        if options.preview && is_vi_family(&program) {
            args.push("-R".to_string());
        }
        args.push(path.display().to_string());
        Some((program, args))
    }
}

fn is_vi_family(program: &str) -> bool {
    let name = Path::new(program)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(program)
        .to_lowercase();
    matches!(name.as_str(), "vi" | "vim" | "nvim" | "gvim" | "view")
}

impl EditorSurface for CommandEditor {
    fn open_document(&self, path: &Path) -> Result<Document, EditorError> {
        open_existing(path)
    }

    fn show_document(&self, document: &Document, options: ShowOptions) -> Result<(), EditorError> {
        let Some((program, args)) = self.build(&document.path, options) else {
            tracing::warn!(command = %self.command, "editor command could not be parsed");
            return Ok(());
        };

        tracing::debug!(program = %program, ?args, "launching editor");
        let status = Command::new(&program)
            .args(&args)
            .status()
            .map_err(|source| EditorError::Launch {
                editor: program.clone(),
                source,
            })?;

        if !status.success() {
            tracing::warn!(program = %program, status = ?status.code(), "editor exited with failure");
        }
        Ok(())
    }
}

/// Editor surface that prints the document path instead of opening it
pub struct PathPrinter {
    json: bool,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl PathPrinter {
    pub fn stdout(json: bool) -> Self {
        Self::with_writer(json, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(json: bool, writer: W) -> Self {
        Self {
            json,
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl EditorSurface for PathPrinter {
    fn open_document(&self, path: &Path) -> Result<Document, EditorError> {
        open_existing(path)
    }

    fn show_document(&self, document: &Document, _options: ShowOptions) -> Result<(), EditorError> {
        let Ok(mut writer) = self.writer.lock() else {
            return Ok(());
        };
        let path = document.path.display().to_string();
        let written = if self.json {
            writeln!(
                writer,
                "{}",
                serde_json::json!({ "event": "document", "path": path })
            )
        } else {
            writeln!(writer, "{}", path)
        };
        if let Err(e) = written.and_then(|()| writer.flush()) {
            tracing::warn!(path = %path, error = %e, "failed to print document path");
        }
        Ok(())
    }
}

fn open_existing(path: &Path) -> Result<Document, EditorError> {
    if !path.is_file() {
        return Err(EditorError::NotFound(path.to_path_buf()));
    }
    Ok(Document {
        path: path.to_path_buf(),
    })
}
