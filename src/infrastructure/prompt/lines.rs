//! Line-oriented prompts for pipes and scripts.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::domain::ports::{FolderPicker, Prompt};
use crate::infrastructure::fs::expand_home;

/// Writes the prompt to stderr and reads one line from `reader`.
///
/// End of input and empty answers both mean the prompt was dismissed.
pub struct LinePrompt<R> {
    reader: RefCell<R>,
}

impl<R: BufRead> LinePrompt<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: RefCell::new(reader),
        }
    }

    fn read_line(&self, prompt: &str) -> Option<String> {
        let mut stderr = io::stderr();
        let _ = write!(stderr, "{}: ", prompt);
        let _ = stderr.flush();

        let mut line = String::new();
        match self.reader.borrow_mut().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let answer = line.trim();
                (!answer.is_empty()).then(|| answer.to_string())
            }
        }
    }
}

impl LinePrompt<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> Prompt for LinePrompt<R> {
    fn ask(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt)
    }
}

impl<R: BufRead> FolderPicker for LinePrompt<R> {
    /// No second chances without a terminal: anything but a directory cancels.
    fn pick_folder(&self, title: &str) -> Option<PathBuf> {
        let answer = self.read_line(title)?;
        let dir = expand_home(Path::new(&answer));
        if dir.is_dir() {
            Some(dir)
        } else {
            tracing::debug!(answer = %answer, "folder answer is not a directory");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn prompt(input: &str) -> LinePrompt<Cursor<Vec<u8>>> {
        LinePrompt::new(Cursor::new(input.as_bytes().to_vec()))
    }

    #[test]
    fn ask_trims_answer() {
        assert_eq!(prompt("  proj/file.txt \n").ask("Path").as_deref(), Some("proj/file.txt"));
    }

    #[test]
    fn ask_reads_one_line_per_prompt() {
        let p = prompt("dvlp\nts6227\n");
        assert_eq!(p.ask("Remote host").as_deref(), Some("dvlp"));
        assert_eq!(p.ask("Remote user").as_deref(), Some("ts6227"));
        assert_eq!(p.ask("Remote root directory"), None);
    }

    #[test]
    fn empty_answer_is_cancel() {
        assert_eq!(prompt("\n").ask("Path"), None);
        assert_eq!(prompt("").ask("Path"), None);
    }

    #[test]
    fn pick_folder_accepts_existing_directory() {
        let dir = tempdir().unwrap();
        let p = prompt(&format!("{}\n", dir.path().display()));
        assert_eq!(p.pick_folder("Select folder"), Some(dir.path().to_path_buf()));
    }

    #[test]
    fn pick_folder_rejects_missing_directory() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let p = prompt(&format!("{}\n", missing.display()));
        assert_eq!(p.pick_folder("Select folder"), None);
    }
}
