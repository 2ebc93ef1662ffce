//! Editor Surface Port

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("document not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to launch editor '{editor}': {source}")]
    Launch {
        editor: String,
        #[source]
        source: std::io::Error,
    },
}

/// A document opened on the editing surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
}

/// How a document is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShowOptions {
    /// Preview documents are transient and not meant for editing
    pub preview: bool,
}

/// Editing surface
pub trait EditorSurface {
    fn open_document(&self, path: &Path) -> Result<Document, EditorError>;

    fn show_document(&self, document: &Document, options: ShowOptions) -> Result<(), EditorError>;
}

impl<T: EditorSurface + ?Sized> EditorSurface for &T {
    fn open_document(&self, path: &Path) -> Result<Document, EditorError> {
        (**self).open_document(path)
    }

    fn show_document(&self, document: &Document, options: ShowOptions) -> Result<(), EditorError> {
        (**self).show_document(document, options)
    }
}

impl<T: EditorSurface + ?Sized> EditorSurface for Box<T> {
    fn open_document(&self, path: &Path) -> Result<Document, EditorError> {
        (**self).open_document(path)
    }

    fn show_document(&self, document: &Document, options: ShowOptions) -> Result<(), EditorError> {
        (**self).show_document(document, options)
    }
}
