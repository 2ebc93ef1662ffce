//! Remote Path Value Object
//!
//! Remote paths are plain strings interpreted on the remote host, always
//! using `/` as separator regardless of the local platform.

use std::fmt;

/// Separator used for every remote path
pub const REMOTE_SEPARATOR: &str = "/";

/// Split a path on the last occurrence of `separator`.
///
/// Returns `(directory, filename)`. When the separator does not occur
/// (or is empty), the directory is empty and the filename is the whole
/// input. A leading separator survives in the directory, so `/a/b`
/// splits into `/a` and `b`, and `/a` splits into `""` and `a`.
pub fn split_remote_path<'a>(path: &'a str, separator: &str) -> (&'a str, &'a str) {
    if separator.is_empty() {
        return ("", path);
    }
    match path.rsplit_once(separator) {
        Some((directory, filename)) => (directory, filename),
        None => ("", path),
    }
}

/// True iff the path starts with the remote separator.
pub fn is_absolute(path: &str) -> bool {
    path.starts_with(REMOTE_SEPARATOR)
}

/// A remote path split into its directory and file name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemotePathSpec {
    raw: String,
    is_absolute: bool,
    directory: String,
    filename: String,
}

impl RemotePathSpec {
    /// Parse a raw remote path using the remote separator
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let (directory, filename) = split_remote_path(&raw, REMOTE_SEPARATOR);
        let (directory, filename) = (directory.to_string(), filename.to_string());
        Self {
            is_absolute: is_absolute(&raw),
            raw,
            directory,
            filename,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_absolute(&self) -> bool {
        self.is_absolute
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Directory components, skipping empty segments from leading or doubled separators
    pub fn directory_segments(&self) -> impl Iterator<Item = &str> {
        self.directory
            .split(REMOTE_SEPARATOR)
            .filter(|segment| !segment.is_empty())
    }
}

impl fmt::Display for RemotePathSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
