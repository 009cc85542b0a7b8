//! Rendered file descriptions.
//!
//! Exporters produce [`GeneratedFile`] values; nothing in this crate
//! touches the filesystem on the output side. Writing is the caller's
//! job, which keeps exports all-or-nothing.

use std::path::{Path, PathBuf};

/// Where a generated file belongs: a directory plus a file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub directory: PathBuf,
    pub file_name: String,
}

impl Destination {
    pub fn new(directory: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self { directory: directory.into(), file_name: file_name.into() }
    }

    /// Split a configured output path into directory and file name.
    /// A bare file name lands in the current directory.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let directory = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { directory, file_name }
    }

    /// The full output path.
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

/// One fully rendered output file, content and destination together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub destination: Destination,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(destination: Destination, content: impl Into<String>) -> Self {
        Self { destination, content: content.into() }
    }
}
