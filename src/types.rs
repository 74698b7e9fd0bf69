use crate::error::{FailureKind, SpacetabError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// What a path turned out to be when it was stat'ed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    File,
    Directory,
    Other,
}

/// A filesystem entry found during enumeration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// The final path component.
    pub name: String,
    /// The path used to read and write the entry.
    pub full_path: PathBuf,
    pub kind: EntryKind,
    /// Size in bytes. Always zero for anything but regular files.
    pub size: u64,
}

impl FileEntry {
    /// Stats `path`, following symlinks, and records its kind and size.
    ///
    /// # Errors
    ///
    /// Returns [`SpacetabError::PathResolution`] if the path cannot be stat'ed.
    pub fn resolve(path: impl Into<PathBuf>) -> Result<Self, SpacetabError> {
        let full_path = path.into();
        let metadata =
            fs::metadata(&full_path).map_err(|e| SpacetabError::resolution(&full_path, e))?;
        let (kind, size) = if metadata.is_file() {
            (EntryKind::File, metadata.len())
        } else if metadata.is_dir() {
            (EntryKind::Directory, 0)
        } else {
            (EntryKind::Other, 0)
        };
        let name = full_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self {
            name,
            full_path,
            kind,
            size,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// The file was rewritten.
    Converted,
    /// The conversion produced identical bytes, so the file was left alone.
    Unchanged,
    /// Zero-byte file or not a regular file; nothing was read.
    Empty,
}

/// Outcome for one file that was processed without error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
    pub bytes_read: u64,
    pub bytes_written: u64,
}

/// A file or directory that was skipped because of an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileFailure {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    pub kind: FailureKind,
    pub message: String,
}

impl FileFailure {
    pub(crate) fn from_error(error: &SpacetabError) -> Option<Self> {
        Some(Self {
            kind: error.failure_kind()?,
            path: error.path().map(Path::to_path_buf),
            message: error.to_string(),
        })
    }
}

/// Everything a run did, in enumeration order.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConversionReport {
    pub files: Vec<FileReport>,
    pub failures: Vec<FileFailure>,
}

impl ConversionReport {
    pub fn count(&self, status: FileStatus) -> usize {
        self.files.iter().filter(|f| f.status == status).count()
    }

    pub fn converted(&self) -> impl Iterator<Item = &FileReport> {
        self.files
            .iter()
            .filter(|f| f.status == FileStatus::Converted)
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
