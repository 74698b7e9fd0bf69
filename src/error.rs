use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
#[derive(Debug, Error)]
pub enum SpacetabError {
    #[error("Cannot resolve {path}: {source}")]
    PathResolution {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot convert {path}: {source}")]
    Transform {
        path: PathBuf,
        source: std::collections::TryReserveError,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    #[error("Invalid ignore pattern: {0}")]
    InvalidPattern(String),
    #[error("No conversion specified")]
    NoConversion,
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}
/// Per-file failure classes. None of them abort a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    PathResolution,
    Read,
    Write,
    Transform,
}
impl SpacetabError {
    pub(crate) fn resolution(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SpacetabError::PathResolution {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SpacetabError::Read {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SpacetabError::Write {
            path: path.into(),
            source,
        }
    }
    /// Returns the per-file failure class, or `None` for errors that end the run.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            SpacetabError::PathResolution { .. } | SpacetabError::Walk(_) => {
                Some(FailureKind::PathResolution)
            }
            SpacetabError::Read { .. } => Some(FailureKind::Read),
            SpacetabError::Write { .. } => Some(FailureKind::Write),
            SpacetabError::Transform { .. } => Some(FailureKind::Transform),
            _ => None,
        }
    }
    pub fn path(&self) -> Option<&Path> {
        match self {
            SpacetabError::PathResolution { path, .. }
            | SpacetabError::Read { path, .. }
            | SpacetabError::Write { path, .. }
            | SpacetabError::Transform { path, .. } => Some(path.as_path()),
            _ => None,
        }
    }
}
