//! Error types for font discovery and stylesheet generation.

use std::{io, path::PathBuf, result};

/// Errors that can occur while scanning fonts or rewriting stylesheets.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("path not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("not a file: {}", .path.display())]
    NotAFile { path: PathBuf },

    #[error("no font family named '{name}' under {}", .root.display())]
    UnknownFamily { name: String, root: PathBuf },

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid scan pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("failed to enumerate fonts: {0}")]
    Glob(#[from] glob::GlobError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// Whether this error stems from user-supplied paths rather than I/O.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::NotFound { .. }
                | Error::NotADirectory { .. }
                | Error::NotAFile { .. }
                | Error::UnknownFamily { .. }
        )
    }
}

pub type Result<T> = result::Result<T, Error>;
