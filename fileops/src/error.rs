// src/error.rs
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors surfaced by the analysis engine and the lock bookkeeping.
#[derive(Debug, Error)]
pub enum Error {
    #[error("path not found: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no '{extension}' files found under {}", root.display())]
    NoMatchingFiles { root: PathBuf, extension: String },

    #[error("already locked: {}", lock.display())]
    AlreadyLocked { lock: PathBuf },

    #[error("no lock found: {}", lock.display())]
    NotLocked { lock: PathBuf },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Converts a traversal error, keeping the offending path when walkdir knows it.
    pub(crate) fn walk(root: &Path, err: walkdir::Error) -> Self {
        let path = err.path().unwrap_or(root).to_path_buf();
        Self::Io {
            path,
            source: io::Error::from(err),
        }
    }
}
