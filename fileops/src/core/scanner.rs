// src/core/scanner.rs
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};


/// Extension of a file name: everything from the last `.` on, dot included.
///
/// `notes.txt` gives `.txt`, `.bashrc` gives `.bashrc` and `README` gives `""`.
#[inline]
#[must_use]
pub fn file_extension(name: &str) -> &str {
    name.rfind('.').map_or("", |idx| &name[idx..])
}

/// A validated directory root and the extension to collect under it.
///
/// Each call to [`Scanner::iter`] starts a fresh depth-first walk, so a
/// scanner can be reused to observe the tree again.
#[derive(Debug, Clone)]
pub struct Scanner {
    root: PathBuf,
    extension: String,
}

impl Scanner {
    /// Checks that `root` is an existing directory.
    ///
    /// # Errors
    ///
    /// * [`Error::NotFound`] if `root` does not exist or cannot be inspected
    /// * [`Error::NotADirectory`] if `root` is something other than a directory
    pub fn new(root: &Path, extension: &str) -> Result<Self> {
        let metadata = fs::metadata(root).map_err(|source| Error::NotFound {
            path: root.to_path_buf(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(Error::NotADirectory {
                path: root.to_path_buf(),
            });
        }
        Ok(Self {
            root: root.to_path_buf(),
            extension: extension.to_owned(),
        })
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[inline]
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Lazily walks the tree, yielding matching regular files in walk order.
    ///
    /// Entries within a directory are visited sorted by file name, so the
    /// order is the same on every run over an unchanged tree. Symlinks are
    /// neither followed nor collected.
    pub fn iter(&self) -> impl Iterator<Item = Result<PathBuf>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| match entry {
                Err(err) => Some(Err(Error::walk(&self.root, err))),
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        return None;
                    }
                    let matches =
                        file_extension(&entry.file_name().to_string_lossy()) == self.extension;
                    matches.then(|| Ok(entry.into_path()))
                }
            })
    }

    /// Materializes the matched file list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] on the first traversal failure.
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let files = self.iter().collect::<Result<Vec<_>>>()?;
        log::debug!(
            "scanned {}: {} '{}' file(s)",
            self.root.display(),
            files.len(),
            self.extension
        );
        Ok(files)
    }
}

/// Collects every file under `root` whose extension equals `extension`.
///
/// An empty result is not an error here; callers decide whether they need
/// at least one match.
///
/// # Errors
///
/// * [`Error::NotFound`] if `root` does not exist
/// * [`Error::NotADirectory`] if `root` is not a directory
/// * [`Error::Io`] if part of the tree cannot be traversed
#[inline]
pub fn scan(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    Scanner::new(root, extension)?.collect()
}
