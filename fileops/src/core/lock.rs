// src/core/lock.rs
use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::utils::{ensure_dir, is_file, now_rfc3339};

pub const AUDIT_LOG: &str = "audit.log";

/// Marker path for `target`: `<out_dir>/<file name>.lock`.
#[must_use]
pub fn lock_path(out_dir: &Path, target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".lock");
    out_dir.join(name)
}

/// Appends `<timestamp> | <action> | <details>` to the audit log.
///
/// Audit failures never fail the audited action; they are only logged.
pub fn record_audit(out_dir: &Path, action: &str, details: &str) {
    let path = out_dir.join(AUDIT_LOG);
    let line = format!("{} | {action} | {details}\n", now_rfc3339());
    let result = fs::create_dir_all(out_dir).and_then(|()| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?
            .write_all(line.as_bytes())
    });
    if let Err(e) = result {
        log::warn!("could not append to {}: {e}", path.display());
    }
}

/// Creates the lock marker for `target` and records it in the audit log.
///
/// # Errors
///
/// * [`Error::NotFound`] if `target` is not an existing file
/// * [`Error::AlreadyLocked`] if the marker already exists
/// * [`Error::Io`] if the marker cannot be written
pub fn lock(target: &Path, out_dir: &Path) -> Result<PathBuf> {
    if !is_file(target) {
        return Err(Error::NotFound {
            path: target.to_path_buf(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
    }
    let marker = lock_path(out_dir, target);
    if marker.exists() {
        return Err(Error::AlreadyLocked { lock: marker });
    }
    ensure_dir(out_dir)?;
    fs::write(&marker, now_rfc3339()).map_err(|e| Error::io(&marker, e))?;
    record_audit(
        out_dir,
        "lock",
        &format!("file={} lock={}", target.display(), marker.display()),
    );
    log::info!("locked {}", target.display());
    Ok(marker)
}

/// Removes the lock marker for `target` and records it in the audit log.
///
/// # Errors
///
/// * [`Error::NotLocked`] if there is no marker
/// * [`Error::Io`] if the marker cannot be removed
pub fn unlock(target: &Path, out_dir: &Path) -> Result<PathBuf> {
    let marker = lock_path(out_dir, target);
    if !marker.exists() {
        return Err(Error::NotLocked { lock: marker });
    }
    fs::remove_file(&marker).map_err(|e| Error::io(&marker, e))?;
    record_audit(
        out_dir,
        "unlock",
        &format!("file={} lock={}", target.display(), marker.display()),
    );
    log::info!("unlocked {}", target.display());
    Ok(marker)
}
