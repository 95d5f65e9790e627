//! Data file access
//!
//! Reads take a shared advisory lock and writes an exclusive one, both on a
//! `<file>.lock` sidecar so the data file itself can be replaced by rename.
//! The lock keeps a reader from seeing a half-written file. It does not merge
//! concurrent updates: the last full write wins.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::store::StoreError;

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("quickjump"));
    name.push(suffix);
    path.with_file_name(name)
}

/// Returns the sidecar lock path for a data file
pub fn lock_path(path: &Path) -> PathBuf {
    sibling(path, ".lock")
}

fn open_lock(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(lock_path(path))
}

/// Reads the whole data file, or `None` when it does not exist
pub fn read(path: &Path) -> Result<Option<Vec<u8>>, StoreError> {
    if !path.exists() {
        return Ok(None);
    }

    // Read-only locations still get read, just without the lock
    let lock = match open_lock(path) {
        Ok(file) => match file.lock_shared() {
            Ok(()) => Some(file),
            Err(e) => {
                tracing::debug!(error = %e, "reading without shared lock");
                None
            }
        },
        Err(e) => {
            tracing::debug!(error = %e, "lock file unavailable, reading without lock");
            None
        }
    };

    let bytes = fs::read(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    drop(lock);
    Ok(Some(bytes))
}

/// Replaces the data file with `bytes` via a temp file and rename
pub fn write(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let write_err = |source: io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
    }

    let lock = open_lock(path).map_err(write_err)?;
    lock.lock_exclusive().map_err(write_err)?;

    let temp_path = sibling(path, ".tmp");
    let written = write_temp(&temp_path, bytes).and_then(|()| fs::rename(&temp_path, path));
    if let Err(source) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(write_err(source));
    }

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "data file written");
    Ok(())
}

fn write_temp(temp_path: &Path, bytes: &[u8]) -> io::Result<()> {
    let file = File::create(temp_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(bytes)?;
    writer.flush()
}
