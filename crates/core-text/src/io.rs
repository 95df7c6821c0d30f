//! Persistence gateway: whole-file open and save with a sibling `.bak` backup.
//!
//! All filesystem access goes through the [`Storage`] trait so byte-count checks
//! can be exercised against storages that misbehave. [`DiskStorage`] is the real
//! implementation.
//!
//! Save ordering:
//! 1. If backups are enabled and `path` exists, read it completely.
//! 2. Write those bytes to `<path>.bak`; the write must report the full count.
//! 3. Only then write the store to `path`.
//!
//! A failure in steps 1–2 surfaces as [`IoError::BackupFailed`] and `path` is never
//! opened for writing.

use crate::TextStore;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),

    #[error("short read on {}: expected {expected} bytes, got {actual}", .path.display())]
    ReadIncomplete {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },

    #[error("short write on {}: expected {expected} bytes, wrote {written}", .path.display())]
    WriteIncomplete {
        path: PathBuf,
        expected: usize,
        written: usize,
    },

    #[error("backup to {} failed: {source}", .path.display())]
    BackupFailed {
        path: PathBuf,
        #[source]
        source: Box<IoError>,
    },

    #[error("{}: {source}", .path.display())]
    Os {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IoError {
    fn from_os(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            IoError::NotFound(path.to_path_buf())
        } else {
            IoError::Os {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Outcome of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub bytes_written: usize,
    /// Backup file written before the save, if any.
    pub backup: Option<PathBuf>,
}

/// Minimal filesystem surface used by open/save.
pub trait Storage {
    fn exists(&self, path: &Path) -> bool;
    /// Size in bytes as reported by metadata.
    fn len(&self, path: &Path) -> std::io::Result<u64>;
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;
    /// Create or truncate `path` and write `bytes`, returning how many were written.
    fn write(&self, path: &Path, bytes: &[u8]) -> std::io::Result<usize>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DiskStorage;

impl Storage for DiskStorage {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn len(&self, path: &Path) -> std::io::Result<u64> {
        Ok(std::fs::metadata(path)?.len())
    }

    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> std::io::Result<usize> {
        let mut file = std::fs::File::create(path)?;
        let mut written = 0usize;
        while written < bytes.len() {
            match file.write(&bytes[written..]) {
                Ok(0) => break,
                Ok(n) => written += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        file.flush()?;
        Ok(written)
    }
}

/// `<path>.bak`, appended to the full file name (`notes.txt` -> `notes.txt.bak`).
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".bak");
    PathBuf::from(name)
}

fn read_complete<S: Storage + ?Sized>(storage: &S, path: &Path) -> Result<Vec<u8>, IoError> {
    let expected = storage
        .len(path)
        .map_err(|e| IoError::from_os(path, e))?;
    let data = storage.read(path).map_err(|e| IoError::from_os(path, e))?;
    if data.len() as u64 != expected {
        return Err(IoError::ReadIncomplete {
            path: path.to_path_buf(),
            expected,
            actual: data.len() as u64,
        });
    }
    Ok(data)
}

fn write_complete<S: Storage + ?Sized>(
    storage: &S,
    path: &Path,
    bytes: &[u8],
) -> Result<usize, IoError> {
    let written = storage
        .write(path, bytes)
        .map_err(|e| IoError::from_os(path, e))?;
    if written != bytes.len() {
        return Err(IoError::WriteIncomplete {
            path: path.to_path_buf(),
            expected: bytes.len(),
            written,
        });
    }
    Ok(written)
}

impl TextStore {
    /// Read the whole file at `path` from disk.
    pub fn open(path: &Path) -> Result<Self, IoError> {
        Self::open_with(&DiskStorage, path)
    }

    pub fn open_with<S: Storage + ?Sized>(storage: &S, path: &Path) -> Result<Self, IoError> {
        if !storage.exists(path) {
            return Err(IoError::NotFound(path.to_path_buf()));
        }
        let bytes = read_complete(storage, path)?;
        tracing::debug!(
            target: "io",
            file = %path.display(),
            size_bytes = bytes.len(),
            "file_read_ok"
        );
        Ok(Self::from_bytes(bytes))
    }

    /// Write the store to `path` on disk, backing up any existing file first when
    /// `backup` is set.
    pub fn save(&self, path: &Path, backup: bool) -> Result<SaveReport, IoError> {
        self.save_with(&DiskStorage, path, backup)
    }

    pub fn save_with<S: Storage + ?Sized>(
        &self,
        storage: &S,
        path: &Path,
        backup: bool,
    ) -> Result<SaveReport, IoError> {
        let mut backup_written = None;
        if backup && storage.exists(path) {
            let bak = backup_path(path);
            let copied = read_complete(storage, path)
                .and_then(|original| write_complete(storage, &bak, &original))
                .map_err(|source| IoError::BackupFailed {
                    path: bak.clone(),
                    source: Box::new(source),
                })?;
            tracing::debug!(
                target: "io",
                backup = %bak.display(),
                size_bytes = copied,
                "backup_written"
            );
            backup_written = Some(bak);
        }
        let bytes_written = write_complete(storage, path, self.as_bytes())?;
        tracing::info!(
            target: "io",
            file = %path.display(),
            size_bytes = bytes_written,
            "file_saved"
        );
        Ok(SaveReport {
            bytes_written,
            backup: backup_written,
        })
    }
}
