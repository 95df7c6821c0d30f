//! File IO for the editor session: load at startup, save on Ctrl-S.
//!
//! Synchronous and blocking. Both paths report to the status line rather than
//! failing the session; only unexpected open errors propagate to the caller.

use core_state::EditorState;
use core_text::{DiskStorage, IoError, SaveReport, Storage, TextStore};
use std::path::Path;

pub const MSG_NEW_FILE: &str = "New file";
pub const MSG_NO_FILE_NAME: &str = "No file name";

/// How a buffer came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    Loaded { bytes: usize },
    NewFile,
}

/// Read `path` into a store. A missing file yields an empty store.
pub fn open_file(path: &Path) -> Result<(TextStore, OpenOutcome), IoError> {
    open_file_with(&DiskStorage, path)
}

pub fn open_file_with<S: Storage + ?Sized>(
    storage: &S,
    path: &Path,
) -> Result<(TextStore, OpenOutcome), IoError> {
    match TextStore::open_with(storage, path) {
        Ok(store) => {
            let bytes = store.len();
            tracing::info!(target: "io", path = %path.display(), bytes, "file_open");
            Ok((store, OpenOutcome::Loaded { bytes }))
        }
        Err(IoError::NotFound(_)) => {
            tracing::info!(target: "io", path = %path.display(), "file_new");
            Ok((TextStore::new(), OpenOutcome::NewFile))
        }
        Err(e) => {
            tracing::error!(target: "io", path = %path.display(), error = %e, "file_open_error");
            Err(e)
        }
    }
}

/// Build the session state for `path`, with a "New file" status for a missing file.
pub fn load_state(path: &Path) -> Result<EditorState, IoError> {
    let (store, outcome) = open_file(path)?;
    let mut state = EditorState::with_file(store, path);
    if outcome == OpenOutcome::NewFile {
        state.set_status(MSG_NEW_FILE);
    }
    Ok(state)
}

/// Save the buffer to its file name and report on the status line.
pub fn save_buffer(state: &mut EditorState) -> Option<SaveReport> {
    save_buffer_with(&DiskStorage, state)
}

pub fn save_buffer_with<S: Storage + ?Sized>(
    storage: &S,
    state: &mut EditorState,
) -> Option<SaveReport> {
    let Some(path) = state.file_name.clone() else {
        state.set_status(MSG_NO_FILE_NAME);
        return None;
    };
    let name = state.display_name();
    match state.store.save_with(storage, &path, state.settings.backup) {
        Ok(report) => {
            state.modified = false;
            state.set_status(format!("Saved {name}: {} bytes", report.bytes_written));
            tracing::info!(
                target: "io",
                path = %path.display(),
                bytes = report.bytes_written,
                backup = report.backup.is_some(),
                "file_write"
            );
            Some(report)
        }
        Err(e) => {
            tracing::error!(target: "io", path = %path.display(), error = %e, "file_write_error");
            state.set_status(format!("Error saving {name}: {e}"));
            None
        }
    }
}
