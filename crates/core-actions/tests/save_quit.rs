mod common;

use common::{model, press, type_text};
use core_actions::io_ops;
use core_events::Key;
use core_text::{IoError, Storage, backup_path};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[test]
fn ctrl_s_saves_with_backup_and_clears_modified() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, b"old\n")?;
    let mut m = model("", 10, 40);
    *m.state_mut() = io_ops::load_state(&path)?;
    type_text(&mut m, "new ");
    assert!(m.state().modified);
    press(&mut m, Key::Save);
    assert!(!m.state().modified);
    assert_eq!(m.state().status.as_deref(), Some("Saved notes.txt: 8 bytes"));
    assert_eq!(std::fs::read(&path)?, b"new old\n");
    assert_eq!(std::fs::read(backup_path(&path))?, b"old\n");
    // a clean buffer quits on the first request
    assert!(press(&mut m, Key::Quit).quit);
    Ok(())
}

#[test]
fn unsaved_quit_needs_second_press() {
    let mut m = model("x\n", 10, 40);
    type_text(&mut m, "y");
    assert!(!press(&mut m, Key::Quit).quit);
    assert!(press(&mut m, Key::Quit).quit);
}

#[test]
fn unsaved_quit_from_find_prompt_closes_prompt_and_warns() {
    let mut m = model("x\n", 10, 40);
    type_text(&mut m, "y");
    press(&mut m, Key::Find);
    assert!(m.state().prompt.is_active());
    assert!(!press(&mut m, Key::Quit).quit);
    assert!(!m.state().prompt.is_active());
    assert_eq!(
        m.state().status.as_deref(),
        Some("Unsaved changes. Press Ctrl-Q again to quit")
    );
    assert!(press(&mut m, Key::Quit).quit);
}

/// In-memory storage whose writes to `.bak` files come up short.
#[derive(Default)]
struct ShortBackup {
    files: RefCell<HashMap<PathBuf, Vec<u8>>>,
}

impl Storage for ShortBackup {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }
    fn len(&self, path: &Path) -> std::io::Result<u64> {
        self.files
            .borrow()
            .get(path)
            .map(|b| b.len() as u64)
            .ok_or_else(|| std::io::ErrorKind::NotFound.into())
    }
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| std::io::ErrorKind::NotFound.into())
    }
    fn write(&self, path: &Path, bytes: &[u8]) -> std::io::Result<usize> {
        let n = if path.extension().is_some_and(|e| e == "bak") {
            bytes.len() / 2
        } else {
            bytes.len()
        };
        self.files.borrow_mut().insert(path.to_path_buf(), bytes[..n].to_vec());
        Ok(n)
    }
}

#[test]
fn short_backup_write_aborts_save_and_keeps_original() {
    let storage = ShortBackup::default();
    let path = PathBuf::from("/virtual/doc.txt");
    storage
        .files
        .borrow_mut()
        .insert(path.clone(), b"original\n".to_vec());

    let (store, _) = io_ops::open_file_with(&storage, &path).unwrap();
    let mut state = core_state::EditorState::with_file(store, &path);
    state.store.insert_at(0, b'!');
    state.modified = true;

    assert!(io_ops::save_buffer_with(&storage, &mut state).is_none());
    assert!(state.modified);
    let status = state.status.clone().unwrap();
    assert!(status.starts_with("Error saving doc.txt: backup to"), "{status}");
    assert_eq!(storage.files.borrow()[&path], b"original\n");

    let err = state.store.save_with(&storage, &path, true).unwrap_err();
    assert!(matches!(err, IoError::BackupFailed { .. }));
}
