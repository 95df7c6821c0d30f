//! Logical input events consumed by the editor loop.
//!
//! Decoding terminal bytes into these symbols happens elsewhere (`core-input`);
//! the loop only sees one `InputEvent` per iteration through [`KeySource`].

use std::collections::VecDeque;
use std::fmt;

/// One logical key symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable byte (0x20..=0x7e).
    Char(u8),
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Delete,
    Backspace,
    Enter,
    Tab,
    Escape,
    Quit,
    Save,
    Find,
    FindNext,
}

impl Key {
    /// `Char` for printable ASCII, `None` otherwise.
    pub fn printable(byte: u8) -> Option<Key> {
        (0x20..=0x7e).contains(&byte).then_some(Key::Char(byte))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(b) => write!(f, "'{}'", *b as char),
            other => write!(f, "{other:?}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    Resize { cols: u16, rows: u16 },
}

/// Blocking source of input events.
pub trait KeySource {
    /// Wait for the next event. `Ok(None)` means the source is exhausted.
    fn read_event(&mut self) -> anyhow::Result<Option<InputEvent>>;
}

/// Pre-recorded events, replayed in order. Used by tests and scripted runs.
#[derive(Debug, Default, Clone)]
pub struct ScriptedKeys {
    events: VecDeque<InputEvent>,
}

impl ScriptedKeys {
    pub fn new<I: IntoIterator<Item = InputEvent>>(events: I) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Script built from keys only.
    pub fn keys<I: IntoIterator<Item = Key>>(keys: I) -> Self {
        Self::new(keys.into_iter().map(InputEvent::Key))
    }

    /// Printable bytes of `text` as `Char` keys, `\n` as `Enter`, `\t` as `Tab`.
    pub fn typed(text: &str) -> Vec<Key> {
        text.bytes()
            .filter_map(|b| match b {
                b'\n' => Some(Key::Enter),
                b'\t' => Some(Key::Tab),
                other => Key::printable(other),
            })
            .collect()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl KeySource for ScriptedKeys {
    fn read_event(&mut self) -> anyhow::Result<Option<InputEvent>> {
        let ev = self.events.pop_front();
        if let Some(ev) = &ev {
            tracing::trace!(target: "input", ?ev, "scripted");
        }
        Ok(ev)
    }
}
