//! Crossterm-backed key decoding.
//!
//! Maps terminal events onto the editor's logical key set:
//! * Ctrl-Q `Quit`, Ctrl-S `Save`, Ctrl-F `Find`, F3 `FindNext`.
//! * printable ASCII `Char`; other characters and chords are dropped.
//! * resize events pass through.
//!
//! Only key presses count; release and repeat-less release reports from
//! terminals with enhanced keyboard protocols are ignored.

use anyhow::Context;
use core_events::{InputEvent, Key, KeySource};
use crossterm::event::{
    self, Event as CEvent, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind as CKind,
    KeyModifiers as CMods,
};

/// Translate one crossterm event. `None` for events the editor has no use for.
pub fn decode(event: &CEvent) -> Option<InputEvent> {
    match event {
        CEvent::Key(key) => decode_key(key).map(InputEvent::Key),
        CEvent::Resize(cols, rows) => Some(InputEvent::Resize {
            cols: *cols,
            rows: *rows,
        }),
        _ => None,
    }
}

pub fn decode_key(key: &CKeyEvent) -> Option<Key> {
    if key.kind == CKind::Release {
        return None;
    }
    let ctrl = key.modifiers.contains(CMods::CONTROL);
    let decoded = match key.code {
        CKeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
            'q' => Some(Key::Quit),
            's' => Some(Key::Save),
            'f' => Some(Key::Find),
            _ => None,
        },
        CKeyCode::Char(c) if key.modifiers.contains(CMods::ALT) => {
            tracing::trace!(target: "input", ch = %c, "alt chord ignored");
            None
        }
        CKeyCode::Char(c) => u8::try_from(c).ok().and_then(Key::printable),
        CKeyCode::Up => Some(Key::Up),
        CKeyCode::Down => Some(Key::Down),
        CKeyCode::Left => Some(Key::Left),
        CKeyCode::Right => Some(Key::Right),
        CKeyCode::Home => Some(Key::Home),
        CKeyCode::End => Some(Key::End),
        CKeyCode::PageUp => Some(Key::PageUp),
        CKeyCode::PageDown => Some(Key::PageDown),
        CKeyCode::Delete => Some(Key::Delete),
        CKeyCode::Backspace => Some(Key::Backspace),
        CKeyCode::Enter => Some(Key::Enter),
        CKeyCode::Tab => Some(Key::Tab),
        CKeyCode::Esc => Some(Key::Escape),
        CKeyCode::F(3) => Some(Key::FindNext),
        _ => None,
    };
    if decoded.is_none() {
        tracing::trace!(target: "input", code = ?key.code, mods = ?key.modifiers, "unmapped key");
    }
    decoded
}

/// Reads the controlling terminal with `crossterm::event::read`, blocking until an
/// event the editor understands arrives.
#[derive(Debug, Default)]
pub struct CrosstermKeySource;

impl CrosstermKeySource {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for CrosstermKeySource {
    fn read_event(&mut self) -> anyhow::Result<Option<InputEvent>> {
        loop {
            let raw = event::read().context("reading terminal input")?;
            if let Some(ev) = decode(&raw) {
                tracing::trace!(target: "input", ?ev, "decoded");
                return Ok(Some(ev));
            }
        }
    }
}
