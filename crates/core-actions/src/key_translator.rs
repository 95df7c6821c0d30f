//! Key symbol -> `Action` translation.
//!
//! Two contexts:
//! * Editing: navigation keys move, printable bytes and Enter/Tab insert,
//!   control chords map to Save / Find / FindNext / Quit.
//! * Prompt (find prompt open): printable bytes and Backspace edit the query,
//!   Enter confirms, Escape cancels. Quit stays available; other keys are
//!   swallowed.

use crate::{Action, EditKind, MotionKind, PromptAction};
use core_events::Key;

pub fn translate_key(prompt_active: bool, key: Key) -> Option<Action> {
    let action = if prompt_active {
        translate_prompt(key)
    } else {
        translate_editing(key)
    };
    if action.is_none() {
        tracing::trace!(target: "actions.translate", %key, prompt_active, "unbound");
    }
    action
}

fn translate_prompt(key: Key) -> Option<Action> {
    let p = match key {
        Key::Char(b) => PromptAction::Char(b),
        Key::Backspace => PromptAction::Backspace,
        Key::Enter => PromptAction::Confirm,
        Key::Escape => PromptAction::Cancel,
        Key::Quit => return Some(Action::Quit),
        _ => return None,
    };
    Some(Action::Prompt(p))
}

fn translate_editing(key: Key) -> Option<Action> {
    use MotionKind as M;
    Some(match key {
        Key::Left => Action::Motion(M::Left),
        Key::Right => Action::Motion(M::Right),
        Key::Up => Action::Motion(M::Up),
        Key::Down => Action::Motion(M::Down),
        Key::PageUp => Action::Motion(M::PageUp),
        Key::PageDown => Action::Motion(M::PageDown),
        Key::Home => Action::Motion(M::LineStart),
        Key::End => Action::Motion(M::LineEnd),
        Key::Char(b) => Action::Edit(EditKind::InsertByte(b)),
        Key::Enter => Action::Edit(EditKind::InsertNewline),
        Key::Tab => Action::Edit(EditKind::InsertTab),
        Key::Delete => Action::Edit(EditKind::DeleteUnder),
        Key::Backspace => Action::Edit(EditKind::Backspace),
        Key::Save => Action::Save,
        Key::Find => Action::Find,
        Key::FindNext => Action::FindNext,
        Key::Quit => Action::Quit,
        Key::Escape => return None,
    })
}
