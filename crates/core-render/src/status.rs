//! Status line composition.
//!
//! Two formats:
//! `<name>[*] | Ln L, Col C` with ` | <message>` appended when a message is set, or
//! `Find: <query>` while the find prompt is open.
//! * `<name>` is the base file name or `[No Name]`.
//! * `*` appears only when the buffer has unsaved modifications.
//! * line and column are shown 1-based.
//!
//! `compose_status` produces ordered segments; `format_status` joins them.

use std::borrow::Cow;

/// What the status line needs to know.
pub struct StatusContext<'a> {
    pub name: &'a str,
    pub modified: bool,
    /// 0-based logical line.
    pub line: usize,
    /// 0-based logical column.
    pub col: usize,
    pub message: Option<&'a str>,
    /// Prompt input while the find prompt is open.
    pub prompt: Option<&'a [u8]>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSegment<'a> {
    FileName { name: &'a str, modified: bool },
    Position { line_1: usize, col_1: usize },
    Message(&'a str),
    Prompt(Cow<'a, str>),
}

pub const PROMPT_LABEL: &str = "Find: ";

pub fn compose_status<'a>(ctx: &StatusContext<'a>) -> Vec<StatusSegment<'a>> {
    if let Some(query) = ctx.prompt {
        return vec![StatusSegment::Prompt(String::from_utf8_lossy(query))];
    }
    let mut out = Vec::with_capacity(3);
    out.push(StatusSegment::FileName {
        name: ctx.name,
        modified: ctx.modified,
    });
    out.push(StatusSegment::Position {
        line_1: ctx.line + 1,
        col_1: ctx.col + 1,
    });
    if let Some(msg) = ctx.message.filter(|m| !m.is_empty()) {
        out.push(StatusSegment::Message(msg));
    }
    out
}

pub fn format_status(segments: &[StatusSegment<'_>]) -> String {
    use std::fmt::Write as _;
    let mut s = String::with_capacity(64);
    for (i, seg) in segments.iter().enumerate() {
        if i > 0 {
            s.push_str(" | ");
        }
        match seg {
            StatusSegment::FileName { name, modified } => {
                s.push_str(name);
                if *modified {
                    s.push('*');
                }
            }
            StatusSegment::Position { line_1, col_1 } => {
                let _ = write!(s, "Ln {line_1}, Col {col_1}");
            }
            StatusSegment::Message(m) => s.push_str(m),
            StatusSegment::Prompt(q) => {
                s.push_str(PROMPT_LABEL);
                s.push_str(q);
            }
        }
    }
    s
}

pub fn build_status(ctx: &StatusContext) -> String {
    format_status(&compose_status(ctx))
}
