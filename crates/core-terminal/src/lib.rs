//! Raw-mode terminal acquisition.
//!
//! The editor runs inside the alternate screen with raw mode enabled. Entering
//! goes through [`TerminalGuard`], which leaves again on drop so early returns and
//! unwinding panics restore the terminal. Call [`TerminalGuard::restore`] on the
//! normal exit path to observe a restoration failure instead of swallowing it.

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{
        self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode,
        enable_raw_mode,
    },
};
use std::io::stdout;

pub trait TerminalBackend {
    fn enter(&mut self) -> Result<()>;
    fn leave(&mut self) -> Result<()>;
    fn set_title(&mut self, title: &str) -> Result<()>;
    /// Current geometry as `(cols, rows)`.
    fn size(&self) -> Result<(u16, u16)>;

    /// Enter and return a guard that will leave on drop.
    fn enter_guard(&mut self) -> Result<TerminalGuard<'_, Self>>
    where
        Self: Sized,
    {
        self.enter()?;
        Ok(TerminalGuard {
            backend: self,
            active: true,
        })
    }
}

pub struct CrosstermBackend {
    entered: bool,
}

/// RAII guard ensuring terminal state restoration even if caller early-returns or panics.
pub struct TerminalGuard<'a, B: TerminalBackend> {
    backend: &'a mut B,
    active: bool,
}

impl<B: TerminalBackend> TerminalGuard<'_, B> {
    pub fn backend(&mut self) -> &mut B {
        self.backend
    }

    /// Leave raw mode now and report whether it worked.
    pub fn restore(mut self) -> Result<()> {
        self.active = false;
        self.backend.leave()
    }
}

impl<B: TerminalBackend> Drop for TerminalGuard<'_, B> {
    fn drop(&mut self) {
        if self.active
            && let Err(e) = self.backend.leave()
        {
            tracing::error!(target: "terminal", error = %e, "restore on drop failed");
        }
    }
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self { entered: false }
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enter(&mut self) -> Result<()> {
        if !self.entered {
            enable_raw_mode().context("enabling raw mode")?;
            execute!(stdout(), EnterAlternateScreen).context("entering alternate screen")?;
            self.entered = true;
            tracing::debug!(target: "terminal", "entered raw mode");
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        if self.entered {
            self.entered = false;
            execute!(stdout(), LeaveAlternateScreen).context("leaving alternate screen")?;
            disable_raw_mode().context("disabling raw mode")?;
            tracing::debug!(target: "terminal", "left raw mode");
        }
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        execute!(stdout(), SetTitle(title))?;
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        terminal::size().context("querying terminal size")
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}
