//! Shared utilities: terminal management.

use anyhow::Result;
use crossterm::{cursor, execute, tty::IsTty};
use std::io::stdout;

/// RAII guard for terminal features during the main loop.
///
/// Hides the cursor while the widget runs and restores it on drop. When
/// stdout is not a terminal (piped output, service manager) the guard is
/// inert rather than an error.
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    pub fn new() -> Result<Self> {
        let mut out = stdout();
        if !out.is_tty() {
            return Ok(Self { active: false });
        }
        execute!(out, cursor::Hide)?;
        Ok(Self { active: true })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = execute!(stdout(), cursor::Show);
        }
    }
}
