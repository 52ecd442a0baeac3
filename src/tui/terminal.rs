//! Raw mode and alternate screen lifecycle for the interactive table.
//!
//! [`TerminalManager::restore`] and `Drop` share one idempotent leave path, so an early
//! return or panic inside the event loop still hands the user back a usable shell.

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, warn};

type CountryTerminal = Terminal<CrosstermBackend<Stdout>>;

pub struct TerminalManager {
    terminal: CountryTerminal,
    active: bool,
}

impl TerminalManager {
    /// Enter raw mode and the alternate screen
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to enter alternate screen");
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
                return Err(e).context("Failed to create terminal");
            }
        };

        debug!("entered alternate screen");
        Ok(Self { terminal, active: true })
    }

    pub fn terminal_mut(&mut self) -> &mut CountryTerminal {
        &mut self.terminal
    }

    /// Leave the alternate screen, reporting any failure
    pub fn restore(mut self) -> Result<()> {
        self.leave()
    }

    fn leave(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, Show)
            .context("Failed to leave alternate screen")?;
        debug!("restored terminal");
        Ok(())
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        if let Err(e) = self.leave() {
            warn!(error = %e, "terminal restore on drop failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Both tests need a TTY; without one `new` fails and there is nothing to check.

    #[test]
    fn test_restore_leaves_alternate_screen() {
        if let Ok(manager) = TerminalManager::new() {
            assert!(manager.restore().is_ok());
        }
    }

    #[test]
    fn test_drop_without_restore_does_not_panic() {
        if let Ok(mut manager) = TerminalManager::new() {
            let _ = manager.terminal_mut().size();
            drop(manager);
        }
    }
}
