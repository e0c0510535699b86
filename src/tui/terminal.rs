//! # Terminal Lifecycle
//!
//! `TerminalSession` owns the ratatui `Terminal` together with the mode
//! switch that put the tty into raw mode. Release is idempotent: the mode
//! is left exactly once, whether through `release()`, `Drop`, or both.
//!
//! The mode switch sits behind `TerminalMode` so tests can count
//! enter/leave calls while drawing into a `TestBackend`.

use std::error::Error;
use std::io::{self, stdout};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{info, warn};
use ratatui::Terminal;
use ratatui::backend::Backend;

/// Switches the tty in and out of the application's input mode.
pub trait TerminalMode {
    fn enter(&mut self) -> io::Result<()>;
    fn leave(&mut self) -> io::Result<()>;
}

/// Raw mode, alternate screen, hidden cursor.
///
/// Raw mode already turns off echo and line buffering; crossterm decodes
/// function and special keys itself.
pub struct CrosstermMode;

impl TerminalMode for CrosstermMode {
    fn enter(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Hide)?;
        info!("Terminal modes enabled (raw, alternate screen, hidden cursor)");
        Ok(())
    }

    fn leave(&mut self) -> io::Result<()> {
        // Run every step even if an earlier one fails
        let screen = execute!(stdout(), LeaveAlternateScreen, Show);
        let raw = disable_raw_mode();
        screen.and(raw)
    }
}

/// Restore the terminal before the default panic message is printed.
pub fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = CrosstermMode.leave();
        hook(panic_info);
    }));
}

pub(crate) fn backend_error<E>(err: E) -> io::Error
where
    E: Error + Send + Sync + 'static,
{
    io::Error::other(err)
}

pub struct TerminalSession<B: Backend, M: TerminalMode> {
    terminal: Terminal<B>,
    mode: M,
    active: bool,
}

impl<B, M> TerminalSession<B, M>
where
    B: Backend,
    B::Error: Error + Send + Sync + 'static,
    M: TerminalMode,
{
    /// Enter the terminal mode and wrap `backend` in a ratatui terminal.
    ///
    /// If the terminal cannot be built the mode is left again before the
    /// error is returned.
    pub fn acquire(backend: B, mut mode: M) -> io::Result<Self> {
        mode.enter()?;
        match Terminal::new(backend) {
            Ok(terminal) => Ok(Self {
                terminal,
                mode,
                active: true,
            }),
            Err(e) => {
                let _ = mode.leave();
                Err(backend_error(e))
            }
        }
    }

    /// Restore the terminal. Only the first call does anything.
    pub fn release(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        info!("Restoring terminal");
        self.mode.leave()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    pub fn mode(&self) -> &M {
        &self.mode
    }
}

impl<B: Backend, M: TerminalMode> Drop for TerminalSession<B, M> {
    fn drop(&mut self) {
        if self.active {
            self.active = false;
            if let Err(e) = self.mode.leave() {
                warn!("Failed to restore terminal on drop: {}", e);
            }
        }
    }
}
