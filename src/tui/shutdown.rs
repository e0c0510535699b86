//! # Shutdown
//!
//! The signal side only flips an atomic flag. Everything else (restoring
//! the terminal, printing the trailer) happens on the loop's own thread in
//! [`terminate`], the single exit path.

use std::error::Error;
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{info, warn};
use ratatui::backend::Backend;
use tokio::task::JoinHandle;

use crate::core::outcome::ExitOutcome;
use crate::tui::terminal::{TerminalMode, TerminalSession};

/// Process-wide "shutdown requested" flag shared with the signal listener.
#[derive(Debug, Clone, Default)]
pub struct ShutdownFlag(Arc<AtomicBool>);

impl ShutdownFlag {
    pub fn request(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Listen for SIGINT (Ctrl+C outside raw mode, or `kill -INT`) and raise `flag`.
pub fn spawn_interrupt_listener(flag: ShutdownFlag) -> JoinHandle<()> {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Interrupt signal received");
                flag.request();
            }
            Err(e) => warn!("Unable to listen for interrupt signal: {}", e),
        }
    })
}

/// Release the terminal, report the outcome and return the exit code.
///
/// The failure message goes to `diag` after the terminal is restored so it
/// is not lost with the alternate screen.
pub fn terminate<B, M, O, E>(
    session: &mut TerminalSession<B, M>,
    outcome: &ExitOutcome,
    out: &mut O,
    diag: &mut E,
) -> u8
where
    B: Backend,
    B::Error: Error + Send + Sync + 'static,
    M: TerminalMode,
    O: Write,
    E: Write,
{
    if let Err(e) = session.release() {
        warn!("Failed to restore terminal: {}", e);
        let _ = writeln!(diag, "Failed to restore terminal: {e}");
    }
    if let Some(message) = &outcome.message {
        let _ = writeln!(diag, "{message}");
    }
    let code = outcome.code();
    let _ = writeln!(out, "Debug exit status: {code}");
    let _ = out.flush();
    info!("Exiting with status {}", code);
    code
}
