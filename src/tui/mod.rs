//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal session, polls keys,
//! performs the effects returned by `core::action::update`, and draws.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Loop
//!
//! One iteration ("tick"):
//!
//! 1. Stop if shutdown was requested (SIGINT listener or `^C` key).
//! 2. Poll for a key without blocking; `^C` requests shutdown, `KEY_F(1)`
//!    is echoed on screen.
//! 3. Dispatch `Action::Tick` and perform the returned effect.
//! 4. Redraw only if something changed.
//! 5. Yield to the runtime (sleep for the tick, or `yield_now` when the
//!    tick is zero) so the signal listener gets to run.

mod component;
pub mod components;
pub mod event;
pub mod shutdown;
pub mod terminal;
mod ui;

use std::error::Error;
use std::io;
use std::time::Duration;

use log::{debug, info};
use ratatui::backend::Backend;

use crate::core::action::{Action, Effect, update};
use crate::core::checks::EnvironmentCheck;
use crate::core::state::App;
use crate::tui::components::MenuBar;
use crate::tui::event::InputSource;
use crate::tui::shutdown::ShutdownFlag;
use crate::tui::terminal::{TerminalMode, TerminalSession, backend_error};

pub use terminal::install_panic_hook;

/// Status text shown while package information loads.
pub const LOADING_TEXT: &str = "Loading...";

/// TUI-specific presentation state (not part of core state).
///
/// Everything written to the screen so far; replayed on every draw.
#[derive(Debug, Default)]
pub struct TuiState {
    pub status_line: Option<String>,
    pub key_echo: Option<String>,
    pub menu_bar: Option<MenuBar>,
}

/// Run the main loop until `app.looping` is cleared.
///
/// Returns the presentation state so callers can inspect what was shown.
/// Terminal I/O errors propagate; teardown is the caller's job.
pub async fn run<B, M, I, C>(
    session: &mut TerminalSession<B, M>,
    input: &mut I,
    checks: &C,
    app: &mut App,
    shutdown: &ShutdownFlag,
    tick: Duration,
) -> io::Result<TuiState>
where
    B: Backend,
    B::Error: Error + Send + Sync + 'static,
    M: TerminalMode,
    I: InputSource + ?Sized,
    C: EnvironmentCheck + ?Sized,
{
    let mut tui = TuiState::default();
    let mut needs_redraw = false;
    let mut ticks: u64 = 0;

    while app.looping {
        if shutdown.is_requested() {
            update(app, Action::Interrupt);
            break;
        }

        if let Some(key) = input.poll()? {
            debug!("Key press: {}", key.name);
            if key.is_interrupt() {
                shutdown.request();
                continue;
            }
            if key.is_help() {
                tui.key_echo = Some(key.name);
                needs_redraw = true;
            }
        }

        let mut dirty = false;
        match update(app, Action::Tick) {
            Effect::RunChecks => {
                let action = match checks.run() {
                    Ok(()) => Action::ChecksPassed,
                    Err(err) => Action::Fail(err),
                };
                update(app, action);
            }
            Effect::ShowLoading => {
                tui.status_line = Some(LOADING_TEXT.to_string());
                needs_redraw = true;
            }
            Effect::DrawMenuBar => {
                tui.menu_bar = Some(MenuBar::default());
                dirty = true;
                needs_redraw = true;
            }
            Effect::None | Effect::Quit => {}
        }

        // Clearing forces a full repaint on the next draw
        if dirty {
            session.terminal_mut().clear().map_err(backend_error)?;
        }
        if needs_redraw {
            session
                .terminal_mut()
                .draw(|f| ui::draw_ui(f, &mut tui))
                .map_err(backend_error)?;
            needs_redraw = false;
        }

        ticks += 1;
        if tick.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(tick).await;
        }
    }

    info!(
        "Main loop finished after {} ticks in {:?}",
        ticks, app.state
    );
    Ok(tui)
}
