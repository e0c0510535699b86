//! # Actions
//!
//! Everything that can happen to appy becomes an `Action`.
//! A loop tick? That's `Action::Tick`.
//! SIGINT or Ctrl+C? That's `Action::Interrupt`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns the `Effect` the caller must perform. No I/O
//! happens here; drawing and running checks is the TUI loop's job.
//!
//! ```text
//! App + Action  →  update()  →  Effect
//! ```

use log::{debug, info};

use crate::core::error::AppError;
use crate::core::state::{App, AppState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// One pass of the main loop.
    Tick,
    /// Environment checks succeeded.
    ChecksPassed,
    /// A fatal error was detected.
    Fail(AppError),
    /// Shutdown was requested from outside the state machine.
    Interrupt,
    /// Force a raw state code, used by the hidden `--start-state` flag.
    InjectState(u8),
}

/// Side effect the loop performs after `update()` returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Run the environment checks, then report `ChecksPassed` or `Fail`.
    RunChecks,
    /// Show the loading status line and flush it.
    ShowLoading,
    /// Create the menu bar region, mark the screen dirty and flush.
    DrawMenuBar,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    // Ticks fire every loop pass; transitions are logged by `App::enter`
    if action != Action::Tick {
        debug!("update: {:?} in {:?}", action, app.state);
    }
    match action {
        Action::Tick => {
            if !app.looping {
                return Effect::None;
            }
            match app.state {
                // Stays put until the checks report back
                AppState::Initializing => Effect::RunChecks,
                AppState::LoadingInfo => {
                    app.enter(AppState::Rendering);
                    Effect::ShowLoading
                }
                AppState::Rendering => {
                    app.enter(AppState::Finished);
                    Effect::DrawMenuBar
                }
                AppState::Finished => Effect::None,
            }
        }
        Action::ChecksPassed => {
            if app.state == AppState::Initializing && app.looping {
                app.enter(AppState::LoadingInfo);
            }
            Effect::None
        }
        Action::Fail(err) => {
            app.fail_with(err);
            Effect::Quit
        }
        Action::Interrupt => {
            info!("Interrupt received in {:?}, shutting down", app.state);
            app.looping = false;
            Effect::Quit
        }
        Action::InjectState(code) => match AppState::try_from(code) {
            Ok(state) => {
                app.enter(state);
                Effect::None
            }
            Err(err) => {
                app.fail_with(err);
                Effect::Quit
            }
        },
    }
}
