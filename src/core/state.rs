//! # Application State
//!
//! Core state for appy. This module contains the state machine only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── state: AppState          // current boot stage
//! ├── outcome: ExitOutcome     // what teardown will report
//! ├── looping: bool            // false once the loop should stop
//! └── visited: Vec<AppState>   // every state entered, in order
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! The one exception is `fail_with`, which the reducer calls on fatal errors.

use log::{error, info, warn};

use crate::core::error::AppError;
use crate::core::outcome::ExitOutcome;

/// Boot stages, strictly forward except for the jump to `Finished` on failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AppState {
    #[default]
    Initializing = 0,
    LoadingInfo = 1,
    Rendering = 2,
    Finished = 3,
}

impl AppState {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for AppState {
    type Error = AppError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(AppState::Initializing),
            1 => Ok(AppState::LoadingInfo),
            2 => Ok(AppState::Rendering),
            3 => Ok(AppState::Finished),
            other => Err(AppError::InvalidState(other)),
        }
    }
}

/// Application context. One instance lives for the whole process and is
/// passed by reference to whatever needs it.
#[derive(Debug)]
pub struct App {
    pub state: AppState,
    pub outcome: ExitOutcome,
    pub looping: bool,
    pub visited: Vec<AppState>,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::Initializing,
            outcome: ExitOutcome::success(),
            looping: true,
            visited: vec![AppState::Initializing],
        }
    }

    /// Move to `next`, recording it.
    ///
    /// Moves are forward only; `Finished` is reachable from anywhere.
    /// Anything else is ignored.
    pub fn enter(&mut self, next: AppState) {
        if next == self.state {
            return;
        }
        if next.code() < self.state.code() {
            warn!("Refusing backward move {:?} -> {:?}", self.state, next);
            return;
        }
        info!(
            "State {:?} ({}) -> {:?} ({})",
            self.state,
            self.state.code(),
            next,
            next.code()
        );
        self.state = next;
        self.visited.push(next);
    }

    /// Record a fatal error and stop the loop on its next check.
    ///
    /// Does not terminate anything itself; teardown reads `outcome`.
    pub fn fail_with(&mut self, err: AppError) {
        error!("{} ({:?})", err, err);
        self.outcome = ExitOutcome::failure(err.to_string());
        self.looping = false;
        self.enter(AppState::Finished);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
