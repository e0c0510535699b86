//! # Core Application Logic
//!
//! This module contains appy's state machine.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app context)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `AppState` and the `App` context that owns it
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`outcome`]: `ExitOutcome`, consumed at process teardown
//! - [`error`]: The fatal error kinds
//! - [`checks`]: Environment sanity checks run while initializing
//! - [`config`]: Settings resolution (defaults → file → env → CLI)

pub mod action;
pub mod checks;
pub mod config;
pub mod error;
pub mod outcome;
pub mod state;
