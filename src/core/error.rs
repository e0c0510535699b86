//! Fatal error kinds.
//!
//! Both kinds are handled the same way: the message is recorded in the
//! exit outcome, the outcome becomes a failure, and the loop stops on its
//! next check. Nothing is retried.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// An environment or sanity check did not pass.
    #[error("Error initializing appy, exiting")]
    Initialization,
    /// A raw state code that does not name any `AppState`.
    #[error("Invalid application state, exiting")]
    InvalidState(u8),
}
