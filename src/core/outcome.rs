//! # Exit Outcome
//!
//! The pair produced by failure handling and consumed exactly once at
//! teardown: an exit status plus an optional human-readable message.

/// Whether the process ends successfully.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExitStatus {
    #[default]
    Success,
    Failure,
}

impl ExitStatus {
    /// Numeric process exit code.
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExitOutcome {
    pub status: ExitStatus,
    pub message: Option<String>,
}

impl ExitOutcome {
    pub fn success() -> Self {
        Self::default()
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: ExitStatus::Failure,
            message: Some(message.into()),
        }
    }

    pub fn code(&self) -> u8 {
        self.status.code()
    }

    pub fn is_failure(&self) -> bool {
        self.status == ExitStatus::Failure
    }
}
