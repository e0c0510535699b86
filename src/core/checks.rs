//! Environment sanity checks run while the app is `Initializing`.

use log::{info, warn};

use crate::core::error::AppError;

/// The platform `pkg` ships on.
pub const TARGET_OS: &str = "freebsd";

pub trait EnvironmentCheck {
    fn run(&self) -> Result<(), AppError>;
}

/// Checks against the running system. Nothing here is fatal yet: a
/// non-FreeBSD host only gets a warning in the log.
pub struct SystemChecks;

impl EnvironmentCheck for SystemChecks {
    fn run(&self) -> Result<(), AppError> {
        let os = std::env::consts::OS;
        info!("Running environment checks on {}", os);
        if os != TARGET_OS {
            warn!("appy targets {} but is running on {}", TARGET_OS, os);
        }
        Ok(())
    }
}
