//! Exit code and message for a failed run
//!
//! ## Exit Code Convention
//!
//! - `0` = Success
//! - `1` = Anything else: invalid input, failed docker command, Ctrl-C,
//!   unexpected error
//!
//! Scripts wrapping this tool only distinguish success from failure; the
//! console message carries the detail.

use crate::error::BuildError;

pub mod codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Map any error reaching `main` to an exit code.
///
/// Every kind currently exits with `FAILURE`. `main` never picks a code
/// itself, so any future split by error kind belongs here.
pub fn exit_code_for_error(_error: &anyhow::Error) -> i32 {
    codes::FAILURE
}

/// Console message for an error reaching `main`
pub fn failure_message(error: &anyhow::Error) -> String {
    match error.downcast_ref::<BuildError>() {
        Some(BuildError::UserCancelled) => "Operation cancelled by user.".to_string(),
        Some(err) => format!("Error: {}", err),
        None => format!("Unexpected error: {:#}", error),
    }
}
