//! Error types for docker-android-build
//!
//! Library code uses `crate::error::Result<T>` which returns `BuildError`.
//! The binary uses `anyhow::Result<T>` at the top level and converts at the
//! boundary, so `exit_codes` can still downcast to the structured kind.
//!
//! ## When to Use Which Error
//!
//! - `InvalidChoice`: a value outside one of the fixed enumerations
//!   (task, project, Android version). Carries the allowed set so the
//!   message can list it.
//! - `MissingArgument`: a required input is empty or absent after prompting.
//! - `CommandFailed` / `CommandNotFound`: the external container CLI.
//! - `UserCancelled`: Ctrl-C, or end of input while prompting.
//!
//! Nothing here is retried. Every error ends the run.

use thiserror::Error;

/// Main error type for docker-android-build
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("'{value}' is not a supported {kind}! Supported {kind}s: {}", .allowed.join(", "))]
    InvalidChoice {
        kind: &'static str,
        value: String,
        allowed: Vec<String>,
    },

    #[error("Missing required value: {field}")]
    MissingArgument { field: &'static str },

    #[error("{}: {command}", describe_exit(.code))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("Command not found: {program}")]
    CommandNotFound { program: String },

    #[error("Operation cancelled by user")]
    UserCancelled,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("Command failed with exit code {}", code),
        None => "Command terminated by signal".to_string(),
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, BuildError>;
