//! External command execution
//!
//! Every docker call goes through [`CommandRunner`]. The real
//! implementation, [`ProcessRunner`], inherits stdout/stderr so build and
//! push logs stream straight to the terminal; only the exit status is
//! inspected.

use crate::error::{BuildError, Result};
use async_trait::async_trait;
use std::fmt;
use tokio::process::Command;
use tracing::{debug, info};

/// A single external command plus a short description for the console
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub description: &'static str,
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(description: &'static str, program: impl Into<String>) -> Self {
        Self {
            description,
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Subcommand of the external tool, e.g. `build` for `docker build`
    pub fn subcommand(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs an [`Invocation`] to completion.
///
/// Implementations must not retry. A failed command is reported as an error
/// and the caller stops.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, invocation: &Invocation) -> Result<()>;
}

/// Spawns real processes with inherited stdio
#[derive(Debug, Default, Clone)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, invocation: &Invocation) -> Result<()> {
        println!("Running: {}", invocation.description);
        println!("Command: {}", invocation);

        let program = which::which(&invocation.program).map_err(|e| {
            debug!("Lookup of {} failed: {}", invocation.program, e);
            BuildError::CommandNotFound {
                program: invocation.program.clone(),
            }
        })?;

        info!("Executing {}", invocation);

        // Dropping the future (Ctrl-C) kills the child.
        let status = Command::new(&program)
            .args(&invocation.args)
            .kill_on_drop(true)
            .status()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => BuildError::CommandNotFound {
                    program: invocation.program.clone(),
                },
                _ => BuildError::Io(e),
            })?;

        if !status.success() {
            return Err(BuildError::CommandFailed {
                command: invocation.to_string(),
                code: status.code(),
            });
        }

        debug!("{} finished successfully", invocation.description);
        Ok(())
    }
}
