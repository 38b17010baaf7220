//! Error types for the command runner
//!
//! The dispatcher has exactly one domain error: an unrecognized command
//! token. Everything else (compiler errors, failing tests, lint findings)
//! is the child process's own output, and a missing external tool surfaces
//! as the raw OS spawn error wrapped with anyhow context.

use thiserror::Error;

/// Errors raised by the dispatcher itself.
#[derive(Error, Debug)]
pub enum GomakeError {
    /// Command token outside the fixed action set
    #[error("unknown command `{token}`")]
    UnknownCommand { token: String },
}

impl GomakeError {
    /// Create an unknown-command error
    pub fn unknown_command(token: impl Into<String>) -> Self {
        Self::UnknownCommand {
            token: token.into(),
        }
    }
}
