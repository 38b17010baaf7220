//! Invocation descriptor for a single external command

use std::ffi::OsString;
use std::path::PathBuf;

/// Read-only snapshot of the calling environment, taken once per dispatch.
pub type EnvSnapshot = Vec<(OsString, OsString)>;

/// Capture the full calling environment for unmodified pass-through.
pub fn env_snapshot() -> EnvSnapshot {
    std::env::vars_os().collect()
}

/// A fully constructed external command line: program, fixed argument list,
/// optional working-directory override, and the environment the child will
/// inherit. Built immediately before launch, discarded when the child exits.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Program name, resolved by the OS at spawn time
    pub program: String,

    /// Fixed argument list
    pub args: Vec<String>,

    /// Working-directory override; `None` runs in the caller's directory
    pub cwd: Option<PathBuf>,

    /// Environment snapshot passed through unchanged
    pub env: EnvSnapshot,
}

impl Invocation {
    /// Create a descriptor with no working-directory override.
    pub fn new<I, S>(program: &str, args: I, env: EnvSnapshot) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
            env,
        }
    }

    /// Render the command line for display and test assertions.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}
