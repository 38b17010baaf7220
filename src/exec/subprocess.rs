//! Blocking subprocess execution with inherited stdio

use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use super::invocation::Invocation;

/// Result of a subprocess execution
///
/// The dispatcher records the child's exit status but does not act on it:
/// toolchain failures speak through the child's own output, and the runner
/// exits 0 for every recognized command.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,

    /// Process exit code
    pub exit_code: i32,

    /// Execution duration
    pub duration: Duration,
}

impl CommandResult {
    /// Create a CommandResult from an exit status
    pub fn from_status(status: ExitStatus, duration: Duration) -> Self {
        Self {
            success: status.success(),
            exit_code: status.code().unwrap_or(-1),
            duration,
        }
    }
}

/// Seam between action dispatch and the operating system.
pub trait Launch {
    /// Launch the described process and block until it terminates.
    fn launch(&self, invocation: &Invocation) -> Result<CommandResult>;
}

/// Real process launcher: stdio fully inherited, environment set from the
/// descriptor's snapshot, no capture or transformation of child output.
pub struct ProcessLauncher;

impl Launch for ProcessLauncher {
    fn launch(&self, invocation: &Invocation) -> Result<CommandResult> {
        let start = Instant::now();

        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        cmd.env_clear();
        cmd.envs(invocation.env.iter().map(|(k, v)| (k, v)));
        if let Some(dir) = &invocation.cwd {
            cmd.current_dir(dir);
        }
        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());

        let status = cmd
            .status()
            .with_context(|| format!("failed to execute {}", invocation.program))?;

        Ok(CommandResult::from_status(status, start.elapsed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::env_snapshot;

    #[cfg(unix)]
    #[test]
    fn test_launch_reports_child_success() {
        let inv = Invocation::new("true", Vec::<String>::new(), env_snapshot());
        let result = ProcessLauncher.launch(&inv).unwrap();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_records_child_failure_without_erroring() {
        // A failing child is not a launch error; the status is recorded only.
        let inv = Invocation::new("false", Vec::<String>::new(), env_snapshot());
        let result = ProcessLauncher.launch(&inv).unwrap();
        assert!(!result.success);
        assert_ne!(result.exit_code, 0);
    }

    #[test]
    fn test_launch_errors_when_program_is_missing() {
        let inv = Invocation::new(
            "gomake-no-such-tool-on-any-path",
            Vec::<String>::new(),
            env_snapshot(),
        );
        let err = ProcessLauncher.launch(&inv).unwrap_err();
        assert!(err.to_string().contains("failed to execute"));
    }
}
