//! CLI argument parsing using clap derive macros

use anyhow::Result;
use clap::Parser;

use crate::action::{usage, Action};
use crate::error::GomakeError;
use crate::exec::{env_snapshot, Launch, ProcessLauncher};
use crate::utils::terminal;

/// gomake - developer command runner for the go-infra project
///
/// Dispatches one fixed verb to its toolchain invocation. No flags, no
/// configuration: the verb is the whole surface.
#[derive(Parser, Debug)]
#[command(name = "gomake")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Command to run: test, build, run, lint or help
    pub command: Option<String>,
}

impl Cli {
    /// Execute the selected action against the real process launcher.
    pub fn execute(self) -> Result<()> {
        self.dispatch(&ProcessLauncher)
    }

    /// Map the command token to an action and drive the launcher.
    ///
    /// Recognized commands return `Ok` no matter how the child exits; the
    /// child's output is the only failure signal. An unknown token prints
    /// the usage banner and is the one error this method raises.
    pub fn dispatch(self, launcher: &dyn Launch) -> Result<()> {
        let action = match self.command.as_deref() {
            None => Action::Help,
            Some(token) => match Action::parse(token) {
                Some(action) => action,
                None => {
                    println!("{}", usage());
                    return Err(GomakeError::unknown_command(token).into());
                }
            },
        };

        if let Some(status) = action.status() {
            terminal::print_status(status);
        }

        match action.invocation(env_snapshot()) {
            Some(invocation) => {
                launcher.launch(&invocation)?;
            }
            None => println!("{}", usage()),
        }

        Ok(())
    }
}
