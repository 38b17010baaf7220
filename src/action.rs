//! The closed set of runner actions and their command templates

use crate::exec::{EnvSnapshot, Invocation};
use crate::layout;

/// One of the five fixed actions. The set is closed: extending the runner
/// means adding a variant here and a template below, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Test,
    Build,
    Run,
    Lint,
    Help,
}

impl Action {
    /// Map a command token to an action. Anything outside the fixed set is
    /// a usage error, signalled by `None`.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "test" => Some(Self::Test),
            "build" => Some(Self::Build),
            "run" => Some(Self::Run),
            "lint" => Some(Self::Lint),
            "help" => Some(Self::Help),
            _ => None,
        }
    }

    /// Status line printed before launching the child. `Help` prints the
    /// usage banner instead.
    pub fn status(&self) -> Option<&'static str> {
        match self {
            Self::Test => Some("Testing..."),
            Self::Build => Some("Building the binary..."),
            Self::Run => Some("Running the binary..."),
            Self::Lint => Some("Linter..."),
            Self::Help => None,
        }
    }

    /// The fixed command template for this action, bound to the given
    /// environment snapshot. `Help` launches nothing.
    pub fn invocation(&self, env: EnvSnapshot) -> Option<Invocation> {
        match self {
            Self::Test => Some(Invocation::new(
                layout::GO,
                ["test", "-timeout=60s", "-count=1", "./..."],
                env,
            )),
            Self::Build => Some(Invocation::new(
                layout::GO,
                ["build", "-C", layout::ENTRYPOINT_DIR, "-o", layout::DIST_OUTPUT],
                env,
            )),
            Self::Run => Some(Invocation::new(
                layout::BINARY,
                ["-config", layout::CONFIG_DIR],
                env,
            )),
            Self::Lint => Some(Invocation::new(layout::LINTER, ["run"], env)),
            Self::Help => None,
        }
    }
}

/// The fixed usage banner, shared by `help`, the no-argument case, and the
/// unknown-command error path.
pub fn usage() -> &'static str {
    "Usage:\n\
     \x20 gomake test     - Run tests\n\
     \x20 gomake build    - Build the binary\n\
     \x20 gomake run      - Run the built binary\n\
     \x20 gomake lint     - Run the linter\n\
     \x20 gomake help     - Display this help message"
}
