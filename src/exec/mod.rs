//! External process invocation
//!
//! The dispatcher never talks to `std::process` directly: actions build an
//! [`Invocation`] descriptor and hand it to a [`Launch`] implementation, so
//! tests can assert on constructed command lines without running a toolchain.

mod invocation;
mod subprocess;

pub use invocation::{env_snapshot, EnvSnapshot, Invocation};
pub use subprocess::{CommandResult, Launch, ProcessLauncher};
