//! gomake - fixed-verb developer command runner for the go-infra project
//!
//! One binary replacing the project's build script: a single positional
//! token selects one of five fixed actions (`test`, `build`, `run`, `lint`,
//! `help`), each bound to exactly one external toolchain invocation.
//!
//! ## Architecture
//!
//! ```text
//! gomake <verb> → action template → one child process (go / golangci-lint / dist binary)
//! ```

mod action;
mod cli;
mod error;
mod exec;
mod layout;
mod utils;

use clap::Parser;

use cli::Cli;
use utils::terminal;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = cli.execute() {
        terminal::print_error(&format!("{err:#}"));
        std::process::exit(1);
    }
}
