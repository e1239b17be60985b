//! Process capability port.
//!
//! Implementations run a complete command line and capture its output.
//! The core never spawns processes itself, so the command wrapper and the
//! result classifier can be tested against a scripted runner.

#[cfg(test)]
use mockall::automock;

use crate::domain::ProcessOutput;

/// Runs one command line to completion and captures its streams.
///
/// Implementations block until the process exits. They must not retry, and
/// must report a non-zero exit as a normal `ProcessOutput`; only a failure to
/// start the process is an `Err`.
#[cfg_attr(test, automock)]
pub trait CommandRunnerPort: Send + Sync {
    fn run(&self, command_line: &str) -> std::io::Result<ProcessOutput>;
}
