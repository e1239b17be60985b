//! Shell-backed command runner.

use std::path::PathBuf;
use std::process::Command;

use dsgroup_core::{CommandRunnerPort, ProcessOutput};
use tracing::trace;

/// Shell used to interpret command lines.
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Runs each command line with `sh -c`, so quoted arguments such as `''`
/// reach the tool as empty strings.
///
/// Blocks until the process exits. There is no timeout.
#[derive(Debug, Clone)]
pub struct ShellCommandRunner {
    shell: PathBuf,
}

impl ShellCommandRunner {
    /// Create a runner using `/bin/sh`.
    pub fn new() -> Self {
        Self::with_shell(DEFAULT_SHELL)
    }

    /// Create a runner using a different shell.
    pub fn with_shell(shell: impl Into<PathBuf>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl Default for ShellCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunnerPort for ShellCommandRunner {
    fn run(&self, command_line: &str) -> std::io::Result<ProcessOutput> {
        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(command_line)
            .output()?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        // Terminated by a signal
        let exit_status = output.status.code().unwrap_or(-1);

        trace!(command = command_line, exit_status, %stdout, %stderr, "process output");
        Ok(ProcessOutput {
            exit_status,
            stdout,
            stderr,
        })
    }
}
