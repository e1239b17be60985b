//! Directory tool invocation results.

/// Raw output of a spawned process, as returned by a `CommandRunnerPort`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit status; `-1` when the process was terminated by a signal.
    pub exit_status: i32,
    /// Everything the process wrote to standard output.
    pub stdout: String,
    /// Everything the process wrote to standard error.
    pub stderr: String,
}

impl ProcessOutput {
    /// Create an output with the given status and streams.
    pub fn new(exit_status: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_status,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Successful output with only stdout.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self::new(0, stdout, "")
    }
}

/// Result of one directory tool invocation.
///
/// Produced once per call and consumed within the same reconciliation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Full command line that was executed (e.g. `dscl . -list /Groups gid`).
    pub command_line: String,
    /// Exit status reported by the tool.
    pub exit_status: i32,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl CommandResult {
    /// Attach the command line to a raw process output.
    pub fn from_output(command_line: impl Into<String>, output: ProcessOutput) -> Self {
        Self {
            command_line: command_line.into(),
            exit_status: output.exit_status,
            stdout: output.stdout,
            stderr: output.stderr,
        }
    }

    /// Whether the tool exited with status 0.
    pub const fn succeeded(&self) -> bool {
        self.exit_status == 0
    }

    /// Text worth showing in an error: stderr if present, stdout otherwise.
    pub fn diagnostic(&self) -> &str {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            self.stdout.trim()
        } else {
            stderr
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_output_keeps_streams() {
        let result = CommandResult::from_output(
            "dscl . -cmd /Path args",
            ProcessOutput::new(0, "\n", ""),
        );
        assert_eq!(result.command_line, "dscl . -cmd /Path args");
        assert_eq!(result.stdout, "\n");
        assert_eq!(result.stderr, "");
        assert!(result.succeeded());
    }

    #[test]
    fn test_diagnostic_prefers_stderr() {
        let result = CommandResult::from_output("x", ProcessOutput::new(1, "out", " err \n"));
        assert_eq!(result.diagnostic(), "err");

        let result = CommandResult::from_output("x", ProcessOutput::new(1, "out\n", "  "));
        assert_eq!(result.diagnostic(), "out");
    }
}
