//! Result classification for directory tool output.
//!
//! The tool has no structured output and exits 0 for some failures, so all
//! text and exit-status heuristics live here. Callers only see stdout or a
//! `GroupError`.

use crate::domain::CommandResult;
use crate::ports::GroupError;

/// Printed on stdout when an attribute is missing; the exit status may be 0.
pub const NO_SUCH_KEY: &str = "No such key";

/// Printed when the record itself does not exist.
pub const RECORD_NOT_FOUND: &str = "eDSRecordNotFound";

/// Classify one invocation.
///
/// Order matters: "No such key" always fails, then a non-zero exit is
/// tolerated only for deletes, then stdout is returned untouched.
pub fn classify(is_delete: bool, result: CommandResult) -> Result<String, GroupError> {
    if result.stdout.contains(NO_SUCH_KEY) {
        return Err(GroupError::UnexpectedKey {
            output: result.stdout.trim().to_string(),
            command: result.command_line,
        });
    }

    if !result.succeeded() {
        if is_delete {
            return Ok(String::new());
        }
        return Err(GroupError::CommandFailed {
            output: result.diagnostic().to_string(),
            status: result.exit_status,
            command: result.command_line,
        });
    }

    Ok(result.stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProcessOutput;

    fn result(status: i32, stdout: &str, stderr: &str) -> CommandResult {
        CommandResult::from_output("dscl . -cmd", ProcessOutput::new(status, stdout, stderr))
    }

    #[test]
    fn test_success_returns_stdout_unchanged() {
        let out = classify(false, result(0, "\naj 200\n", "")).unwrap();
        assert_eq!(out, "\naj 200\n");
    }

    #[test]
    fn test_no_such_key_beats_delete_tolerance() {
        let err = classify(true, result(1, "No such key: GroupMembers", "")).unwrap_err();
        assert!(matches!(err, GroupError::UnexpectedKey { .. }));
    }

    #[test]
    fn test_no_such_key_is_case_sensitive() {
        assert!(classify(false, result(0, "no such key", "")).is_ok());
    }

    #[test]
    fn test_failure_carries_stderr() {
        let err = classify(false, result(56, "", "DS Error: -14136\n")).unwrap_err();
        match err {
            GroupError::CommandFailed {
                command,
                status,
                output,
            } => {
                assert_eq!(command, "dscl . -cmd");
                assert_eq!(status, 56);
                assert_eq!(output, "DS Error: -14136");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_delete_failure_is_success() {
        assert_eq!(classify(true, result(56, "", "gone")).unwrap(), "");
    }
}
