//! Command wrapper for the directory tool.

use std::sync::Arc;

use tracing::debug;

use super::classify::classify;
use crate::domain::CommandResult;
use crate::ports::{CommandRunnerPort, GroupError};
use crate::settings::ProviderSettings;

/// Builds `<tool> <node> -<args...>` command lines and runs them through the
/// injected runner.
///
/// Holds no state besides its configuration; every call is one external
/// invocation with no retries.
#[derive(Clone)]
pub struct Dscl {
    runner: Arc<dyn CommandRunnerPort>,
    tool: String,
    node: String,
}

impl Dscl {
    pub fn new(runner: Arc<dyn CommandRunnerPort>, settings: &ProviderSettings) -> Self {
        Self {
            runner,
            tool: settings.tool.clone(),
            node: settings.node.clone(),
        }
    }

    /// Full command line for the given arguments.
    ///
    /// `["cmd", "/Path", "arg1"]` becomes `dscl . -cmd /Path arg1`.
    pub fn command_line<I, S>(&self, args: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = args
            .into_iter()
            .map(|arg| arg.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join(" ");
        format!("{} {} -{}", self.tool, self.node, joined)
    }

    /// Run the tool once and capture the result.
    ///
    /// A non-zero exit is not an error at this layer; only failing to start
    /// the process is.
    pub fn execute<I, S>(&self, args: I) -> Result<CommandResult, GroupError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let command_line = self.command_line(args);
        debug!(command = %command_line, "running directory tool");

        let output = self
            .runner
            .run(&command_line)
            .map_err(|source| GroupError::Spawn {
                command: command_line.clone(),
                source,
            })?;

        debug!(
            command = %command_line,
            status = output.exit_status,
            "directory tool finished"
        );
        Ok(CommandResult::from_output(command_line, output))
    }

    /// Run `command` (e.g. `create /Groups/aj PrimaryGroupID 50`) and return
    /// its stdout, or fail according to the classification rules.
    pub fn safe_execute(&self, command: &str) -> Result<String, GroupError> {
        let result = self.execute([command])?;
        let is_delete = command.split_whitespace().next() == Some("delete");
        classify(is_delete, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProcessOutput;
    use crate::ports::MockCommandRunnerPort;

    fn dscl_with(runner: MockCommandRunnerPort) -> Dscl {
        Dscl::new(Arc::new(runner), &ProviderSettings::default())
    }

    #[test]
    fn test_execute_appends_arguments_to_dscl_command() {
        let mut runner = MockCommandRunnerPort::new();
        runner
            .expect_run()
            .withf(|line: &str| line == "dscl . -cmd /Path arg1 arg2")
            .times(1)
            .returning(|_| Ok(ProcessOutput::ok("\n")));

        let dscl = dscl_with(runner);
        dscl.execute(["cmd", "/Path", "arg1", "arg2"]).unwrap();
    }

    #[test]
    fn test_execute_returns_command_status_and_streams() {
        let mut runner = MockCommandRunnerPort::new();
        runner
            .expect_run()
            .returning(|_| Ok(ProcessOutput::new(0, "\n", "")));

        let result = dscl_with(runner).execute(["cmd /Path args"]).unwrap();
        assert_eq!(
            result,
            CommandResult {
                command_line: "dscl . -cmd /Path args".to_string(),
                exit_status: 0,
                stdout: "\n".to_string(),
                stderr: String::new(),
            }
        );
    }

    #[test]
    fn test_execute_uses_configured_tool_and_node() {
        let settings = ProviderSettings {
            tool: "/usr/bin/dscl".into(),
            node: "/Local/Default".into(),
            ..ProviderSettings::default()
        };
        let dscl = Dscl::new(Arc::new(MockCommandRunnerPort::new()), &settings);
        assert_eq!(
            dscl.command_line(["list", "/Groups"]),
            "/usr/bin/dscl /Local/Default -list /Groups"
        );
    }

    #[test]
    fn test_execute_maps_spawn_failure() {
        let mut runner = MockCommandRunnerPort::new();
        runner.expect_run().returning(|_| {
            Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no such file",
            ))
        });

        let err = dscl_with(runner).execute(["list /Groups"]).unwrap_err();
        assert!(matches!(err, GroupError::Spawn { ref command, .. } if command == "dscl . -list /Groups"));
    }

    #[test]
    fn test_safe_execute_runs_dscl_with_supplied_command() {
        let mut runner = MockCommandRunnerPort::new();
        runner
            .expect_run()
            .withf(|line: &str| line == "dscl . -cmd /Path args")
            .times(1)
            .returning(|_| Ok(ProcessOutput::new(0, "stdout", "stderr")));

        let stdout = dscl_with(runner).safe_execute("cmd /Path args").unwrap();
        assert_eq!(stdout, "stdout");
    }

    #[test]
    fn test_safe_execute_delete_with_non_zero_status_returns_empty() {
        let mut runner = MockCommandRunnerPort::new();
        runner
            .expect_run()
            .returning(|_| Ok(ProcessOutput::new(1, "stdout", "stderr")));

        let stdout = dscl_with(runner).safe_execute("delete /Path args").unwrap();
        assert_eq!(stdout, "");
    }

    #[test]
    fn test_safe_execute_other_command_with_non_zero_status_fails() {
        let mut runner = MockCommandRunnerPort::new();
        runner
            .expect_run()
            .returning(|_| Ok(ProcessOutput::new(1, "stdout", "stderr")));

        let err = dscl_with(runner)
            .safe_execute("cmd /Path arguments")
            .unwrap_err();
        assert!(matches!(err, GroupError::CommandFailed { status: 1, .. }));
    }

    #[test]
    fn test_safe_execute_delete_only_matches_first_token() {
        let mut runner = MockCommandRunnerPort::new();
        runner
            .expect_run()
            .returning(|_| Ok(ProcessOutput::new(1, "", "boom")));

        let result = dscl_with(runner).safe_execute("create /Groups/delete");
        assert!(result.is_err());
    }

    #[test]
    fn test_safe_execute_no_such_key_fails_with_zero_status() {
        let mut runner = MockCommandRunnerPort::new();
        runner
            .expect_run()
            .returning(|_| Ok(ProcessOutput::new(0, "No such key: ", "stderr")));

        let err = dscl_with(runner)
            .safe_execute("cmd /Path arguments")
            .unwrap_err();
        assert!(matches!(err, GroupError::UnexpectedKey { .. }));
    }
}
