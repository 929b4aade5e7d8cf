use crate::output_utils;
use crate::Cli;
use std::process::ExitCode;

pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: &Cli) -> CommandResult;
}

/// What a command prints and how the process exits.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}
impl CommandResult {
    /// Print a command's output on success, or the error chain prefixed with
    /// what the command was trying to do.
    pub fn from_output(output: anyhow::Result<String>, action: &str) -> Self {
        match output {
            Ok(stdout) => Self::stdout(stdout),
            Err(err) => Self::stderr(format!(
                "{} Failed to {action}: {err:#}",
                output_utils::RED_X,
            )),
        }
    }

    pub fn stderr(stderr: String) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(stderr),
            stdout: None,
        }
    }

    pub fn stdout(stdout: String) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(stdout),
        }
    }

    pub fn with_exit_code(mut self, exit_code: ExitCode) -> Self {
        self.exit_code = exit_code;
        self
    }
}
