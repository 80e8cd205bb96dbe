use crate::output_utils;
use std::process::ExitCode;

/// What a command wants printed, and how the process should exit.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    pub fn failure(err: &anyhow::Error) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{} {err:#}", output_utils::RED_X)),
            stdout: None,
        }
    }

    pub fn success(stdout: String) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: (!stdout.is_empty()).then_some(stdout),
        }
    }

    pub fn emit(self) -> ExitCode {
        if let Some(stdout) = self.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = self.stderr {
            eprintln!("{stderr}");
        }
        self.exit_code
    }
}
impl From<anyhow::Result<String>> for CommandResult {
    fn from(result: anyhow::Result<String>) -> Self {
        match result {
            Ok(stdout) => Self::success(stdout),
            Err(err) => Self::failure(&err),
        }
    }
}
