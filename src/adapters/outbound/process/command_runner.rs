use crate::ports::outbound::{CommandRunner, CommandSpec};
use crate::shared::error::AnalyzerError;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;
use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::process::Command;

const COMMAND_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// TokioCommandRunner adapter for running the Dart/Flutter CLI
///
/// Standard output and error are captured; nothing is inherited from the
/// terminal. The child is killed if the timeout expires.
pub struct TokioCommandRunner {
    timeout: Duration,
}

impl TokioCommandRunner {
    pub fn new() -> Self {
        Self {
            timeout: COMMAND_TIMEOUT,
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for TokioCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

fn command_failed(command: &CommandSpec, details: impl Into<String>) -> AnalyzerError {
    AnalyzerError::CommandFailed {
        command: command.to_string(),
        details: details.into(),
    }
}

/// Error output of a failed run, falling back to stdout when stderr is empty
fn failure_details(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stdout = stdout.trim();
    if stdout.is_empty() {
        format!("exited with {}", output.status)
    } else {
        stdout.to_string()
    }
}

#[async_trait]
impl CommandRunner for TokioCommandRunner {
    async fn run(&self, command: &CommandSpec, working_dir: &Path) -> Result<Vec<String>> {
        log::info!("Running `{}` in {}", command, working_dir.display());

        let child = Command::new(&command.program)
            .args(&command.args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| command_failed(command, format!("could not start process: {}", e)))?;

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => return Err(command_failed(command, e.to_string()).into()),
            Err(_) => {
                return Err(command_failed(
                    command,
                    format!("timed out after {} seconds", self.timeout.as_secs()),
                )
                .into())
            }
        };

        if !output.status.success() {
            return Err(command_failed(command, failure_details(&output)).into());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect())
    }
}
