use crate::shared::Result;
use async_trait::async_trait;
use std::fmt;
use std::path::Path;

/// An external program invocation, e.g. `dart pub outdated`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// CommandRunner port for invoking the external package manager
///
/// The external tool owns all semantics of its output; the runner only
/// captures it.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs `command` with `working_dir` as current directory
    ///
    /// # Returns
    /// The non-empty lines of standard output, in order
    ///
    /// # Errors
    /// Returns `AnalyzerError::CommandFailed` carrying the captured error
    /// output if the process cannot be started or exits unsuccessfully
    async fn run(&self, command: &CommandSpec, working_dir: &Path) -> Result<Vec<String>>;
}
