use async_trait::async_trait;
use flutter_dep_analyzer::ports::outbound::CommandSpec;
use flutter_dep_analyzer::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock CommandRunner returning canned output
#[derive(Clone)]
pub struct MockCommandRunner {
    output: Vec<String>,
    should_fail: bool,
    pub invocations: Arc<Mutex<Vec<(CommandSpec, PathBuf)>>>,
}

impl MockCommandRunner {
    pub fn new(output: &[&str]) -> Self {
        Self {
            output: output.iter().map(|line| line.to_string()).collect(),
            should_fail: false,
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            output: Vec::new(),
            should_fail: true,
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn invocations(&self) -> Vec<(CommandSpec, PathBuf)> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for MockCommandRunner {
    async fn run(&self, command: &CommandSpec, working_dir: &Path) -> Result<Vec<String>> {
        self.invocations
            .lock()
            .unwrap()
            .push((command.clone(), working_dir.to_path_buf()));

        if self.should_fail {
            anyhow::bail!("Mock command failure: {}", command);
        }
        Ok(self.output.clone())
    }
}
