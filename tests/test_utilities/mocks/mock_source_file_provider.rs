use async_trait::async_trait;
use flutter_dep_analyzer::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock SourceFileProvider over an in-memory source tree
///
/// Paths are relative to the project root given to `list_source_files`.
#[derive(Clone)]
pub struct MockSourceFileProvider {
    files: Vec<(PathBuf, Option<String>)>,
    cancel_on_list: Option<(usize, CancellationFlag)>,
    pub list_calls: Arc<AtomicUsize>,
}

impl MockSourceFileProvider {
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            cancel_on_list: None,
            list_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files
            .push((PathBuf::from(path), Some(content.to_string())));
        self
    }

    /// A file that is listed but cannot be read
    pub fn with_unreadable_file(mut self, path: &str) -> Self {
        self.files.push((PathBuf::from(path), None));
        self
    }

    /// Cancels `flag` while the `nth` dependency (1-based) is being scanned
    pub fn cancel_during_scan(mut self, nth: usize, flag: CancellationFlag) -> Self {
        self.cancel_on_list = Some((nth, flag));
        self
    }

    pub fn list_count(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SourceFileProvider for MockSourceFileProvider {
    async fn list_source_files(
        &self,
        project_path: &Path,
        options: &ScanOptions,
    ) -> Result<Vec<PathBuf>> {
        let call = self.list_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some((nth, flag)) = &self.cancel_on_list {
            if call == *nth {
                flag.cancel();
            }
        }

        Ok(self
            .files
            .iter()
            .map(|(path, _)| project_path.join(path))
            .take(options.max_files)
            .collect())
    }

    async fn read_source(&self, path: &Path) -> Result<String> {
        self.files
            .iter()
            .find(|(relative, _)| path.ends_with(relative))
            .and_then(|(_, content)| content.clone())
            .ok_or_else(|| anyhow::anyhow!("Mock read failure: {}", path.display()))
    }
}
