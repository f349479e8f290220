use crate::dependency_analysis::domain::ScanOptions;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// SourceFileProvider port for enumerating and reading project source files
#[async_trait]
pub trait SourceFileProvider: Send + Sync {
    /// Lists source files under `project_path`
    ///
    /// # Returns
    /// At most `options.max_files` paths with the configured extension, in a
    /// stable order, skipping directories named in `options.exclude_dirs`
    async fn list_source_files(
        &self,
        project_path: &Path,
        options: &ScanOptions,
    ) -> Result<Vec<PathBuf>>;

    /// Reads one source file as UTF-8 text
    async fn read_source(&self, path: &Path) -> Result<String>;
}
