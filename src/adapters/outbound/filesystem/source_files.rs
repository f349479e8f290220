use crate::dependency_analysis::domain::ScanOptions;
use crate::ports::outbound::SourceFileProvider;
use crate::shared::error::AnalyzerError;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// FileSystemSourceProvider adapter for walking a project's source tree
///
/// Symbolic links are not followed. Entries that cannot be read while
/// walking are skipped with a debug log.
pub struct FileSystemSourceProvider;

impl FileSystemSourceProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemSourceProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn is_excluded(entry: &DirEntry, options: &ScanOptions) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && options.is_excluded_dir(&entry.file_name().to_string_lossy())
}

fn has_extension(entry: &DirEntry, extension: &str) -> bool {
    entry.file_type().is_file()
        && entry.path().extension().and_then(|ext| ext.to_str()) == Some(extension)
}

/// Walks `root` on the calling thread
fn walk_source_files(root: &Path, options: &ScanOptions) -> Vec<PathBuf> {
    let files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_excluded(entry, options))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::debug!("Could not walk directory: {err:#}");
                None
            }
        })
        .filter(|entry| has_extension(entry, &options.extension))
        .take(options.max_files)
        .map(DirEntry::into_path)
        .collect();

    if files.len() == options.max_files {
        log::info!(
            "Source scan reached the limit of {} files under {}",
            options.max_files,
            root.display()
        );
    }
    files
}

#[async_trait]
impl SourceFileProvider for FileSystemSourceProvider {
    async fn list_source_files(
        &self,
        project_path: &Path,
        options: &ScanOptions,
    ) -> Result<Vec<PathBuf>> {
        let root = project_path.to_path_buf();
        let options = options.clone();
        let files = tokio::task::spawn_blocking(move || walk_source_files(&root, &options))
            .await
            .map_err(|e| anyhow::anyhow!("Source scan task failed: {}", e))?;
        Ok(files)
    }

    async fn read_source(&self, path: &Path) -> Result<String> {
        tokio::fs::read_to_string(path).await.map_err(|e| {
            AnalyzerError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
