use crate::application::dto::{UsageRequest, UsageResponse};
use crate::dependency_analysis::domain::{PackageName, ReportMetadata, ScanOptions, UsageEntry};
use crate::dependency_analysis::services::ImportMatcher;
use crate::ports::outbound::{ManifestReader, ProgressReporter, SourceFileProvider};
use crate::shared::{CancellationFlag, Result};
use chrono::Local;
use futures::stream::{self, StreamExt};
use std::path::{Component, Path};

/// Source files read concurrently while scanning for one dependency
const MAX_CONCURRENT_READS: usize = 32;

/// FindUsageUseCase - finds which source files import each declared dependency
///
/// Every dependency gets its own pass over the source tree. The
/// cancellation flag is polled between dependencies; the pass in progress
/// always finishes.
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `SF` - SourceFileProvider implementation
/// * `PR` - ProgressReporter implementation
pub struct FindUsageUseCase<MR, SF, PR> {
    manifest_reader: MR,
    source_files: SF,
    progress_reporter: PR,
}

impl<MR, SF, PR> FindUsageUseCase<MR, SF, PR>
where
    MR: ManifestReader,
    SF: SourceFileProvider,
    PR: ProgressReporter,
{
    pub fn new(manifest_reader: MR, source_files: SF, progress_reporter: PR) -> Self {
        Self {
            manifest_reader,
            source_files,
            progress_reporter,
        }
    }

    /// Executes the usage scan for all declared dependencies
    ///
    /// # Errors
    /// Only manifest errors are returned. A dependency whose scan fails is
    /// reported and left out of the entries.
    pub async fn execute(
        &self,
        request: UsageRequest,
        cancellation: &CancellationFlag,
    ) -> Result<UsageResponse> {
        let started_at = Local::now();

        let dependencies = self
            .manifest_reader
            .read_dependencies(&request.project_path)?;
        let total = dependencies.len();

        if dependencies.is_empty() {
            self.progress_reporter
                .report("No dependencies found in pubspec.yaml.");
        } else {
            self.progress_reporter.report(&format!(
                "🔍 Analyzing {} dependency(ies) ({})...",
                total,
                request.mode.label()
            ));
        }

        let mut entries = Vec::with_capacity(total);
        let mut cancelled = false;

        for (index, dependency) in dependencies.iter().enumerate() {
            if cancellation.is_cancelled() {
                cancelled = true;
                break;
            }

            self.progress_reporter.report_progress(
                index,
                total,
                Some(&format!("Analyzing {}...", dependency.name())),
            );

            match self
                .find_dependency_usage(
                    &request.project_path,
                    dependency.name(),
                    &request.scan_options,
                )
                .await
            {
                Ok(files) => {
                    log::debug!("{} found in {} file(s)", dependency.name(), files.len());
                    entries.push(UsageEntry::new(dependency.clone(), files));
                }
                Err(e) => {
                    self.progress_reporter.report_error(&format!(
                        "❌ Error analyzing {}: {:#}",
                        dependency.name(),
                        e
                    ));
                }
            }
        }

        if cancelled {
            self.progress_reporter
                .report_completion("Dependency analysis was canceled.");
        } else {
            self.progress_reporter.report_progress(total, total, None);
            self.progress_reporter.report_completion("✨ Analysis Complete!");
        }

        Ok(UsageResponse {
            mode: request.mode,
            entries,
            total_dependencies: total,
            cancelled,
            metadata: ReportMetadata::new(request.project_path, started_at, Local::now()),
        })
    }

    /// Lists the source files that import `dependency`
    ///
    /// # Returns
    /// Paths relative to `project_path` with `/` separators, in scan order.
    /// Files that cannot be read are logged and skipped.
    pub async fn find_dependency_usage(
        &self,
        project_path: &Path,
        dependency: &PackageName,
        options: &ScanOptions,
    ) -> Result<Vec<String>> {
        let matcher = ImportMatcher::new(dependency, options.strategy)?;
        let files = self
            .source_files
            .list_source_files(project_path, options)
            .await?;

        let matcher = &matcher;
        let matches: Vec<Option<String>> = stream::iter(files.iter())
            .map(|file| async move {
                match self.source_files.read_source(file).await {
                    Ok(text) => matcher
                        .is_match(&text)
                        .then(|| relative_display_path(project_path, file)),
                    Err(e) => {
                        log::warn!("⚠️ Error reading file {}: {:#}", file.display(), e);
                        None
                    }
                }
            })
            .buffered(MAX_CONCURRENT_READS)
            .collect()
            .await;

        Ok(matches.into_iter().flatten().collect())
    }
}

/// `file` relative to `root`, joined with `/` on every platform
fn relative_display_path(root: &Path, file: &Path) -> String {
    let relative = file.strip_prefix(root).unwrap_or(file);
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_relative_display_path() {
        let root = PathBuf::from("/work/app");
        let file = root.join("lib").join("src").join("api.dart");
        assert_eq!(relative_display_path(&root, &file), "lib/src/api.dart");
    }

    #[test]
    fn test_relative_display_path_outside_root() {
        let root = PathBuf::from("/work/app");
        let file = PathBuf::from("/elsewhere/main.dart");
        assert_eq!(relative_display_path(&root, &file), "elsewhere/main.dart");
    }
}
