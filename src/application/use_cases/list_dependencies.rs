use crate::application::dto::DependencyListResponse;
use crate::dependency_analysis::domain::ReportMetadata;
use crate::ports::outbound::{ManifestReader, ProgressReporter};
use crate::shared::Result;
use chrono::Local;
use std::path::Path;

/// ListDependenciesUseCase - reads the declared dependencies of a project
pub struct ListDependenciesUseCase<MR, PR> {
    manifest_reader: MR,
    progress_reporter: PR,
}

impl<MR, PR> ListDependenciesUseCase<MR, PR>
where
    MR: ManifestReader,
    PR: ProgressReporter,
{
    pub fn new(manifest_reader: MR, progress_reporter: PR) -> Self {
        Self {
            manifest_reader,
            progress_reporter,
        }
    }

    pub fn execute(&self, project_path: &Path) -> Result<DependencyListResponse> {
        let started_at = Local::now();
        self.progress_reporter.report(&format!(
            "📖 Loading pubspec.yaml from: {}",
            project_path.display()
        ));

        let dependencies = self.manifest_reader.read_dependencies(project_path)?;

        self.progress_reporter
            .report(&format!("✅ Detected {} dependency(ies)", dependencies.len()));

        Ok(DependencyListResponse {
            dependencies,
            metadata: ReportMetadata::new(project_path.to_path_buf(), started_at, Local::now()),
        })
    }
}
