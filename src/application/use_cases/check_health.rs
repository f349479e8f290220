use crate::application::dto::{HealthRequest, HealthResponse, PackageHealth};
use crate::dependency_analysis::domain::ReportMetadata;
use crate::ports::outbound::{ManifestReader, PackageRegistry, ProgressReporter};
use crate::shared::{CancellationFlag, Result};
use chrono::Local;
use futures::future::join_all;

/// CheckHealthUseCase - looks up registry health for every declared dependency
///
/// Lookups run in batches: the members of a batch are issued together and
/// awaited together, then the use case pauses before the next batch. A
/// failing lookup degrades to a not-available record and never aborts the
/// run.
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `REG` - PackageRegistry implementation
/// * `PR` - ProgressReporter implementation
pub struct CheckHealthUseCase<MR, REG, PR> {
    manifest_reader: MR,
    registry: REG,
    progress_reporter: PR,
}

impl<MR, REG, PR> CheckHealthUseCase<MR, REG, PR>
where
    MR: ManifestReader,
    REG: PackageRegistry,
    PR: ProgressReporter,
{
    pub fn new(manifest_reader: MR, registry: REG, progress_reporter: PR) -> Self {
        Self {
            manifest_reader,
            registry,
            progress_reporter,
        }
    }

    /// Executes the health check
    ///
    /// The cancellation flag is polled before each batch; a cancelled run
    /// returns the batches finished so far.
    ///
    /// # Errors
    /// Only manifest errors are returned. Registry failures are absorbed.
    pub async fn execute(
        &self,
        request: HealthRequest,
        cancellation: &CancellationFlag,
    ) -> Result<HealthResponse> {
        let started_at = Local::now();

        self.progress_reporter.report(&format!(
            "📖 Loading pubspec.yaml from: {}",
            request.project_path.display()
        ));
        let dependencies = self
            .manifest_reader
            .read_dependencies(&request.project_path)?;
        let total = dependencies.len();
        self.progress_reporter
            .report(&format!("✅ Detected {} dependency(ies)", total));

        let schedule = request.schedule;
        let batch_count = schedule.batch_count(total);
        let mut packages = Vec::with_capacity(total);
        let mut cancelled = false;

        if total > 0 {
            self.progress_reporter
                .report("🩺 Analyzing dependencies health...");
        }

        for (index, batch) in schedule.batches(dependencies.as_slice()).enumerate() {
            if cancellation.is_cancelled() {
                cancelled = true;
                break;
            }

            let records = join_all(
                batch
                    .iter()
                    .map(|dependency| self.registry.health_of(dependency.name().as_str())),
            )
            .await;

            packages.extend(batch.iter().zip(records).map(|(dependency, health)| {
                PackageHealth {
                    dependency: dependency.clone(),
                    health,
                }
            }));

            self.progress_reporter.report_progress(
                packages.len(),
                total,
                Some(&format!("Analyzing dependencies: {}/{}", packages.len(), total)),
            );
            log::debug!("Finished health batch {}/{}", index + 1, batch_count);

            if index + 1 < batch_count {
                tokio::time::sleep(schedule.delay()).await;
            }
        }

        let unavailable = packages
            .iter()
            .filter(|package| package.health.is_fully_unavailable())
            .count();
        if unavailable > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Health data unavailable for {} package(s)",
                unavailable
            ));
        }

        if cancelled {
            self.progress_reporter.report_completion(&format!(
                "🛑 Health check canceled after {} of {} dependencies",
                packages.len(),
                total
            ));
        } else {
            self.progress_reporter
                .report_completion("🎉 Health check completed successfully!");
        }

        Ok(HealthResponse {
            packages,
            total_dependencies: total,
            cancelled,
            metadata: ReportMetadata::new(request.project_path, started_at, Local::now()),
        })
    }
}
