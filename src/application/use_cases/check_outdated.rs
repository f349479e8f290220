use crate::application::dto::{OutdatedRequest, OutdatedResponse};
use crate::dependency_analysis::domain::ReportMetadata;
use crate::ports::outbound::{CommandRunner, ManifestReader, ProgressReporter};
use crate::shared::Result;
use chrono::Local;

/// CheckOutdatedUseCase - runs the package manager's outdated report
///
/// The external tool decides what "outdated" means; this use case only
/// checks the project is a Flutter/Dart project and relays the output.
pub struct CheckOutdatedUseCase<MR, CR, PR> {
    manifest_reader: MR,
    command_runner: CR,
    progress_reporter: PR,
}

impl<MR, CR, PR> CheckOutdatedUseCase<MR, CR, PR>
where
    MR: ManifestReader,
    CR: CommandRunner,
    PR: ProgressReporter,
{
    pub fn new(manifest_reader: MR, command_runner: CR, progress_reporter: PR) -> Self {
        Self {
            manifest_reader,
            command_runner,
            progress_reporter,
        }
    }

    /// Executes the outdated check
    ///
    /// # Errors
    /// Fails without running anything when pubspec.yaml is missing, and with
    /// the captured error output when the command fails
    pub async fn execute(&self, request: OutdatedRequest) -> Result<OutdatedResponse> {
        let started_at = Local::now();

        self.manifest_reader
            .locate_manifest(&request.project_path)?;

        let command = request.package_manager.outdated_command();
        self.progress_reporter
            .report(&format!("🔍 Checking for outdated dependencies (`{}`)...", command));

        let lines = self
            .command_runner
            .run(&command, &request.project_path)
            .await?;

        self.progress_reporter.report_completion(&format!(
            "✅ Outdated check complete: {} line(s) of output",
            lines.len()
        ));

        Ok(OutdatedResponse {
            command: command.to_string(),
            lines,
            metadata: ReportMetadata::new(request.project_path, started_at, Local::now()),
        })
    }
}
