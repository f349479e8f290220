/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, processes, console).
pub mod command_runner;
pub mod manifest_reader;
pub mod output_presenter;
pub mod package_registry;
pub mod progress_reporter;
pub mod report_formatter;
pub mod source_file_provider;

pub use command_runner::{CommandRunner, CommandSpec};
pub use manifest_reader::{ManifestReader, MANIFEST_FILE_NAME};
pub use output_presenter::OutputPresenter;
pub use package_registry::PackageRegistry;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use source_file_provider::SourceFileProvider;
