/// Mock implementations for testing
mod mock_command_runner;
mod mock_manifest_reader;
mod mock_package_registry;
mod mock_progress_reporter;
mod mock_source_file_provider;

pub use mock_command_runner::MockCommandRunner;
pub use mock_manifest_reader::MockManifestReader;
pub use mock_package_registry::MockPackageRegistry;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_source_file_provider::MockSourceFileProvider;
