/// Data Transfer Objects for application layer
///
/// DTOs carry requests from the CLI into the use cases and results from the
/// use cases out to the formatters, keeping the domain layer isolated.
mod output_format;
mod package_manager;
mod requests;
mod responses;

pub use output_format::OutputFormat;
pub use package_manager::PackageManager;
pub use requests::{HealthRequest, OutdatedRequest, UsageRequest};
pub use responses::{
    DependencyListResponse, HealthResponse, OutdatedResponse, PackageHealth, UsageResponse,
};
