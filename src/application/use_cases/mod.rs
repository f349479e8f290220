/// Use cases module - one use case per CLI command
mod check_health;
mod check_outdated;
mod find_usage;
mod list_dependencies;

pub use check_health::CheckHealthUseCase;
pub use check_outdated::CheckOutdatedUseCase;
pub use find_usage::FindUsageUseCase;
pub use list_dependencies::ListDependenciesUseCase;
