pub mod dependency;
pub mod health;
pub mod report_metadata;
pub mod scan_options;
pub mod usage;

pub use dependency::{Dependency, DependencySet, PackageName};
pub use health::{HealthRecord, Metric, ScoreSnapshot, NOT_AVAILABLE};
pub use report_metadata::ReportMetadata;
pub use scan_options::{MatchStrategy, ScanOptions};
pub use usage::{UsageEntry, UsageMode};
