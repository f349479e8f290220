use crate::dependency_analysis::domain::{
    Dependency, DependencySet, HealthRecord, ReportMetadata, UsageEntry, UsageMode,
};
use serde::Serialize;

/// Declared dependencies of the project
#[derive(Debug, Clone, Serialize)]
pub struct DependencyListResponse {
    pub dependencies: DependencySet,
    pub metadata: ReportMetadata,
}

/// Output of the package manager's outdated report
#[derive(Debug, Clone, Serialize)]
pub struct OutdatedResponse {
    /// Command line that produced the lines
    pub command: String,
    /// Non-empty output lines, verbatim
    pub lines: Vec<String>,
    pub metadata: ReportMetadata,
}

/// Health of one declared dependency
#[derive(Debug, Clone, Serialize)]
pub struct PackageHealth {
    pub dependency: Dependency,
    pub health: HealthRecord,
}

/// Health check result in manifest order
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub packages: Vec<PackageHealth>,
    pub total_dependencies: usize,
    /// True when the run stopped early; `packages` then holds the finished part
    pub cancelled: bool,
    pub metadata: ReportMetadata,
}

/// Usage scan result
///
/// `entries` holds every analyzed dependency regardless of mode; the mode
/// selects what a report shows.
#[derive(Debug, Clone, Serialize)]
pub struct UsageResponse {
    pub mode: UsageMode,
    pub entries: Vec<UsageEntry>,
    pub total_dependencies: usize,
    pub cancelled: bool,
    pub metadata: ReportMetadata,
}

impl UsageResponse {
    /// Entries selected by the mode, in manifest order
    pub fn reported_entries(&self) -> impl Iterator<Item = &UsageEntry> {
        self.entries
            .iter()
            .filter(|entry| self.mode.includes(entry.files.len()))
    }

    pub fn unused_count(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.is_used()).count()
    }

    pub fn used_count(&self) -> usize {
        self.entries.len() - self.unused_count()
    }
}
