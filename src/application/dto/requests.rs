use super::PackageManager;
use crate::dependency_analysis::domain::{ScanOptions, UsageMode};
use crate::dependency_analysis::services::BatchSchedule;
use std::path::PathBuf;

/// Request for the dependency health check
#[derive(Debug, Clone)]
pub struct HealthRequest {
    /// Project directory containing pubspec.yaml
    pub project_path: PathBuf,
    pub schedule: BatchSchedule,
}

impl HealthRequest {
    pub fn new(project_path: PathBuf, schedule: BatchSchedule) -> Self {
        Self {
            project_path,
            schedule,
        }
    }
}

/// Request for the outdated-dependencies report
#[derive(Debug, Clone)]
pub struct OutdatedRequest {
    pub project_path: PathBuf,
    pub package_manager: PackageManager,
}

impl OutdatedRequest {
    pub fn new(project_path: PathBuf, package_manager: PackageManager) -> Self {
        Self {
            project_path,
            package_manager,
        }
    }
}

/// Request for a usage scan
#[derive(Debug, Clone)]
pub struct UsageRequest {
    pub project_path: PathBuf,
    pub mode: UsageMode,
    pub scan_options: ScanOptions,
}

impl UsageRequest {
    pub fn new(project_path: PathBuf, mode: UsageMode, scan_options: ScanOptions) -> Self {
        Self {
            project_path,
            mode,
            scan_options,
        }
    }
}
