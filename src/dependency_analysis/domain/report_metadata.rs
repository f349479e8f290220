use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// ReportMetadata value object describing one command run
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    tool_name: String,
    tool_version: String,
    project_path: PathBuf,
    started_at: DateTime<Local>,
    finished_at: DateTime<Local>,
}

impl ReportMetadata {
    pub fn new(
        project_path: PathBuf,
        started_at: DateTime<Local>,
        finished_at: DateTime<Local>,
    ) -> Self {
        Self {
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            project_path,
            started_at,
            finished_at,
        }
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn finished_at(&self) -> DateTime<Local> {
        self.finished_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_report_metadata_new() {
        let started = Local.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let finished = Local.with_ymd_and_hms(2024, 1, 1, 10, 0, 5).unwrap();
        let metadata = ReportMetadata::new(PathBuf::from("/work/app"), started, finished);

        assert_eq!(metadata.tool_name(), "flutter-dep-analyzer");
        assert_eq!(metadata.tool_version(), env!("CARGO_PKG_VERSION"));
        assert_eq!(metadata.project_path(), Path::new("/work/app"));
        assert_eq!(metadata.started_at(), started);
        assert_eq!(metadata.finished_at(), finished);
    }
}
