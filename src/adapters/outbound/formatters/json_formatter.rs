use crate::application::dto::{
    DependencyListResponse, HealthResponse, OutdatedResponse, UsageResponse,
};
use crate::dependency_analysis::domain::{ReportMetadata, UsageEntry, UsageMode};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use anyhow::Context;
use serde::Serialize;

/// JsonFormatter adapter for machine-readable reports
///
/// Responses are serialized as they are, except usage reports which carry
/// only the entries the mode selects.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn to_json<T: Serialize>(value: &T) -> Result<String> {
        let mut json = serde_json::to_string_pretty(value).context("Failed to serialize report")?;
        json.push('\n');
        Ok(json)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct UsageReport<'a> {
    mode: UsageMode,
    total_dependencies: usize,
    cancelled: bool,
    dependencies: Vec<&'a UsageEntry>,
    metadata: &'a ReportMetadata,
}

#[derive(Serialize)]
struct SummaryLine<'a> {
    name: &'a str,
    constraint: &'a str,
    used: bool,
    file_count: usize,
}

#[derive(Serialize)]
struct SummaryReport<'a> {
    used: usize,
    unused: usize,
    cancelled: bool,
    dependencies: Vec<SummaryLine<'a>>,
    metadata: &'a ReportMetadata,
}

impl ReportFormatter for JsonFormatter {
    fn format_dependencies(&self, response: &DependencyListResponse) -> Result<String> {
        Self::to_json(response)
    }

    fn format_outdated(&self, response: &OutdatedResponse) -> Result<String> {
        Self::to_json(response)
    }

    fn format_health(&self, response: &HealthResponse) -> Result<String> {
        Self::to_json(response)
    }

    fn format_usage(&self, response: &UsageResponse) -> Result<String> {
        Self::to_json(&UsageReport {
            mode: response.mode,
            total_dependencies: response.total_dependencies,
            cancelled: response.cancelled,
            dependencies: response.reported_entries().collect(),
            metadata: &response.metadata,
        })
    }

    fn format_summary(&self, response: &UsageResponse) -> Result<String> {
        Self::to_json(&SummaryReport {
            used: response.used_count(),
            unused: response.unused_count(),
            cancelled: response.cancelled,
            dependencies: response
                .entries
                .iter()
                .map(|entry| SummaryLine {
                    name: entry.dependency.name().as_str(),
                    constraint: entry.dependency.constraint(),
                    used: entry.is_used(),
                    file_count: entry.files.len(),
                })
                .collect(),
            metadata: &response.metadata,
        })
    }
}
