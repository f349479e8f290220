use crate::application::dto::{
    DependencyListResponse, HealthResponse, OutdatedResponse, UsageResponse,
};
use crate::shared::Result;

/// ReportFormatter port for rendering command results
///
/// One method per command; implementations decide the representation
/// (framed text for an output channel, JSON, ...).
pub trait ReportFormatter {
    fn format_dependencies(&self, response: &DependencyListResponse) -> Result<String>;

    fn format_outdated(&self, response: &OutdatedResponse) -> Result<String>;

    fn format_health(&self, response: &HealthResponse) -> Result<String>;

    /// Per-dependency usage report filtered by the response's mode
    fn format_usage(&self, response: &UsageResponse) -> Result<String>;

    /// One used/unused line per dependency
    fn format_summary(&self, response: &UsageResponse) -> Result<String>;
}
