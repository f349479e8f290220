use crate::application::dto::{
    DependencyListResponse, HealthResponse, OutdatedResponse, UsageResponse,
};
use crate::dependency_analysis::domain::ReportMetadata;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use chrono::{DateTime, Local};

/// Width of the report frame rules
const FRAME_RULE_WIDTH: usize = 50;

/// Width of the rule around each package in the health report
const PACKAGE_RULE_WIDTH: usize = 41;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const NO_DEPENDENCIES_MESSAGE: &str = "No dependencies found in pubspec.yaml.";
const CANCELLED_MESSAGE: &str = "Dependency analysis was canceled.";

/// TextFormatter adapter for the framed, human-readable reports
///
/// Every report shares the same frame: a title and start time header, the
/// command-specific body, then a completion footer with the finish time.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Wraps `body` lines in the report frame
    pub fn frame(title: &str, metadata: &ReportMetadata, body: &[String]) -> String {
        let rule = "=".repeat(FRAME_RULE_WIDTH);
        let mut output = String::new();

        output.push_str(&format!("🚀 {}\n", title));
        output.push_str(&format!("{}\n", rule));
        output.push_str(&format!("📅 {}\n", timestamp(metadata.started_at())));
        output.push_str(&format!("{}\n", rule));

        for line in body {
            output.push_str(line);
            output.push('\n');
        }

        output.push('\n');
        output.push_str(&format!("{}\n", rule));
        output.push_str("✨ Analysis Complete!\n");
        output.push_str(&format!(
            "⏱️ Finished at: {}\n",
            timestamp(metadata.finished_at())
        ));
        output.push_str(&format!("{}\n", rule));
        output
    }

    /// Usage report whose body is a rendered dependency tree
    pub fn tree_report(response: &UsageResponse, tree_lines: Vec<String>) -> String {
        let body = if response.total_dependencies == 0 {
            vec![NO_DEPENDENCIES_MESSAGE.to_string()]
        } else {
            let mut body = vec![format!("{}:", response.mode.label()), String::new()];
            body.extend(tree_lines);
            if response.cancelled {
                body.push(String::new());
                body.push(CANCELLED_MESSAGE.to_string());
            }
            body
        };
        Self::frame("Dependency Usage Insights", &response.metadata, &body)
    }

    fn health_body(response: &HealthResponse) -> Vec<String> {
        if response.total_dependencies == 0 {
            return vec![NO_DEPENDENCIES_MESSAGE.to_string()];
        }

        let rule = "-".repeat(PACKAGE_RULE_WIDTH);
        let mut body = Vec::new();
        for package in &response.packages {
            body.push(format!(
                "Package: {} (Version: {})",
                package.dependency.name(),
                package.dependency.constraint()
            ));
            body.push(rule.clone());
            for (label, metric) in package.health.metrics() {
                body.push(format!("{}: {}", label, metric));
            }
            body.push(rule.clone());
            body.push(String::new());
        }

        if response.cancelled {
            body.push(CANCELLED_MESSAGE.to_string());
            body.push(format!(
                "Checked {} of {} dependencies.",
                response.packages.len(),
                response.total_dependencies
            ));
        }
        body
    }

    fn usage_body(response: &UsageResponse) -> Vec<String> {
        if response.total_dependencies == 0 {
            return vec![NO_DEPENDENCIES_MESSAGE.to_string()];
        }

        let mut body = vec![format!("{}:", response.mode.label()), String::new()];
        for entry in response.reported_entries() {
            body.push(format!("📦 Package: {}", entry.dependency.name()));
            body.push(format!("Used in: {} files", entry.files.len()));
            body.push(String::new());
        }

        if response.cancelled {
            body.push(CANCELLED_MESSAGE.to_string());
        }
        body
    }

    fn summary_body(response: &UsageResponse) -> Vec<String> {
        if response.total_dependencies == 0 {
            return vec![NO_DEPENDENCIES_MESSAGE.to_string()];
        }

        let mut body: Vec<String> = response
            .entries
            .iter()
            .map(|entry| {
                let status = if entry.is_used() {
                    "✅ Used"
                } else {
                    "⚠️ Unused"
                };
                format!(
                    "{}@{}: {} (Found in {} files)",
                    entry.dependency.name(),
                    entry.dependency.constraint(),
                    status,
                    entry.files.len()
                )
            })
            .collect();

        body.push(String::new());
        body.push(format!(
            "Used: {}  Unused: {}",
            response.used_count(),
            response.unused_count()
        ));
        if response.cancelled {
            body.push(CANCELLED_MESSAGE.to_string());
        }
        body
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn timestamp(at: DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

impl ReportFormatter for TextFormatter {
    fn format_dependencies(&self, response: &DependencyListResponse) -> Result<String> {
        let mut body: Vec<String> = response
            .dependencies
            .iter()
            .map(|dependency| format!("{}: {}", dependency.name(), dependency.constraint()))
            .collect();
        if body.is_empty() {
            body.push(NO_DEPENDENCIES_MESSAGE.to_string());
        } else {
            body.push(String::new());
            body.push(format!("Total: {} dependencies", response.dependencies.len()));
        }
        Ok(Self::frame("Declared Dependencies", &response.metadata, &body))
    }

    fn format_outdated(&self, response: &OutdatedResponse) -> Result<String> {
        let mut body = vec![format!("$ {}", response.command), String::new()];
        body.extend(response.lines.iter().cloned());
        Ok(Self::frame(
            "Outdated Dependencies Analysis",
            &response.metadata,
            &body,
        ))
    }

    fn format_health(&self, response: &HealthResponse) -> Result<String> {
        Ok(Self::frame(
            "Dependency Health Check Results",
            &response.metadata,
            &Self::health_body(response),
        ))
    }

    fn format_usage(&self, response: &UsageResponse) -> Result<String> {
        Ok(Self::frame(
            "Dependency Usage Insights",
            &response.metadata,
            &Self::usage_body(response),
        ))
    }

    fn format_summary(&self, response: &UsageResponse) -> Result<String> {
        Ok(Self::frame(
            "Dependency Usage Summary",
            &response.metadata,
            &Self::summary_body(response),
        ))
    }
}
