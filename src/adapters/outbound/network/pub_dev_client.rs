use crate::dependency_analysis::domain::ScoreSnapshot;
use crate::ports::outbound::PackageRegistry;
use crate::shared::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::time::Duration;

/// Public pub.dev registry
pub const DEFAULT_REGISTRY_URL: &str = "https://pub.dev";

/// PubDevClient adapter for fetching package scores from the pub.dev API
///
/// This adapter implements the PackageRegistry port with one
/// `GET {base}/api/packages/{name}/score` request per package. Each score
/// field is read independently so a missing or malformed field only
/// affects its own metric.
pub struct PubDevClient {
    client: reqwest::Client,
    base_url: String,
}

impl PubDevClient {
    /// Creates a client for the public pub.dev registry
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_REGISTRY_URL)
    }

    /// Creates a client for a registry mirror
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("flutter-dep-analyzer/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Validates a package name before it becomes part of a URL path
    fn validate_url_component(component: &str) -> Result<()> {
        if component.contains('/') || component.contains('\\') {
            anyhow::bail!("Security: Package name contains path separators which are not allowed");
        }

        if component.contains("..") {
            anyhow::bail!("Security: Package name contains '..' which is not allowed");
        }

        if component.contains('#') || component.contains('?') || component.contains('@') {
            anyhow::bail!("Security: Package name contains URL-unsafe characters");
        }

        Ok(())
    }

    fn score_url(&self, package_name: &str) -> Result<String> {
        Self::validate_url_component(package_name)?;
        Ok(format!(
            "{}/api/packages/{}/score",
            self.base_url,
            urlencoding::encode(package_name)
        ))
    }
}

/// Reads the score fields of a pub.dev score document
pub(crate) fn snapshot_from_json(body: &Value) -> ScoreSnapshot {
    ScoreSnapshot {
        popularity_score: body.get("popularityScore").and_then(Value::as_f64),
        like_count: body.get("likeCount").and_then(Value::as_u64),
        granted_points: body.get("grantedPoints").and_then(Value::as_u64),
        max_points: body.get("maxPoints").and_then(Value::as_u64),
        last_updated: body
            .get("lastUpdated")
            .and_then(Value::as_str)
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|date| date.with_timezone(&Utc)),
    }
}

#[async_trait]
impl PackageRegistry for PubDevClient {
    async fn fetch_score(&self, package_name: &str) -> Result<ScoreSnapshot> {
        let url = self.score_url(package_name)?;
        log::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("pub.dev API returned status code {}", response.status());
        }

        let body: Value = response.json().await?;
        Ok(snapshot_from_json(&body))
    }
}
