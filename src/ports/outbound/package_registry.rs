use crate::dependency_analysis::domain::{HealthRecord, ScoreSnapshot};
use crate::dependency_analysis::policies::HealthScoring;
use crate::shared::Result;
use async_trait::async_trait;
use chrono::Utc;

/// PackageRegistry port for fetching package scores from a public registry
///
/// # Async Support
/// Lookups of one batch run concurrently, so implementations must be
/// `Send + Sync`.
#[async_trait]
pub trait PackageRegistry: Send + Sync {
    /// Fetches the raw score fields of a package
    ///
    /// # Errors
    /// Returns an error if:
    /// - The package name is unsafe to put in a URL
    /// - The network request fails
    /// - The registry returns a non-success status
    /// - The body is not JSON
    async fn fetch_score(&self, package_name: &str) -> Result<ScoreSnapshot>;

    /// Best-effort health lookup that never fails
    ///
    /// Any error from [`PackageRegistry::fetch_score`] turns into a record
    /// where every metric is not available.
    async fn health_of(&self, package_name: &str) -> HealthRecord {
        match self.fetch_score(package_name).await {
            Ok(snapshot) => HealthScoring::evaluate(&snapshot, Utc::now()),
            Err(e) => {
                log::warn!("Health data unavailable for {}: {:#}", package_name, e);
                HealthRecord::not_available()
            }
        }
    }
}
