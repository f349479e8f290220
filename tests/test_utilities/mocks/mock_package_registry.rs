use async_trait::async_trait;
use flutter_dep_analyzer::dependency_analysis::domain::ScoreSnapshot;
use flutter_dep_analyzer::prelude::*;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tokio::time::Instant;

/// Mock PackageRegistry that records every lookup with its start time
#[derive(Clone)]
pub struct MockPackageRegistry {
    snapshot: ScoreSnapshot,
    failing: HashSet<String>,
    pub calls: Arc<Mutex<Vec<(String, Instant)>>>,
}

impl MockPackageRegistry {
    pub fn new() -> Self {
        Self {
            snapshot: ScoreSnapshot {
                popularity_score: Some(0.5),
                like_count: Some(1200),
                granted_points: Some(140),
                max_points: Some(160),
                last_updated: Some(chrono::Utc::now()),
            },
            failing: HashSet::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Lookups of `name` fail as if the network were down
    pub fn with_failure(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn call_times(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().iter().map(|(_, at)| *at).collect()
    }
}

#[async_trait]
impl PackageRegistry for MockPackageRegistry {
    async fn fetch_score(&self, package_name: &str) -> Result<ScoreSnapshot> {
        self.calls
            .lock()
            .unwrap()
            .push((package_name.to_string(), Instant::now()));

        if self.failing.contains(package_name) {
            anyhow::bail!("Mock registry failure for {}", package_name);
        }
        Ok(self.snapshot.clone())
    }
}
