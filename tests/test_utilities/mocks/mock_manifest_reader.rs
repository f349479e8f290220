use flutter_dep_analyzer::prelude::*;
use flutter_dep_analyzer::shared::error::AnalyzerError;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock ManifestReader serving a fixed dependency list
#[derive(Clone)]
pub struct MockManifestReader {
    dependencies: Option<Vec<(String, String)>>,
    pub read_calls: Arc<AtomicUsize>,
}

impl MockManifestReader {
    /// Dependencies given as `(name, constraint)` pairs, in manifest order
    pub fn new(dependencies: &[(&str, &str)]) -> Self {
        Self {
            dependencies: Some(
                dependencies
                    .iter()
                    .map(|(name, constraint)| (name.to_string(), constraint.to_string()))
                    .collect(),
            ),
            read_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Reader for a project without pubspec.yaml
    pub fn missing() -> Self {
        Self {
            dependencies: None,
            read_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn read_count(&self) -> usize {
        self.read_calls.load(Ordering::SeqCst)
    }
}

impl ManifestReader for MockManifestReader {
    fn locate_manifest(&self, project_path: &Path) -> Result<PathBuf> {
        let manifest = project_path.join("pubspec.yaml");
        if self.dependencies.is_none() {
            return Err(AnalyzerError::ManifestNotFound { path: manifest }.into());
        }
        Ok(manifest)
    }

    fn read_dependencies(&self, project_path: &Path) -> Result<DependencySet> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);
        self.locate_manifest(project_path)?;

        let mut set = DependencySet::new();
        for (name, constraint) in self.dependencies.iter().flatten() {
            set.insert(Dependency::new(PackageName::new(name.as_str())?, constraint.as_str()));
        }
        Ok(set)
    }
}
