use crate::dependency_analysis::domain::DependencySet;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Manifest file name at the project root
pub const MANIFEST_FILE_NAME: &str = "pubspec.yaml";

/// ManifestReader port for reading the project's declared dependencies
///
/// This port abstracts the file system operations needed to locate and
/// read pubspec.yaml from a project directory.
pub trait ManifestReader {
    /// Returns the manifest path if the project has one
    ///
    /// # Errors
    /// Returns `AnalyzerError::ManifestNotFound` when pubspec.yaml is absent
    fn locate_manifest(&self, project_path: &Path) -> Result<PathBuf>;

    /// Reads the `dependencies` section of the project's manifest
    ///
    /// # Returns
    /// Declared dependencies in manifest order; empty when the
    /// `dependencies` key is missing
    ///
    /// # Errors
    /// Returns an error if:
    /// - pubspec.yaml does not exist
    /// - The file cannot be read
    /// - The file is not valid YAML
    fn read_dependencies(&self, project_path: &Path) -> Result<DependencySet>;
}
