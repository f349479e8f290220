use crate::dependency_analysis::domain::DependencySet;
use crate::dependency_analysis::services::ManifestParser;
use crate::ports::outbound::{ManifestReader, MANIFEST_FILE_NAME};
use crate::shared::error::AnalyzerError;
use crate::shared::security::safe_read_to_string;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// FileSystemReader adapter for reading pubspec.yaml from the file system
///
/// This adapter implements the ManifestReader port. The manifest is read
/// through the shared security checks (no symlinks, size limit).
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for FileSystemReader {
    fn locate_manifest(&self, project_path: &Path) -> Result<PathBuf> {
        let manifest_path = project_path.join(MANIFEST_FILE_NAME);
        if !manifest_path.is_file() {
            return Err(AnalyzerError::ManifestNotFound {
                path: manifest_path,
            }
            .into());
        }
        Ok(manifest_path)
    }

    fn read_dependencies(&self, project_path: &Path) -> Result<DependencySet> {
        let manifest_path = self.locate_manifest(project_path)?;

        let content = safe_read_to_string(&manifest_path, MANIFEST_FILE_NAME).map_err(|e| {
            AnalyzerError::FileReadError {
                path: manifest_path.clone(),
                details: e.to_string(),
            }
        })?;

        let dependencies = ManifestParser::parse(&content).map_err(|e| {
            AnalyzerError::ManifestParseError {
                path: manifest_path.clone(),
                details: e.to_string(),
            }
        })?;

        log::debug!(
            "Read {} dependencies from {}",
            dependencies.len(),
            manifest_path.display()
        );
        Ok(dependencies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_dependencies_success() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("pubspec.yaml"),
            "name: sample\ndependencies:\n  http: ^1.2.0\n  flutter:\n    sdk: flutter\n",
        )
        .unwrap();

        let reader = FileSystemReader::new();
        let dependencies = reader.read_dependencies(temp_dir.path()).unwrap();

        assert_eq!(dependencies.len(), 2);
        assert_eq!(dependencies.get("http").unwrap().constraint(), "^1.2.0");
        assert_eq!(dependencies.get("flutter").unwrap().constraint(), "sdk: flutter");
    }

    #[test]
    fn test_read_dependencies_manifest_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_dependencies(temp_dir.path());

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("No pubspec.yaml file found"));
    }

    #[test]
    fn test_read_dependencies_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("pubspec.yaml"), "dependencies: [unclosed").unwrap();

        let reader = FileSystemReader::new();
        let err = reader.read_dependencies(temp_dir.path()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<AnalyzerError>(),
            Some(AnalyzerError::ManifestParseError { .. })
        ));
    }

    #[test]
    fn test_locate_manifest_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("pubspec.yaml")).unwrap();

        let reader = FileSystemReader::new();
        assert!(reader.locate_manifest(temp_dir.path()).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_read_dependencies_rejects_symlinked_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.yaml");
        fs::write(&target, "dependencies:\n  http: any\n").unwrap();
        std::os::unix::fs::symlink(&target, temp_dir.path().join("pubspec.yaml")).unwrap();

        let reader = FileSystemReader::new();
        let err = reader.read_dependencies(temp_dir.path()).unwrap_err();
        assert!(format!("{}", err).contains("symbolic link"));
    }
}
