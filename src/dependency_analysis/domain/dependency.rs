use crate::shared::error::AnalyzerError;
use crate::shared::Result;
use serde::Serialize;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// NewType wrapper for a pub package name with validation
///
/// Pub names are lowercase identifiers, but manifests in the wild also carry
/// mixed case, dots and hyphens, so those are accepted. Anything that could
/// alter a registry URL or a regex is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let invalid = |reason: &str| AnalyzerError::InvalidPackageName {
            name: name.clone(),
            reason: reason.to_string(),
        };

        if name.is_empty() {
            return Err(invalid("Package name cannot be empty").into());
        }

        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            return Err(invalid(&format!(
                "Package name is too long. Maximum allowed: {} bytes",
                MAX_PACKAGE_NAME_LENGTH
            ))
            .into());
        }

        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
        {
            return Err(invalid(
                "Only ASCII letters, digits, underscores, hyphens and dots are allowed",
            )
            .into());
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A dependency declared in the `dependencies` section of pubspec.yaml
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    name: PackageName,
    constraint: String,
}

impl Dependency {
    pub fn new(name: PackageName, constraint: impl Into<String>) -> Self {
        Self {
            name,
            constraint: constraint.into(),
        }
    }

    pub fn name(&self) -> &PackageName {
        &self.name
    }

    /// Version constraint as written, or a rendering of a non-hosted source
    /// (e.g. `sdk: flutter`, `path: ../core`)
    pub fn constraint(&self) -> &str {
        &self.constraint
    }
}

/// Dependencies of one manifest in declaration order. Names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencySet {
    dependencies: Vec<Dependency>,
}

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a dependency. A repeated name replaces the earlier constraint in
    /// place so the set keeps its first-declared order.
    pub fn insert(&mut self, dependency: Dependency) {
        match self
            .dependencies
            .iter_mut()
            .find(|existing| existing.name == dependency.name)
        {
            Some(existing) => *existing = dependency,
            None => self.dependencies.push(dependency),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Dependency> {
        self.dependencies.iter().find(|d| d.name.as_str() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dependency> {
        self.dependencies.iter()
    }

    pub fn as_slice(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}

impl FromIterator<Dependency> for DependencySet {
    fn from_iter<I: IntoIterator<Item = Dependency>>(iter: I) -> Self {
        let mut set = DependencySet::new();
        for dependency in iter {
            set.insert(dependency);
        }
        set
    }
}

impl<'a> IntoIterator for &'a DependencySet {
    type Item = &'a Dependency;
    type IntoIter = std::slice::Iter<'a, Dependency>;

    fn into_iter(self) -> Self::IntoIter {
        self.dependencies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dep(name: &str, constraint: &str) -> Dependency {
        Dependency::new(PackageName::new(name).unwrap(), constraint)
    }

    #[test]
    fn test_package_name_valid() {
        let name = PackageName::new("http_parser").unwrap();
        assert_eq!(name.as_str(), "http_parser");
        assert_eq!(name.to_string(), "http_parser");
    }

    #[test]
    fn test_package_name_empty() {
        let result = PackageName::new("");
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_package_name_rejects_url_characters() {
        assert!(PackageName::new("../etc").is_err());
        assert!(PackageName::new("foo/bar").is_err());
        assert!(PackageName::new("foo?x=1").is_err());
        assert!(PackageName::new("foo bar").is_err());
    }

    #[test]
    fn test_package_name_too_long() {
        let result = PackageName::new("a".repeat(MAX_PACKAGE_NAME_LENGTH + 1));
        assert!(result.unwrap_err().to_string().contains("too long"));
    }

    #[test]
    fn test_dependency_set_keeps_declaration_order() {
        let set: DependencySet = vec![dep("provider", "^6.0.0"), dep("http", "^1.1.0")]
            .into_iter()
            .collect();

        let names: Vec<&str> = set.iter().map(|d| d.name().as_str()).collect();
        assert_eq!(names, vec!["provider", "http"]);
    }

    #[test]
    fn test_dependency_set_replaces_duplicate_in_place() {
        let mut set = DependencySet::new();
        set.insert(dep("http", "^0.13.0"));
        set.insert(dep("provider", "^6.0.0"));
        set.insert(dep("http", "^1.1.0"));

        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice()[0].constraint(), "^1.1.0");
        assert_eq!(set.get("http").unwrap().constraint(), "^1.1.0");
    }
}
