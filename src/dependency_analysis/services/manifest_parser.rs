use crate::dependency_analysis::domain::{Dependency, DependencySet, PackageName};
use crate::shared::Result;
use serde::Deserialize;
use serde_yaml_ng::{Mapping, Value};

/// The parts of pubspec.yaml the analyzer reads
#[derive(Debug, Deserialize)]
struct Pubspec {
    #[serde(default)]
    dependencies: Option<Mapping>,
}

/// ManifestParser turns pubspec.yaml text into a [`DependencySet`]
pub struct ManifestParser;

impl ManifestParser {
    /// Parses the `dependencies` section, keeping declaration order.
    ///
    /// An empty document, a missing `dependencies` key or a `null` value all
    /// yield an empty set. Entries whose key is not a valid package name are
    /// skipped with a warning.
    pub fn parse(content: &str) -> Result<DependencySet> {
        if content.trim().is_empty() {
            return Ok(DependencySet::new());
        }

        let pubspec: Pubspec = serde_yaml_ng::from_str(content)
            .map_err(|e| anyhow::anyhow!("Invalid YAML: {}", e))?;

        let Some(dependencies) = pubspec.dependencies else {
            return Ok(DependencySet::new());
        };

        let mut set = DependencySet::new();
        for (key, value) in &dependencies {
            let Some(name) = key.as_str() else {
                log::warn!("Skipping dependency with non-string key {:?}", key);
                continue;
            };
            match PackageName::new(name) {
                Ok(name) => set.insert(Dependency::new(name, Self::describe_constraint(value))),
                Err(e) => log::warn!("Skipping dependency: {}", e),
            }
        }
        Ok(set)
    }

    /// Renders a dependency value as a single constraint string
    fn describe_constraint(value: &Value) -> String {
        match value {
            Value::Null => "any".to_string(),
            Value::String(constraint) => constraint.clone(),
            Value::Number(number) => number.to_string(),
            Value::Bool(flag) => flag.to_string(),
            Value::Mapping(source) => Self::describe_source(source),
            Value::Sequence(_) | Value::Tagged(_) => "complex".to_string(),
        }
    }

    fn describe_source(source: &Mapping) -> String {
        let scalar = |key: &str| match source.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };

        if let Some(sdk) = scalar("sdk") {
            return format!("sdk: {}", sdk);
        }

        match source.get("git") {
            Some(Value::String(url)) => return format!("git: {}", url),
            Some(Value::Mapping(git)) => {
                if let Some(Value::String(url)) = git.get("url") {
                    return format!("git: {}", url);
                }
                return "git".to_string();
            }
            _ => {}
        }

        if let Some(path) = scalar("path") {
            return format!("path: {}", path);
        }

        match (source.contains_key("hosted"), scalar("version")) {
            (true, Some(version)) => format!("{} (hosted)", version),
            (true, None) => "any (hosted)".to_string(),
            (false, Some(version)) => version,
            (false, None) => "complex".to_string(),
        }
    }
}
