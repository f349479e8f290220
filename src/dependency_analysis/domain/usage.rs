use super::Dependency;
use serde::Serialize;

/// Which dependencies a usage scan reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageMode {
    /// Only dependencies imported by at least one file
    Used,
    /// Only dependencies no file imports
    Unused,
    Both,
}

impl UsageMode {
    pub const ALL: [UsageMode; 3] = [UsageMode::Used, UsageMode::Unused, UsageMode::Both];

    /// Label shown in the interactive choice
    pub fn label(&self) -> &'static str {
        match self {
            UsageMode::Used => "Find Used Dependencies",
            UsageMode::Unused => "Find Unused Dependencies",
            UsageMode::Both => "Find Both",
        }
    }

    /// Whether a dependency found in `file_count` files belongs in the report
    pub fn includes(&self, file_count: usize) -> bool {
        match self {
            UsageMode::Used => file_count > 0,
            UsageMode::Unused => file_count == 0,
            UsageMode::Both => true,
        }
    }
}

impl std::str::FromStr for UsageMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "used" => Ok(UsageMode::Used),
            "unused" => Ok(UsageMode::Unused),
            "both" | "all" => Ok(UsageMode::Both),
            _ => Err(format!(
                "Invalid usage mode: {}. Please specify 'used', 'unused' or 'both'",
                s
            )),
        }
    }
}

impl std::fmt::Display for UsageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UsageMode::Used => write!(f, "used"),
            UsageMode::Unused => write!(f, "unused"),
            UsageMode::Both => write!(f, "both"),
        }
    }
}

/// Files importing one dependency, in scan order, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageEntry {
    pub dependency: Dependency,
    pub files: Vec<String>,
}

impl UsageEntry {
    pub fn new(dependency: Dependency, files: Vec<String>) -> Self {
        Self { dependency, files }
    }

    pub fn is_used(&self) -> bool {
        !self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_usage_mode_from_str() {
        assert_eq!(UsageMode::from_str("used").unwrap(), UsageMode::Used);
        assert_eq!(UsageMode::from_str("UNUSED").unwrap(), UsageMode::Unused);
        assert_eq!(UsageMode::from_str("both").unwrap(), UsageMode::Both);
        assert_eq!(UsageMode::from_str("all").unwrap(), UsageMode::Both);
    }

    #[test]
    fn test_usage_mode_from_str_invalid() {
        let error = UsageMode::from_str("sometimes").unwrap_err();
        assert!(error.contains("Invalid usage mode"));
        assert!(error.contains("sometimes"));
    }

    #[test]
    fn test_usage_mode_includes() {
        assert!(UsageMode::Used.includes(2));
        assert!(!UsageMode::Used.includes(0));
        assert!(UsageMode::Unused.includes(0));
        assert!(!UsageMode::Unused.includes(1));
        assert!(UsageMode::Both.includes(0));
        assert!(UsageMode::Both.includes(7));
    }

    #[test]
    fn test_usage_mode_labels() {
        let labels: Vec<&str> = UsageMode::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Find Used Dependencies",
                "Find Unused Dependencies",
                "Find Both"
            ]
        );
    }
}
