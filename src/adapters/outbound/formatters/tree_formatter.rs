use crate::application::read_models::{Collapsible, DependencyTree};

/// TreeFormatter adapter rendering the dependency tree as text
///
/// Expanded:
/// ```text
/// ▾ http (2 files)
///    ├── lib/api.dart
///    └── lib/client.dart
/// • intl (0 files)
/// ```
/// Collapsed trees show only the root lines, with `▸` for roots that have
/// children.
pub struct TreeFormatter;

impl TreeFormatter {
    pub fn render(tree: &DependencyTree, collapsed: bool) -> Vec<String> {
        let mut lines = Vec::new();
        for root in tree.roots() {
            let children = tree.children(&root.label);
            let marker = match (root.state, collapsed) {
                (Collapsible::Leaf, _) => "•",
                (Collapsible::Collapsed, true) => "▸",
                (Collapsible::Collapsed, false) => "▾",
            };
            lines.push(format!(
                "{} {} ({} files)",
                marker,
                root.label,
                children.len()
            ));

            if collapsed {
                continue;
            }
            let last = children.len().saturating_sub(1);
            for (index, child) in children.iter().enumerate() {
                let branch = if index == last { "└──" } else { "├──" };
                lines.push(format!("   {} {}", branch, child.label));
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::UsageResponse;
    use crate::dependency_analysis::domain::{
        Dependency, PackageName, ReportMetadata, UsageEntry, UsageMode,
    };
    use chrono::Local;
    use std::path::PathBuf;

    fn tree() -> DependencyTree {
        let now = Local::now();
        let entry = |name: &str, files: &[&str]| {
            UsageEntry::new(
                Dependency::new(PackageName::new(name).unwrap(), "any"),
                files.iter().map(|f| f.to_string()).collect(),
            )
        };
        let response = UsageResponse {
            mode: UsageMode::Both,
            entries: vec![
                entry("http", &["lib/api.dart", "lib/client.dart"]),
                entry("intl", &[]),
            ],
            total_dependencies: 2,
            cancelled: false,
            metadata: ReportMetadata::new(PathBuf::from("."), now, now),
        };
        let mut tree = DependencyTree::new();
        tree.set_usage(&response);
        tree
    }

    #[test]
    fn test_render_expanded() {
        assert_eq!(
            TreeFormatter::render(&tree(), false),
            vec![
                "▾ http (2 files)",
                "   ├── lib/api.dart",
                "   └── lib/client.dart",
                "• intl (0 files)",
            ]
        );
    }

    #[test]
    fn test_render_collapsed() {
        assert_eq!(
            TreeFormatter::render(&tree(), true),
            vec!["▸ http (2 files)", "• intl (0 files)"]
        );
    }
}
