//! Dependency tree read model
//!
//! A two-level view of a usage scan: one root per dependency, one child per
//! file that imports it. Views subscribe to the tree and are told whenever
//! its data changes.

use crate::application::dto::UsageResponse;

/// Whether a tree item can be expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collapsible {
    /// Dependency with at least one matching file
    Collapsed,
    /// File, or dependency with no matching file
    Leaf,
}

/// One displayable row of the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeItem {
    pub label: String,
    pub state: Collapsible,
}

impl TreeItem {
    fn new(label: impl Into<String>, state: Collapsible) -> Self {
        Self {
            label: label.into(),
            state,
        }
    }
}

type Listener = Box<dyn Fn(&DependencyTree)>;

/// Observable tree of dependencies and the files that use them
#[derive(Default)]
pub struct DependencyTree {
    usage: Vec<(String, Vec<String>)>,
    listeners: Vec<Listener>,
}

impl DependencyTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a view that is called on every refresh
    pub fn subscribe(&mut self, listener: impl Fn(&DependencyTree) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Notifies every subscriber that the tree changed
    pub fn refresh(&self) {
        for listener in &self.listeners {
            listener(self);
        }
    }

    /// Replaces the tree data with the entries a usage report shows
    pub fn set_usage(&mut self, response: &UsageResponse) {
        self.usage = response
            .reported_entries()
            .map(|entry| (entry.dependency.name().to_string(), entry.files.clone()))
            .collect();
        self.refresh();
    }

    /// One item per dependency, in manifest order
    pub fn roots(&self) -> Vec<TreeItem> {
        self.usage
            .iter()
            .map(|(name, files)| {
                let state = if files.is_empty() {
                    Collapsible::Leaf
                } else {
                    Collapsible::Collapsed
                };
                TreeItem::new(name.as_str(), state)
            })
            .collect()
    }

    /// Files under the dependency labelled `label`; empty for unknown labels
    pub fn children(&self, label: &str) -> Vec<TreeItem> {
        self.usage
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, files)| {
                files
                    .iter()
                    .map(|file| TreeItem::new(file.as_str(), Collapsible::Leaf))
                    .collect()
            })
            .unwrap_or_default()
    }
}
