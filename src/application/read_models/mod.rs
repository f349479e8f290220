//! Read models for CQRS-lite pattern
//!
//! View-optimized structures built from use case responses for
//! presentation only.

mod dependency_tree;

pub use dependency_tree::{Collapsible, DependencyTree, TreeItem};
