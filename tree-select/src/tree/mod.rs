//! Tree data, flattening and label resolution.

mod cache;
mod flatten;
mod node;

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

pub use cache::FlatIndexCache;
pub use flatten::{FlatEntry, FlatIndex, flatten, resolve_label};
pub use node::TreeNode;

use crate::error::TreeError;

/// An ordered forest of root nodes.
///
/// Cloning is cheap and shares the same allocation. Two handles are the
/// *same tree* (for memoization) only when [`Tree::ptr_eq`] holds, even if
/// their contents compare equal.
#[derive(Debug, Clone)]
pub struct Tree {
    roots: Arc<[TreeNode]>,
}

impl Tree {
    pub fn new(roots: Vec<TreeNode>) -> Self {
        Self {
            roots: roots.into(),
        }
    }

    /// Parse a JSON array of nodes (`[{ "id", "label", "children"? }]`).
    pub fn from_json(json: &str) -> Result<Self, TreeError> {
        let roots: Vec<TreeNode> = serde_json::from_str(json)?;
        Ok(Self::new(roots))
    }

    /// Read and parse a JSON tree file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TreeError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| TreeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn roots(&self) -> &[TreeNode] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Whether both handles point at the same allocation.
    pub fn ptr_eq(&self, other: &Tree) -> bool {
        Arc::ptr_eq(&self.roots, &other.roots)
    }

    /// Ids that occur more than once, in pre-order of their second occurrence.
    pub fn duplicate_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for node in flatten(&self.roots) {
            if !seen.insert(node.id.as_str()) && reported.insert(node.id.as_str()) {
                duplicates.push(node.id.clone());
            }
        }
        duplicates
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<TreeNode>> for Tree {
    fn from(roots: Vec<TreeNode>) -> Self {
        Self::new(roots)
    }
}
