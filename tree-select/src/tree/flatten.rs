use std::collections::HashMap;

use super::{Tree, TreeNode};

/// Pre-order, depth-first traversal of every node in the forest.
///
/// Internal nodes are included and child order is preserved. Nodes sharing
/// an id are all returned.
pub fn flatten(roots: &[TreeNode]) -> Vec<&TreeNode> {
    let mut out = Vec::new();
    collect(roots, &mut out);
    out
}

fn collect<'a>(nodes: &'a [TreeNode], out: &mut Vec<&'a TreeNode>) {
    for node in nodes {
        out.push(node);
        collect(&node.children, out);
    }
}

/// A node in the flat index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatEntry {
    pub id: String,
    pub label: String,
    /// Depth in tree (0 = root).
    pub depth: u16,
    pub has_children: bool,
    /// Position of the parent entry, `None` for roots.
    pub parent: Option<usize>,
}

/// Id → node lookup derived from a tree.
///
/// Entries are kept in pre-order. When several nodes share an id, lookups
/// return the first one encountered.
#[derive(Debug, Clone, Default)]
pub struct FlatIndex {
    entries: Vec<FlatEntry>,
    first: HashMap<String, usize>,
}

impl FlatIndex {
    pub fn build(tree: &Tree) -> Self {
        let mut index = Self::default();
        index.push_nodes(tree.roots(), 0, None);
        index
    }

    fn push_nodes(&mut self, nodes: &[TreeNode], depth: u16, parent: Option<usize>) {
        for node in nodes {
            let position = self.entries.len();
            self.entries.push(FlatEntry {
                id: node.id.clone(),
                label: node.label.clone(),
                depth,
                has_children: node.has_children(),
                parent,
            });
            self.first.entry(node.id.clone()).or_insert(position);
            self.push_nodes(&node.children, depth + 1, Some(position));
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The first entry with this id.
    pub fn get(&self, id: &str) -> Option<&FlatEntry> {
        self.first.get(id).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.first.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlatEntry> {
        self.entries.iter()
    }

    /// Ids of the ancestors of `id`, root first. Empty for roots and unknown ids.
    pub fn ancestors(&self, id: &str) -> Vec<&str> {
        let mut chain = Vec::new();
        let mut current = self.first.get(id).and_then(|&i| self.entries[i].parent);
        while let Some(i) = current {
            chain.push(self.entries[i].id.as_str());
            current = self.entries[i].parent;
        }
        chain.reverse();
        chain
    }
}

/// Label of the node selected by `id`.
///
/// Returns `""` for `None`, an empty id, or an id that is not in the index.
/// An unmatched id is treated as "no selection", never as an error.
pub fn resolve_label<'a>(index: &'a FlatIndex, id: Option<&str>) -> &'a str {
    match id {
        Some(id) if !id.is_empty() => index.get(id).map(|e| e.label.as_str()).unwrap_or(""),
        _ => "",
    }
}
