use super::{FlatIndex, Tree};

/// Memoizes the flat index of the most recently seen tree.
///
/// The key is tree identity ([`Tree::ptr_eq`]), so handing the same `Tree`
/// in on every render costs one pointer comparison instead of a traversal.
#[derive(Debug, Default)]
pub struct FlatIndexCache {
    tree: Option<Tree>,
    index: FlatIndex,
    builds: usize,
}

impl FlatIndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The index for `tree`, rebuilt only if `tree` is a different allocation.
    pub fn get(&mut self, tree: &Tree) -> &FlatIndex {
        let stale = self.tree.as_ref().is_none_or(|cached| !cached.ptr_eq(tree));
        if stale {
            self.index = FlatIndex::build(tree);
            self.tree = Some(tree.clone());
            self.builds += 1;
            log::trace!("FlatIndexCache rebuilt entries={}", self.index.len());
        }
        &self.index
    }

    /// How many times the index has been built.
    pub fn builds(&self) -> usize {
        self.builds
    }
}
