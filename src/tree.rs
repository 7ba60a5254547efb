use std::{cmp::Ordering::*, fmt::Debug};

use crate::{Error, LinkExt, Node, Tree, rebalance};

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    pub const fn new() -> Self {
        Tree { root: None }
    }

    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.root.aggregate().size
    }

    /// Number of red nodes.
    pub fn red_count(&self) -> usize {
        self.root.aggregate().red_count
    }

    /// The share of red nodes, in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] when there are no nodes to divide by.
    pub fn percent_red(&self) -> Result<f64, Error> {
        let aggregate = self.root.aggregate();
        if aggregate.size == 0 {
            return Err(Error::EmptyTree);
        }
        Ok(aggregate.red_count as f64 / aggregate.size as f64)
    }

    /// Nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }
}

impl<K: Ord> Tree<K> {
    /// Insert `key`, replacing an equal key already in the tree.
    pub fn insert(&mut self, key: K) {
        let mut root = rebalance::put(self.root.take(), key);
        if root.is_red() {
            root.flip();
        }
        self.root = Some(root);
    }

    pub fn contains(&self, key: &K) -> bool {
        let mut node = self.root.as_deref();
        while let Some(candidate) = node {
            match key.cmp(&candidate.key) {
                Equal => return true,
                Greater => node = candidate.right.as_deref(),
                Less => node = candidate.left.as_deref(),
            }
        }
        false
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Debug> Debug for Tree<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tree").field("root", &self.root).finish()
    }
}
