use tracing::debug;

use crate::error::{InvariantError, TreeError};
use crate::fixup::fixup;
use crate::insert::{attach_with_limit, MAX_NODES};
use crate::layout::{layout, Grid};
use crate::node::RbNode;
use crate::types::{Color, Key, RbNodeLike};
use crate::util::{find, first, height, inorder, next};
use crate::validate::assert_red_black_tree;

/// Red-black tree over [`Key`]s, with nodes kept in an index arena.
///
/// Nodes are never moved or freed individually: rotations only rewrite
/// links, and the whole arena is released together.
#[derive(Clone, Debug, Default)]
pub struct RbTree {
    root: Option<u32>,
    size: usize,
    arena: Vec<RbNode>,
}

impl RbTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `key` and rebalances. Returns the index of the root.
    ///
    /// Equal keys are kept, each new one to the left of the existing ones.
    /// On error the tree is unchanged.
    pub fn insert(&mut self, key: Key) -> Result<u32, TreeError> {
        self.insert_with_limit(key, MAX_NODES)
    }

    pub(crate) fn insert_with_limit(&mut self, key: Key, limit: usize) -> Result<u32, TreeError> {
        let attached = attach_with_limit(&mut self.arena, self.root, key, limit)?;
        let root = fixup(&mut self.arena, attached.leaf);
        self.root = Some(root);
        self.size += 1;
        debug!(key, size = self.size, root, "inserted");
        Ok(root)
    }

    /// Index of a node holding `key`, if any.
    pub fn search(&self, key: Key) -> Option<u32> {
        find(&self.arena, self.root, key)
    }

    pub fn contains(&self, key: Key) -> bool {
        self.search(key).is_some()
    }

    /// Lays the tree out on a grid. Read-only.
    pub fn render(&self) -> Grid {
        layout(&self.arena, self.root)
    }

    /// All keys in ascending order.
    pub fn inorder(&self) -> Vec<Key> {
        inorder(&self.arena, self.root)
    }

    /// Ascending iterator over node indices.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        let arena = &self.arena;
        let mut curr = first(arena, self.root);
        std::iter::from_fn(move || {
            let i = curr?;
            curr = next(arena, i);
            Some(i)
        })
    }

    /// Drops every node and returns how many there were.
    pub fn destroy(self) -> usize {
        let released = self.arena.len();
        debug!(released, "tree destroyed");
        released
    }

    /// Empties the tree in place.
    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
        self.arena.clear();
    }

    pub fn root(&self) -> Option<u32> {
        self.root
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Levels in the tree; 0 when empty.
    pub fn height(&self) -> usize {
        height(&self.arena, self.root)
    }

    pub fn node(&self, idx: u32) -> &RbNode {
        &self.arena[idx as usize]
    }

    pub fn key(&self, idx: u32) -> Key {
        self.arena[idx as usize].key()
    }

    pub fn color(&self, idx: u32) -> Color {
        self.arena[idx as usize].color()
    }

    /// Backing arena, in allocation order.
    pub fn arena(&self) -> &[RbNode] {
        &self.arena
    }

    /// Validates the tree, then returns the number of black nodes on every
    /// root-to-leaf path, excluding the root.
    pub fn black_height(&self) -> Result<usize, InvariantError> {
        self.assert_valid()
    }

    /// Verifies every invariant; see [`assert_red_black_tree`].
    pub fn assert_valid(&self) -> Result<usize, InvariantError> {
        assert_red_black_tree(&self.arena, self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let tree = RbTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.size(), 0);
        assert_eq!(tree.root(), None);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.render(), Grid::default());
        assert!(tree.inorder().is_empty());
        assert_eq!(tree.assert_valid(), Ok(0));
    }

    #[test]
    fn single_insert_gives_black_root() {
        let mut tree = RbTree::new();
        let root = tree.insert(42).unwrap();
        assert_eq!(tree.root(), Some(root));
        assert_eq!(tree.color(root), Color::Black);
        assert_eq!(tree.key(root), 42);
        assert_eq!(tree.size(), 1);
    }

    #[test]
    fn search_and_contains() {
        let mut tree = RbTree::new();
        for key in [8, 3, 11, 1, 6] {
            tree.insert(key).unwrap();
        }
        let idx = tree.search(6).unwrap();
        assert_eq!(tree.key(idx), 6);
        assert!(tree.contains(1));
        assert!(!tree.contains(7));
        assert_eq!(tree.size(), 5);
    }

    #[test]
    fn failed_insert_leaves_tree_unchanged() {
        let mut tree = RbTree::new();
        for key in [10, 20, 30] {
            tree.insert(key).unwrap();
        }
        let root = tree.root();
        let arena = tree.arena().to_vec();

        assert_eq!(
            tree.insert_with_limit(40, 3),
            Err(TreeError::CapacityExceeded(3))
        );
        assert_eq!(tree.root(), root);
        assert_eq!(tree.size(), 3);
        assert_eq!(tree.arena(), &arena[..]);
        assert_eq!(tree.inorder(), vec![10, 20, 30]);
        assert_eq!(tree.assert_valid(), Ok(0));

        // The tree keeps working once room is available.
        tree.insert(40).unwrap();
        assert_eq!(tree.size(), 4);
        assert_eq!(tree.assert_valid(), Ok(1));
    }

    #[test]
    fn iter_visits_ascending() {
        let mut tree = RbTree::new();
        for key in [4, 2, 9, 7] {
            tree.insert(key).unwrap();
        }
        let keys: Vec<Key> = tree.iter().map(|i| tree.key(i)).collect();
        assert_eq!(keys, vec![2, 4, 7, 9]);
    }

    #[test]
    fn clear_and_destroy_release_nodes() {
        let mut tree = RbTree::new();
        for key in 0..10 {
            tree.insert(key).unwrap();
        }
        let copy = tree.clone();
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.size(), 0);
        assert!(tree.arena().is_empty());
        assert_eq!(copy.destroy(), 10);
    }
}
