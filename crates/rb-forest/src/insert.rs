//! Ordered insertion.
//!
//! Attaches a new red leaf at the position a plain binary-search-tree
//! descent finds for it. Red-black invariants are *not* restored here; see
//! [`fixup`](crate::fixup::fixup).

use crate::error::TreeError;
use crate::node::RbNode;
use crate::types::{Key, RbNodeLike};
use crate::util::{get_l, get_r, set_l, set_p, set_r};

/// Outcome of [`attach`]: the (possibly new) root and the fresh leaf.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attached {
    pub root: u32,
    pub leaf: u32,
}

/// Most nodes an arena can index with `u32` links.
pub(crate) const MAX_NODES: usize = u32::MAX as usize;

/// Allocates a detached red node in the arena.
///
/// Reserves before pushing so that a failed allocation leaves the arena
/// untouched.
pub fn alloc(arena: &mut Vec<RbNode>, key: Key) -> Result<u32, TreeError> {
    alloc_with_limit(arena, key, MAX_NODES)
}

pub(crate) fn alloc_with_limit(
    arena: &mut Vec<RbNode>,
    key: Key,
    limit: usize,
) -> Result<u32, TreeError> {
    let idx = arena.len();
    if idx >= limit.min(MAX_NODES) {
        return Err(TreeError::CapacityExceeded(idx));
    }
    arena.try_reserve(1)?;
    arena.push(RbNode::new(key));
    Ok(idx as u32)
}

/// Links the detached node `n` into the tree rooted at `root`.
///
/// Keys equal to a visited node go left.
pub fn insert<N: RbNodeLike>(arena: &mut [N], root: Option<u32>, n: u32) -> u32 {
    let Some(root) = root else {
        set_p(arena, n, None);
        return n;
    };

    let mut curr = root;
    let key = arena[n as usize].key();
    loop {
        let go_left = key <= arena[curr as usize].key();
        let next = if go_left {
            get_l(arena, curr)
        } else {
            get_r(arena, curr)
        };
        match next {
            Some(next) => curr = next,
            None => {
                if go_left {
                    set_l(arena, curr, Some(n));
                } else {
                    set_r(arena, curr, Some(n));
                }
                set_p(arena, n, Some(curr));
                return root;
            }
        }
    }
}

/// Allocates a leaf for `key` and links it below `root`.
pub fn attach(arena: &mut Vec<RbNode>, root: Option<u32>, key: Key) -> Result<Attached, TreeError> {
    attach_with_limit(arena, root, key, MAX_NODES)
}

pub(crate) fn attach_with_limit(
    arena: &mut Vec<RbNode>,
    root: Option<u32>,
    key: Key,
    limit: usize,
) -> Result<Attached, TreeError> {
    let leaf = alloc_with_limit(arena, key, limit)?;
    let root = insert(arena, root, leaf);
    Ok(Attached { root, leaf })
}
