//! Arena link helpers and read-only traversals.
//!
//! Nothing in this module rebalances: these are plain binary-search-tree
//! walks shared by the insertion engine, the layout engine and the tree
//! aggregate.

use crate::types::{Color, Key, Node, RbNodeLike};

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

#[inline]
pub(crate) fn set_color<N: RbNodeLike>(arena: &mut [N], idx: u32, color: Color) {
    arena[idx as usize].set_color(color);
}

/// Replaces `old` with `new` in the child slot of `parent`.
///
/// A `None` parent means `old` was the root; there is no slot to patch.
pub(crate) fn replace_child<N: Node>(arena: &mut [N], parent: Option<u32>, old: u32, new: u32) {
    if let Some(p) = parent {
        if get_l(arena, p) == Some(old) {
            set_l(arena, p, Some(new));
        } else {
            set_r(arena, p, Some(new));
        }
    }
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Climbs parent links until the topmost node.
pub fn top<N: Node>(arena: &[N], mut curr: u32) -> u32 {
    while let Some(p) = get_p(arena, curr) {
        curr = p;
    }
    curr
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut count = 0;
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        count += 1;
        curr = next(arena, i);
    }
    count
}

/// Number of levels under `root`: 0 for an empty tree, 1 for a lone root.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    match root {
        None => 0,
        Some(i) => 1 + height(arena, get_l(arena, i)).max(height(arena, get_r(arena, i))),
    }
}

/// Finds a node holding `key`.
///
/// Plain descent; with duplicates the first match on the way down wins.
pub fn find<N: RbNodeLike>(arena: &[N], root: Option<u32>, key: Key) -> Option<u32> {
    let mut curr = root;
    while let Some(i) = curr {
        let k = arena[i as usize].key();
        if key == k {
            return Some(i);
        }
        curr = if key < k {
            get_l(arena, i)
        } else {
            get_r(arena, i)
        };
    }
    None
}

/// Keys in ascending order.
pub fn inorder<N: RbNodeLike>(arena: &[N], root: Option<u32>) -> Vec<Key> {
    let mut keys = Vec::new();
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        keys.push(arena[i as usize].key());
        curr = next(arena, i);
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::RbNode;

    // 2 at the root with 1 and 3 hanging off it.
    fn three() -> Vec<RbNode> {
        let mut arena = vec![RbNode::new(2), RbNode::new(1), RbNode::new(3)];
        arena[0].l = Some(1);
        arena[0].r = Some(2);
        arena[1].p = Some(0);
        arena[2].p = Some(0);
        arena
    }

    #[test]
    fn walks_in_order() {
        let arena = three();
        assert_eq!(first(&arena, Some(0)), Some(1));
        assert_eq!(next(&arena, 1), Some(0));
        assert_eq!(next(&arena, 0), Some(2));
        assert_eq!(next(&arena, 2), None);
        assert_eq!(inorder(&arena, Some(0)), vec![1, 2, 3]);
    }

    #[test]
    fn measures_empty_and_small_trees() {
        let arena = three();
        assert_eq!(height(&arena, None), 0);
        assert_eq!(height(&arena, Some(1)), 1);
        assert_eq!(height(&arena, Some(0)), 2);
        assert_eq!(size(&arena, Some(0)), 3);
        assert_eq!(size(&arena, None), 0);
        assert_eq!(top(&arena, 2), 0);
    }

    #[test]
    fn find_descends_by_key() {
        let arena = three();
        assert_eq!(find(&arena, Some(0), 3), Some(2));
        assert_eq!(find(&arena, Some(0), 4), None);
    }
}
