//! Single rotations.
//!
//! Both primitives take the pivot child explicitly: the caller has already
//! looked it up, so a rotation around a missing child cannot be expressed.
//! In-order key sequence is preserved by construction.
//!
//! ```text
//!       x                y
//!      / \              / \
//!     a   y    <=>     x   c
//!        / \          / \
//!       b   c        a   b
//! ```

use crate::types::Node;
use crate::util::{get_l, get_p, get_r, replace_child, set_l, set_p, set_r};

/// Left rotation around `x`, where `y` is `x`'s right child.
///
/// `y` takes over `x`'s slot under its former parent (or becomes the
/// topmost node). Returns `y`.
pub fn rotate_left<N: Node>(arena: &mut [N], x: u32, y: u32) -> u32 {
    debug_assert_eq!(get_r(arena, x), Some(y), "left rotation needs x.r == y");
    let p = get_p(arena, x);
    let yl = get_l(arena, y);

    set_r(arena, x, yl);
    if let Some(yl) = yl {
        set_p(arena, yl, Some(x));
    }

    set_p(arena, y, p);
    replace_child(arena, p, x, y);

    set_l(arena, y, Some(x));
    set_p(arena, x, Some(y));
    y
}

/// Right rotation around `x`, where `y` is `x`'s left child. Returns `y`.
pub fn rotate_right<N: Node>(arena: &mut [N], x: u32, y: u32) -> u32 {
    debug_assert_eq!(get_l(arena, x), Some(y), "right rotation needs x.l == y");
    let p = get_p(arena, x);
    let yr = get_r(arena, y);

    set_l(arena, x, yr);
    if let Some(yr) = yr {
        set_p(arena, yr, Some(x));
    }

    set_p(arena, y, p);
    replace_child(arena, p, x, y);

    set_r(arena, y, Some(x));
    set_p(arena, x, Some(y));
    y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::RbNode;
    use crate::util::inorder;

    //     10(0)
    //    /    \
    //  5(1)   20(2)
    //         /   \
    //      15(3)  25(4)
    fn right_heavy() -> Vec<RbNode> {
        let mut arena: Vec<RbNode> = [10, 5, 20, 15, 25].into_iter().map(RbNode::new).collect();
        arena[0].l = Some(1);
        arena[0].r = Some(2);
        arena[1].p = Some(0);
        arena[2].p = Some(0);
        arena[2].l = Some(3);
        arena[2].r = Some(4);
        arena[3].p = Some(2);
        arena[4].p = Some(2);
        arena
    }

    #[test]
    fn left_rotation_moves_inner_grandchild() {
        let mut arena = right_heavy();
        let top = rotate_left(&mut arena, 0, 2);
        assert_eq!(top, 2);
        assert_eq!(arena[2].p, None);
        assert_eq!(arena[2].l, Some(0));
        assert_eq!(arena[2].r, Some(4));
        assert_eq!(arena[0].p, Some(2));
        assert_eq!(arena[0].r, Some(3));
        assert_eq!(arena[3].p, Some(0));
        assert_eq!(inorder(&arena, Some(2)), vec![5, 10, 15, 20, 25]);
    }

    #[test]
    fn right_rotation_undoes_left_rotation() {
        let mut arena = right_heavy();
        let before = arena.clone();
        let top = rotate_left(&mut arena, 0, 2);
        let back = rotate_right(&mut arena, top, 0);
        assert_eq!(back, 0);
        assert_eq!(arena, before);
    }

    #[test]
    fn rotation_patches_parent_slot() {
        let mut arena = right_heavy();
        // Rotate the right subtree only; the root must now point at 15.
        let top = rotate_right(&mut arena, 2, 3);
        assert_eq!(top, 3);
        assert_eq!(arena[0].r, Some(3));
        assert_eq!(arena[3].p, Some(0));
        assert_eq!(arena[3].r, Some(2));
        assert_eq!(arena[2].l, None);
        assert_eq!(inorder(&arena, Some(0)), vec![5, 10, 15, 20, 25]);
    }
}
