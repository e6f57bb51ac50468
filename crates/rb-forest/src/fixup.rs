//! Insertion rebalancing.
//!
//! [`fixup`] walks from a freshly attached red leaf toward the root. At each
//! step exactly one of these applies to the current node `z`:
//!
//! - `z` has no parent: paint it black and stop.
//! - `z` is black or has a black parent: nothing is violated, climb to the
//!   top and return it.
//! - double red with a red uncle: [`recolor`], continue from the
//!   grandparent.
//! - double red with a black (or absent) uncle: [`restructure`], continue
//!   from the new local subtree root, which is black and only climbs.
//!
//! Recoloring may cascade; restructuring happens at most once per insert.

use tracing::trace;

use crate::rotate::{rotate_left, rotate_right};
use crate::types::{Color, RbNodeLike};
use crate::util::{get_l, get_p, get_r, set_color, top};

/// Shape of the `z` / parent / grandparent chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Case {
    LeftLeft,
    RightRight,
    LeftRight,
    RightLeft,
}

impl Case {
    fn classify<N: RbNodeLike>(arena: &[N], z: u32, p: u32, g: u32) -> Self {
        let z_left = get_l(arena, p) == Some(z);
        let p_left = get_l(arena, g) == Some(p);
        match (p_left, z_left) {
            (true, true) => Case::LeftLeft,
            (false, false) => Case::RightRight,
            (true, false) => Case::LeftRight,
            (false, true) => Case::RightLeft,
        }
    }
}

/// Sibling of `p` under `g`.
fn uncle<N: RbNodeLike>(arena: &[N], p: u32, g: u32) -> Option<u32> {
    if get_l(arena, g) == Some(p) {
        get_r(arena, g)
    } else {
        get_l(arena, g)
    }
}

/// Restores red-black invariants after `z` was attached as a red leaf.
///
/// Returns the index of the tree's root.
pub fn fixup<N: RbNodeLike>(arena: &mut [N], mut z: u32) -> u32 {
    loop {
        let Some(p) = get_p(arena, z) else {
            set_color(arena, z, Color::Black);
            trace!(root = z, "fixup reached root");
            return z;
        };

        if arena[z as usize].is_black() || arena[p as usize].is_black() {
            let root = top(arena, p);
            trace!(at = z, root, "fixup settled");
            return root;
        }

        // Double red. A red parent is never the root once the root is black,
        // but recolor cascades re-derive this at every level, so check.
        let Some(g) = get_p(arena, p) else {
            set_color(arena, p, Color::Black);
            z = p;
            continue;
        };

        let u = uncle(arena, p, g);
        z = match u {
            Some(u) if !arena[u as usize].is_black() => recolor(arena, p, u, g),
            _ => restructure(arena, z, p, g),
        };
    }
}

/// Pushes the grandparent's blackness down to `p` and `u`. Returns `g`.
pub fn recolor<N: RbNodeLike>(arena: &mut [N], p: u32, u: u32, g: u32) -> u32 {
    trace!(parent = p, uncle = u, grandparent = g, "recolor");
    set_color(arena, p, Color::Black);
    set_color(arena, u, Color::Black);
    set_color(arena, g, Color::Red);
    g
}

/// Rotates `z`, `p` and `g` into a black node over two red children.
///
/// Returns the new local subtree root.
pub fn restructure<N: RbNodeLike>(arena: &mut [N], z: u32, p: u32, g: u32) -> u32 {
    let case = Case::classify(arena, z, p, g);
    trace!(node = z, parent = p, grandparent = g, ?case, "restructure");
    let pivot = match case {
        Case::LeftLeft => rotate_right(arena, g, p),
        Case::RightRight => rotate_left(arena, g, p),
        Case::LeftRight => {
            let z = rotate_left(arena, p, z);
            rotate_right(arena, g, z)
        }
        Case::RightLeft => {
            let z = rotate_right(arena, p, z);
            rotate_left(arena, g, z)
        }
    };
    set_color(arena, pivot, Color::Black);
    set_color(arena, g, Color::Red);
    pivot
}
