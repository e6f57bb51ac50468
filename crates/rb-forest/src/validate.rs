use crate::error::InvariantError;
use crate::types::RbNodeLike;
use crate::util::{first, get_l, get_p, get_r, next};

/// Checks every red-black and search-tree invariant of the tree at `root`.
///
/// Returns the root's black-height: black nodes on any path from the root
/// down to an absent child, not counting the root itself.
pub fn assert_red_black_tree<N: RbNodeLike>(
    arena: &[N],
    root: Option<u32>,
) -> Result<usize, InvariantError> {
    let Some(root) = root else {
        return Ok(0);
    };

    if get_p(arena, root).is_some() {
        return Err(InvariantError::RootHasParent(root));
    }
    if !arena[root as usize].is_black() {
        return Err(InvariantError::RootNotBlack(root));
    }

    let below_root = black_height(arena, Some(root))? - 1;

    let mut curr = first(arena, Some(root));
    let mut prev_node: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev_node {
            if arena[prev as usize].key() > arena[i as usize].key() {
                return Err(InvariantError::OrderViolated(i));
            }
        }
        prev_node = Some(i);
        curr = next(arena, i);
    }

    Ok(below_root)
}

/// Black nodes on every path from `node` down, counting `node` itself.
fn black_height<N: RbNodeLike>(arena: &[N], node: Option<u32>) -> Result<usize, InvariantError> {
    let Some(node) = node else {
        return Ok(0);
    };

    let l = get_l(arena, node);
    let r = get_r(arena, node);

    for child in [l, r].into_iter().flatten() {
        if get_p(arena, child) != Some(node) {
            return Err(InvariantError::BrokenParentLink(node));
        }
    }

    let black = arena[node as usize].is_black();
    if !black {
        let red_child = [l, r]
            .into_iter()
            .flatten()
            .any(|c| !arena[c as usize].is_black());
        if red_child {
            return Err(InvariantError::RedRed(node));
        }
    }

    let lh = black_height(arena, l)?;
    let rh = black_height(arena, r)?;
    if lh != rh {
        return Err(InvariantError::BlackHeightMismatch(node));
    }

    Ok(lh + usize::from(black))
}
