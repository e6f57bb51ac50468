//! Grid layout of a tree for printing.
//!
//! A tree of height `h` is laid out on `h` rows and `2^h - 1` columns. The
//! root sits in the middle column; each child is offset from its parent by
//! half the remaining span, so every node gets its own column and siblings
//! are placed symmetrically.
//!
//! ```text
//!                20(B)
//!      10(R)               30(R)
//! ```
//!
//! Cells are kept in a sparse coordinate map; only occupied cells are stored.
//! Columns are `u64` so the arithmetic is the same on every target.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::types::{Color, Key, RbNodeLike};
use crate::util::{get_l, get_r, height};

/// What a blank cell prints as.
const BLANK: &str = "     ";

/// One occupied grid position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    pub key: Key,
    pub color: Color,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.key, self.color.letter())
    }
}

/// Rendered tree: `height` rows by `width` columns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: u64,
    cells: BTreeMap<(usize, u64), Cell>,
}

impl Grid {
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> u64 {
        self.width
    }

    /// Number of occupied cells, equal to the number of nodes laid out.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize, col: u64) -> Option<&Cell> {
        self.cells.get(&(row, col))
    }

    /// Occupied cells as `((row, col), cell)`, row-major.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, u64), &Cell)> + '_ {
        self.cells.iter().map(|(pos, cell)| (*pos, cell))
    }

    /// Dense row-major copy of the grid.
    pub fn rows(&self) -> Vec<Vec<Option<Cell>>> {
        (0..self.height)
            .map(|row| (0..self.width).map(|col| self.get(row, col).copied()).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                match self.get(row, col) {
                    Some(cell) => write!(f, "{cell} ")?,
                    None => f.write_str(BLANK)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct GridView {
    height: usize,
    width: u64,
    rows: Vec<Vec<Option<Cell>>>,
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GridView {
            height: self.height,
            width: self.width,
            rows: self.rows(),
        }
        .serialize(serializer)
    }
}

/// Column span for a tree of height `h`: `W(1) = 1`, `W(h) = 2 W(h-1) + 1`.
///
/// Arena indices are `u32`, so a red-black tree never gets taller than 64
/// levels and the span always fits in a `u64`.
pub fn width(h: usize) -> u64 {
    if h == 0 {
        return 0;
    }
    let h = h.min(u64::BITS as usize) as u32;
    u64::MAX >> (u64::BITS - h)
}

/// Lays out the tree rooted at `root`. Does not touch the arena.
pub fn layout<N: RbNodeLike>(arena: &[N], root: Option<u32>) -> Grid {
    let h = height(arena, root);
    let w = width(h);
    let mut grid = Grid {
        height: h,
        width: w,
        cells: BTreeMap::new(),
    };
    if let Some(root) = root {
        place(arena, &mut grid.cells, root, w / 2, 0, h);
    }
    grid
}

fn place<N: RbNodeLike>(
    arena: &[N],
    cells: &mut BTreeMap<(usize, u64), Cell>,
    node: u32,
    col: u64,
    row: usize,
    remaining: usize,
) {
    let n = &arena[node as usize];
    cells.insert(
        (row, col),
        Cell {
            key: n.key(),
            color: n.color(),
        },
    );
    // A node with a child always has at least two levels left.
    if remaining < 2 {
        return;
    }
    let offset = 1u64 << (remaining - 2);
    if let Some(l) = get_l(arena, node) {
        place(arena, cells, l, col - offset, row + 1, remaining - 1);
    }
    if let Some(r) = get_r(arena, node) {
        place(arena, cells, r, col + offset, row + 1, remaining - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::RbNode;

    #[test]
    fn width_follows_recurrence() {
        assert_eq!(width(0), 0);
        let mut prev = width(1);
        assert_eq!(prev, 1);
        for h in 2..=20 {
            let w = width(h);
            assert_eq!(w, 2 * prev + 1);
            prev = w;
        }
        assert_eq!(width(64), u64::MAX);
    }

    #[test]
    fn tall_tree_columns_fit_in_u64() {
        // A 40-level left spine: offsets past 2^32 on the upper levels.
        let mut arena: Vec<RbNode> = (0..40).rev().map(RbNode::new).collect();
        for i in 1..40u32 {
            arena[i as usize - 1].l = Some(i);
            arena[i as usize].p = Some(i - 1);
        }
        let grid = layout(&arena, Some(0));
        assert_eq!(grid.height(), 40);
        assert_eq!(grid.width(), (1u64 << 40) - 1);
        assert_eq!(grid.len(), 40);
        assert_eq!(grid.get(0, (1u64 << 39) - 1).map(|c| c.key), Some(39));
        assert_eq!(grid.get(1, (1u64 << 38) - 1).map(|c| c.key), Some(38));
        assert_eq!(grid.get(39, 0).map(|c| c.key), Some(0));
    }

    #[test]
    fn cell_prints_key_and_color_letter() {
        let cell = Cell {
            key: -4,
            color: Color::Red,
        };
        assert_eq!(cell.to_string(), "-4(R)");
    }

    #[test]
    fn empty_grid_prints_nothing() {
        let grid = Grid::default();
        assert_eq!(grid.to_string(), "");
        assert!(grid.rows().is_empty());
    }
}
