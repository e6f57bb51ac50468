//! Core type definitions.
//!
//! Nodes live in a caller-owned [`Vec`] arena. Each "pointer" is an
//! `Option<u32>` index into that arena, so the parent back-link is a plain
//! index and never an owning reference. All tree-manipulation functions take
//! the arena as `&mut [N]` / `&[N]` and work with indices.

use serde::Serialize;

/// Ordered scalar key stored in every node.
pub type Key = i64;

/// Node color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Single-letter tag used by the grid printer.
    pub fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Black => 'B',
        }
    }

    pub fn is_black(self) -> bool {
        self == Color::Black
    }
}

/// Tree links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Red-black specific node behavior.
///
/// Everything that walks the tree (insertion, rotations, fixup, layout,
/// validation) is written against this trait rather than the concrete
/// [`RbNode`](crate::node::RbNode).
pub trait RbNodeLike: Node {
    fn key(&self) -> Key;
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);

    fn is_black(&self) -> bool {
        self.color().is_black()
    }
}
