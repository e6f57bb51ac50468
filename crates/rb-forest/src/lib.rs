//! Arena-based red-black tree with a grid layout printer.
//!
//! Keys are inserted one at a time; after each insertion the tree is
//! rebalanced so that its height stays within `2 log2(n + 1)`, and it can be
//! laid out on a character grid to watch the shape change.
//!
//! Instead of raw pointers, all "pointers" are `Option<u32>` indices into a
//! `Vec<RbNode>` arena owned by [`RbTree`]. The parent link is just another
//! index, so there is no shared ownership anywhere.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Key`], [`Color`], [`Node`] and [`RbNodeLike`] traits |
//! [`node`] | [`RbNode`] |
//! [`insert`] | ordered insertion of a red leaf |
//! [`rotate`] | single left/right rotations |
//! [`fixup`] | insertion rebalancing: recolor and restructure |
//! [`layout`] | [`Grid`] layout and text rendering |
//! [`validate`] | red-black invariant checker |
//! [`util`] | `first`, `next`, `find`, `height`, `inorder` |
//! [`tree`] | [`RbTree`] aggregate |

pub mod error;
pub mod fixup;
pub mod insert;
pub mod layout;
pub mod node;
pub mod rotate;
pub mod tree;
pub mod types;
pub mod util;
pub mod validate;

pub use error::{InvariantError, TreeError};
pub use layout::{layout, Cell, Grid};
pub use node::RbNode;
pub use rotate::{rotate_left, rotate_right};
pub use tree::RbTree;
pub use types::{Color, Key, Node, RbNodeLike};
pub use validate::assert_red_black_tree;
