use std::collections::TryReserveError;

use thiserror::Error;

/// Fatal failures while growing the tree.
///
/// Both variants leave the tree exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("node allocation failed")]
    AllocationFailed,
    #[error("node arena is full ({0} nodes)")]
    CapacityExceeded(usize),
}

impl From<TryReserveError> for TreeError {
    fn from(_: TryReserveError) -> Self {
        TreeError::AllocationFailed
    }
}

/// A red-black or search-tree invariant that does not hold.
///
/// The payload is the arena index of the offending node.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("root {0} has a parent")]
    RootHasParent(u32),
    #[error("root {0} is not black")]
    RootNotBlack(u32),
    #[error("red node {0} has a red child")]
    RedRed(u32),
    #[error("black height mismatch under node {0}")]
    BlackHeightMismatch(u32),
    #[error("broken parent link on child of node {0}")]
    BrokenParentLink(u32),
    #[error("node order violated at node {0}")]
    OrderViolated(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_reserve_maps_to_allocation_failed() {
        let err = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
        assert_eq!(TreeError::from(err), TreeError::AllocationFailed);
    }

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(TreeError::AllocationFailed.to_string(), "node allocation failed");
        assert_eq!(
            TreeError::CapacityExceeded(7).to_string(),
            "node arena is full (7 nodes)"
        );
        assert_eq!(
            InvariantError::RedRed(3).to_string(),
            "red node 3 has a red child"
        );
    }
}
