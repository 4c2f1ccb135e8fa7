use thiserror::Error;

use crate::tree::NodeId;

/// Structural misuse caught while assembling a tree.
///
/// Violations detected after assembly (ticking an id from another tree, a
/// stored resume index out of range) are panics instead: by then the
/// structure contract is already broken and recovery would hide corruption.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("unknown node id {0:?}")]
    UnknownNode(NodeId),

    #[error("node {0:?} already has a parent")]
    AlreadyAttached(NodeId),
}
