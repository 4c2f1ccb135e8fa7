#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use bt_core::Status;
use bt_engine::{NodeId, Tree};

/// Point-in-time view of one node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeSnapshot {
    pub id: u32,
    pub name: String,
    pub status: Status,
    pub children: Vec<u32>,
    pub resume_index: Option<usize>,
}

/// Read-only view of a whole tree, in node id order.
///
/// Captured after an external tick settles; this is the surface a dashboard
/// consumes. Capturing never affects the traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TreeSnapshot {
    pub tick: u64,
    pub nodes: Vec<NodeSnapshot>,
}

impl TreeSnapshot {
    pub fn capture<C>(tree: &Tree<C>, tick: u64) -> Self
    where
        C: 'static,
    {
        let nodes = tree
            .ids()
            .map(|id| NodeSnapshot {
                id: id.index() as u32,
                name: tree.name(id).to_string(),
                status: tree.status(id),
                children: tree.children(id).iter().map(|c| c.index() as u32).collect(),
                resume_index: tree.resume_index(id),
            })
            .collect();
        Self { tick, nodes }
    }

    pub fn node(&self, id: NodeId) -> Option<&NodeSnapshot> {
        self.nodes.get(id.index())
    }
}
