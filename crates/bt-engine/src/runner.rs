use bt_core::{Status, TickContext};

use crate::tree::{NodeId, Tree};

/// Drives a tree from a fixed root, one full tick per call.
///
/// The runner never resets the tree between ticks; whether a composite
/// resumes or restarts is its policy's decision.
pub struct Runner {
    root: NodeId,
    last: Status,
}

impl Runner {
    pub fn new(root: NodeId) -> Self {
        Self {
            root,
            last: Status::Invalid,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn last_status(&self) -> Status {
        self.last
    }

    pub fn run<C>(&mut self, tree: &mut Tree<C>, ctx: &TickContext, data: &mut C) -> Status
    where
        C: 'static,
    {
        let status = tree.tick(self.root, ctx, data).finish();
        tracing::debug!(
            tick = ctx.tick,
            root = %tree.name(self.root),
            status = %status,
            "tick settled"
        );
        self.last = status;
        status
    }
}
