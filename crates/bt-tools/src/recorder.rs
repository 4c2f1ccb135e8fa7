use bt_core::{Status, TickContext};
use bt_engine::{NodeId, Tree};

/// Everything one external tick visited, and how it settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickTrace {
    pub tick: u64,
    pub visited: Vec<NodeId>,
    pub status: Status,
}

/// Drives ticks and accumulates one [`TickTrace`] per tick.
#[derive(Debug, Default)]
pub struct VisitRecorder {
    pub ticks: Vec<TickTrace>,
}

impl VisitRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drive one full tick, recording the visit order and terminal status.
    pub fn record<C>(
        &mut self,
        tree: &mut Tree<C>,
        root: NodeId,
        ctx: &TickContext,
        data: &mut C,
    ) -> Status
    where
        C: 'static,
    {
        let mut run = tree.tick(root, ctx, data);
        let visited: Vec<NodeId> = run.by_ref().collect();
        let status = run.finish();
        self.ticks.push(TickTrace {
            tick: ctx.tick,
            visited,
            status,
        });
        status
    }

    pub fn last(&self) -> Option<&TickTrace> {
        self.ticks.last()
    }
}
