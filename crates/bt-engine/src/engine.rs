use bt_core::{Status, StatusSet, TickContext};

use crate::tree::{NodeId, NodeKind, Tree};

/// Policy data for the generic composite tick algorithm.
///
/// - `tick_again`: statuses that persist the resume index, so the next tick
///   re-enters at the same child instead of the first.
/// - `advance`: statuses that move the traversal to the next child.
/// - `bare`: the status reported by a composite with no children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickPolicy {
    pub tick_again: StatusSet,
    pub advance: StatusSet,
    pub bare: Status,
}

#[derive(Clone, Copy)]
struct Frame {
    node: NodeId,
    cursor: usize,
    policy: TickPolicy,
}

/// One tick of a subtree, observed as a lazy stream of visited node ids.
///
/// The stream is finite, single-pass, depth-first pre-order: a composite
/// yields itself and then forwards whatever its visited children yield, a
/// leaf yields itself right after its behavior runs, and a composite with no
/// children yields nothing. Child behaviors execute only as the stream is
/// pulled; dropping the stream early abandons the rest of the traversal, so
/// callers that only want the terminal status should use [`finish`].
///
/// [`finish`]: TickRun::finish
pub struct TickRun<'t, C>
where
    C: 'static,
{
    tree: &'t mut Tree<C>,
    ctx: &'t TickContext,
    data: &'t mut C,
    root: NodeId,
    stack: Vec<Frame>,
    /// Status bubbled up by the subtree that just completed.
    settled: Option<Status>,
    pending: Option<NodeId>,
    finished: bool,
}

impl<C> Tree<C>
where
    C: 'static,
{
    /// Tick the subtree under `root` once.
    ///
    /// Nothing executes until the returned stream is pulled. As a side
    /// effect of pulling it to the end, every visited node's `status` is
    /// updated and composite resume indices are persisted or cleared per
    /// their policy.
    pub fn tick<'t>(
        &'t mut self,
        root: NodeId,
        ctx: &'t TickContext,
        data: &'t mut C,
    ) -> TickRun<'t, C> {
        assert!(root.index() < self.len(), "unknown node id {root:?}");
        TickRun {
            tree: self,
            ctx,
            data,
            root,
            stack: Vec::new(),
            settled: None,
            pending: Some(root),
            finished: false,
        }
    }
}

impl<'t, C> TickRun<'t, C>
where
    C: 'static,
{
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Drain the stream and return the root's terminal status.
    pub fn finish(mut self) -> Status {
        while self.next().is_some() {}
        self.tree.status(self.root)
    }

    /// Apply a completed child's status to the composite on top of the
    /// stack, advancing, stopping, or completing it.
    fn settle(&mut self, status: Status) {
        let Some(mut frame) = self.stack.pop() else {
            // The root subtree completed.
            self.finished = true;
            return;
        };

        let node = self.tree.node_mut(frame.node);
        if frame.policy.advance.contains(status) {
            frame.cursor += 1;
            if frame.cursor == node.children.len() {
                // Every child advanced; the composite takes the last
                // child's status and restarts from the top next tick.
                node.status = status;
                node.resume = None;
                tracing::trace!(node = %node.name, status = %status, "composite completed");
                self.settled = Some(status);
            } else {
                node.resume = Some(frame.cursor);
                self.stack.push(frame);
            }
        } else {
            node.status = status;
            node.resume = if frame.policy.tick_again.contains(status) {
                Some(frame.cursor)
            } else {
                None
            };
            tracing::trace!(
                node = %node.name,
                status = %status,
                resume = ?node.resume,
                "composite stopped"
            );
            self.settled = Some(status);
        }
    }

    /// Begin visiting `id`. Returns the id to yield, or `None` when the
    /// node produced a status without being observable (empty composite).
    fn enter(&mut self, id: NodeId) -> Option<NodeId> {
        let node = self.tree.node_mut(id);
        match &mut node.kind {
            NodeKind::Leaf(behavior) => {
                let status = behavior.tick(self.ctx, self.data);
                node.status = status;
                tracing::trace!(node = %node.name, status = %status, "leaf ticked");
                self.settled = Some(status);
                Some(id)
            }
            NodeKind::Composite(kind) => {
                let policy = kind.policy();
                if node.children.is_empty() {
                    node.status = policy.bare;
                    self.settled = Some(policy.bare);
                    return None;
                }
                let start = start_index(policy, node.status, node.resume, node.children.len());
                self.stack.push(Frame {
                    node: id,
                    cursor: start,
                    policy,
                });
                Some(id)
            }
        }
    }
}

impl<'t, C> Iterator for TickRun<'t, C>
where
    C: 'static,
{
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        loop {
            if self.finished {
                return None;
            }

            if let Some(status) = self.settled.take() {
                self.settle(status);
                continue;
            }

            let id = match self.pending.take() {
                Some(root) => root,
                None => {
                    let Some(frame) = self.stack.last() else {
                        unreachable!("tick machine idle without pending work");
                    };
                    self.tree.node(frame.node).children[frame.cursor]
                }
            };

            if let Some(visited) = self.enter(id) {
                return Some(visited);
            }
        }
    }
}

/// Where this tick begins: the persisted resume index when the previous
/// outcome is one the policy re-ticks, the first child otherwise.
fn start_index(policy: TickPolicy, previous: Status, resume: Option<usize>, len: usize) -> usize {
    match resume {
        Some(index) if policy.tick_again.contains(previous) => {
            assert!(
                index < len,
                "resume index {index} out of range for {len} children"
            );
            index
        }
        _ => 0,
    }
}
