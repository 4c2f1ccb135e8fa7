use bt_core::{Behavior, Status};

use crate::composite::CompositeKind;
use crate::error::TreeError;

/// Identity of a node within its [`Tree`].
///
/// Ids are only handed out by the tree that owns the node; they stay valid
/// for the lifetime of the tree (nodes are never removed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

pub(crate) enum NodeKind<C>
where
    C: 'static,
{
    Leaf(Box<dyn Behavior<C>>),
    Composite(CompositeKind),
}

pub(crate) struct Node<C>
where
    C: 'static,
{
    pub(crate) name: String,
    pub(crate) kind: NodeKind<C>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) status: Status,
    pub(crate) resume: Option<usize>,
    pub(crate) attached: bool,
}

/// Arena of behavior-tree nodes.
///
/// Child lists are fixed at construction and order is significant: it is the
/// visitation order and the priority order of the composite policies. Every
/// node starts at `Status::Invalid` with no resume index.
pub struct Tree<C>
where
    C: 'static,
{
    nodes: Vec<Node<C>>,
}

impl<C> Default for Tree<C>
where
    C: 'static,
{
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<C> Tree<C>
where
    C: 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leaf(&mut self, name: impl Into<String>, behavior: impl Behavior<C>) -> NodeId {
        self.push(name.into(), NodeKind::Leaf(Box::new(behavior)), Vec::new())
    }

    /// Create a composite over `children`, in the given order.
    ///
    /// Each child may appear under at most one parent; the child list cannot
    /// change afterwards.
    pub fn composite(
        &mut self,
        name: impl Into<String>,
        kind: CompositeKind,
        children: Vec<NodeId>,
    ) -> Result<NodeId, TreeError> {
        for (i, &child) in children.iter().enumerate() {
            if child.index() >= self.nodes.len() {
                return Err(TreeError::UnknownNode(child));
            }
            if self.nodes[child.index()].attached || children[..i].contains(&child) {
                return Err(TreeError::AlreadyAttached(child));
            }
        }
        for &child in &children {
            self.nodes[child.index()].attached = true;
        }
        Ok(self.push(name.into(), NodeKind::Composite(kind), children))
    }

    fn push(&mut self, name: String, kind: NodeKind<C>, children: Vec<NodeId>) -> NodeId {
        let id = u32::try_from(self.nodes.len()).expect("node capacity exceeded");
        self.nodes.push(Node {
            name,
            kind,
            children,
            status: Status::Invalid,
            resume: None,
            attached: false,
        });
        NodeId(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.node(id).name
    }

    pub fn status(&self, id: NodeId) -> Status {
        self.node(id).status
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// The persisted resume index, when the node paused in a state its
    /// policy resumes from.
    pub fn resume_index(&self, id: NodeId) -> Option<usize> {
        self.node(id).resume
    }

    /// `Some` for composites, `None` for leaves.
    pub fn kind(&self, id: NodeId) -> Option<CompositeKind> {
        match &self.node(id).kind {
            NodeKind::Composite(kind) => Some(*kind),
            NodeKind::Leaf(_) => None,
        }
    }

    pub fn memory(&self, id: NodeId) -> bool {
        self.kind(id).is_some_and(CompositeKind::memory)
    }

    pub fn reactive(&self, id: NodeId) -> bool {
        self.kind(id).is_some_and(CompositeKind::reactive)
    }

    /// Reset a subtree from outside: statuses back to `Invalid`, resume
    /// indices cleared, leaf reset hooks invoked.
    ///
    /// This is the only interruption channel; composites observe it as
    /// `Invalid` and restart per their policy on the next tick.
    pub fn reset(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            let node = self.node_mut(id);
            node.status = Status::Invalid;
            node.resume = None;
            if let NodeKind::Leaf(behavior) = &mut node.kind {
                behavior.reset();
            }
            stack.extend_from_slice(&node.children);
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<C> {
        self.nodes
            .get(id.index())
            .unwrap_or_else(|| panic!("unknown node id {id:?}"))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<C> {
        self.nodes
            .get_mut(id.index())
            .unwrap_or_else(|| panic!("unknown node id {id:?}"))
    }
}
