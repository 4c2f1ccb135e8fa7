use bt_core::{Status, StatusSet};

use crate::engine::TickPolicy;

/// Which sequence policy a composite runs.
///
/// Composite type is configuration, not code: every variant drives the same
/// traversal engine and differs only in the policy table it supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompositeKind {
    /// `Success` advances, `Running` pauses and resumes at the same child on
    /// the next tick, anything else restarts from the first child.
    Sequence,

    /// Like [`Sequence`](Self::Sequence), but `Failure` also resumes at the
    /// failed child; only `Invalid` (an outside reset) restarts from the
    /// first child. Progress past already-succeeded children is kept even
    /// while a later child keeps failing.
    SequenceWithMemory,

    /// Restarts evaluation from the first child on every tick, so an earlier
    /// child flipping to `Failure` stops the tick before a later `Running`
    /// child is re-ticked, interrupting the running branch.
    ReactiveSequence,
}

impl CompositeKind {
    pub fn policy(self) -> TickPolicy {
        match self {
            CompositeKind::Sequence => TickPolicy {
                tick_again: StatusSet::of(&[Status::Running]),
                advance: StatusSet::of(&[Status::Success]),
                bare: Status::Success,
            },
            CompositeKind::SequenceWithMemory => TickPolicy {
                tick_again: StatusSet::of(&[Status::Running, Status::Failure]),
                advance: StatusSet::of(&[Status::Success]),
                bare: Status::Success,
            },
            CompositeKind::ReactiveSequence => TickPolicy {
                tick_again: StatusSet::EMPTY,
                advance: StatusSet::of(&[Status::Success]),
                bare: Status::Success,
            },
        }
    }

    pub fn memory(self) -> bool {
        matches!(self, CompositeKind::SequenceWithMemory)
    }

    pub fn reactive(self) -> bool {
        matches!(self, CompositeKind::ReactiveSequence)
    }
}
