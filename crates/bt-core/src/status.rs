use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of ticking a node.
///
/// `Invalid` is not a normal outcome: it is the state of a node that has
/// never been ticked or was reset from outside, and it is how an external
/// interruption propagates through a running tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    Success,
    Failure,
    Running,
    Invalid,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Success => "Success",
            Status::Failure => "Failure",
            Status::Running => "Running",
            Status::Invalid => "Invalid",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Invalid
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of `Status` values.
///
/// Composite policies are expressed entirely as membership tests against
/// these sets; statuses have no ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusSet(u8);

impl StatusSet {
    pub const EMPTY: StatusSet = StatusSet(0);

    const fn bit(status: Status) -> u8 {
        1 << status as u8
    }

    pub const fn of(statuses: &[Status]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < statuses.len() {
            bits |= Self::bit(statuses[i]);
            i += 1;
        }
        StatusSet(bits)
    }

    pub const fn contains(self, status: Status) -> bool {
        self.0 & Self::bit(status) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}
