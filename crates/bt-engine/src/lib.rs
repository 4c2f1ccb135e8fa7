//! Behavior-tree composite tick engine built on `bt-core`.
//!
//! Trees are arenas of named nodes. Composites carry no traversal code of
//! their own: a [`CompositeKind`] is a table of status sets fed to one
//! generic, resumable tick algorithm, and a tick is observed as a lazy
//! depth-first stream of visited node ids.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod composite;
pub mod engine;
pub mod error;
pub mod leaves;
pub mod runner;
pub mod tree;

pub use composite::CompositeKind;
pub use engine::{TickPolicy, TickRun};
pub use error::TreeError;
pub use leaves::{Condition, Task};
pub use runner::Runner;
pub use tree::{NodeId, Tree};
