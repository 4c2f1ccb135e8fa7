//! Tooling primitives for behavior-tree monitoring.
//!
//! This crate is intentionally "dumb data": snapshots and visit traces a
//! dashboard or test can consume. It only reads the tree's public
//! introspection surface and never influences a traversal.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod recorder;
pub mod snapshot;

pub use recorder::{TickTrace, VisitRecorder};
pub use snapshot::{NodeSnapshot, TreeSnapshot};
