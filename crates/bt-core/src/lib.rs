//! Deterministic behavior-tree kernel primitives.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod behavior;
pub mod status;
pub mod tick;

pub use behavior::Behavior;
pub use status::{Status, StatusSet};
pub use tick::TickContext;
