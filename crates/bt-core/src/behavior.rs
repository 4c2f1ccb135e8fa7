use crate::{Status, TickContext};

/// Leaf contract.
///
/// `C` is the application's shared context (world, blackboard, whatever the
/// embedding provides); the runtime never inspects it. A leaf may stay
/// `Running` across any number of ticks, keeping its own internal state.
pub trait Behavior<C>: 'static {
    fn tick(&mut self, ctx: &TickContext, data: &mut C) -> Status;

    /// Called when the subtree owning this leaf is reset from outside.
    fn reset(&mut self) {}
}
