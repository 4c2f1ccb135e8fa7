use bt_core::{Behavior, Status, TickContext};

/// Leaf that maps a predicate over the application context to
/// `Success`/`Failure`. Conditions settle every tick; they are what makes a
/// reactive sequence able to interrupt a running branch.
pub struct Condition<F> {
    cond: F,
}

impl<F> Condition<F> {
    pub fn new(cond: F) -> Self {
        Self { cond }
    }
}

impl<F, C> Behavior<C> for Condition<F>
where
    F: FnMut(&TickContext, &C) -> bool + 'static,
    C: 'static,
{
    fn tick(&mut self, ctx: &TickContext, data: &mut C) -> Status {
        if (self.cond)(ctx, &*data) {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

/// Leaf that runs an arbitrary status-producing closure.
pub struct Task<F> {
    run: F,
}

impl<F> Task<F> {
    pub fn new(run: F) -> Self {
        Self { run }
    }
}

impl<F, C> Behavior<C> for Task<F>
where
    F: FnMut(&TickContext, &mut C) -> Status + 'static,
    C: 'static,
{
    fn tick(&mut self, ctx: &TickContext, data: &mut C) -> Status {
        (self.run)(ctx, data)
    }
}
