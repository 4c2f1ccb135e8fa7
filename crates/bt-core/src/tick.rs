/// Per-invocation tick data.
///
/// The caller owns the cadence: a tick may run every frame, on a control
/// loop period, or on demand. The engine only threads this through to leaf
/// behaviors and tooling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub tick: u64,
    pub dt_seconds: f32,
}
