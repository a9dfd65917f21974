#![forbid(unsafe_code)]

//! The per-tick frame counter.

/// Monotonically increasing per-tick counter owned by the host frame loop.
///
/// Widgets read it to detect frame gaps (a widget that did not run on the
/// immediately preceding tick treats its next run as a reset) and the
/// liveness sweep reads it to find stale bindings.
pub trait FrameClock {
    /// Index of the tick currently executing. Increases by exactly one per
    /// tick and never decreases.
    fn frame_index(&self) -> u64;
}
