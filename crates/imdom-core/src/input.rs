#![forbid(unsafe_code)]

//! Edge-triggered input polling and consumption.
//!
//! The polling layer owns raw platform events; widgets query edges
//! ("was this key pressed since last tick?") and consume what they handle
//! so the surrounding UI does not react to the same event twice.

use crate::geometry::VirtualRect;

/// Keys a text widget polls for. Ordinary typing never comes through here;
/// it lands in the native field directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Submit.
    Enter,
    /// Clear or cancel.
    Esc,
}

/// Options for an edge-triggered key query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyOpts {
    /// Request pointer-lock entry from inside the platform event handler
    /// when the edge fires. Pointer lock can only be granted within a user
    /// gesture, so the request cannot be deferred to the tick.
    pub pointer_lock_on_event: bool,
}

/// Options for a click query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickQuery {
    /// Observe without consuming.
    pub peek: bool,
}

/// The input polling layer.
pub trait InputPoll {
    /// True once per physical key press (down edge). Consumes the edge
    /// unless the backend is told otherwise.
    fn key_down_edge(&mut self, key: Key, opts: KeyOpts) -> bool;

    /// True once per physical key release (up edge).
    fn key_up_edge(&mut self, key: Key, opts: KeyOpts) -> bool;

    /// Whether an unconsumed click happened this tick.
    fn click(&mut self, query: ClickQuery) -> bool;

    /// Consume any clicks landing inside `bounds` so widgets underneath do
    /// not also receive them.
    fn consume_clicks_in(&mut self, bounds: VirtualRect);

    /// Consume all remaining keyboard input this tick. Called while a native
    /// field holds focus: the field already received the keystrokes.
    fn eat_keyboard_input(&mut self);

    /// Whether the pointer is currently locked.
    fn pointer_locked(&self) -> bool;

    /// Request pointer lock. `reason` is a diagnostic tag.
    fn pointer_lock_enter(&mut self, reason: &'static str);

    /// Exit pointer lock.
    fn pointer_lock_exit(&mut self);
}
