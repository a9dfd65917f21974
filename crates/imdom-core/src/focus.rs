#![forbid(unsafe_code)]

//! Logical-focus arbitration.
//!
//! The registry decides, fresh every tick, which single widget owns logical
//! focus across the whole UI (clicks and keyboard navigation resolve here).
//! Widgets consume the verdict; they never own the arbitration.

use crate::id::WidgetId;

/// Per-tick focus query descriptor for one widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusQuery {
    /// The widget asking.
    pub id: WidgetId,
    /// Sticky widgets keep logical focus until something else takes it,
    /// rather than dropping it when the pointer leaves.
    pub sticky: bool,
}

/// The registry's verdict for one widget on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusCheck {
    /// Whether the widget may present a focusable native control this tick
    /// (false while e.g. a modal elsewhere swallows focus).
    pub allow_focus: bool,
    /// Whether the widget owns logical focus this tick.
    pub focused: bool,
}

/// The single process-wide focus-ownership registry.
pub trait FocusRegistry {
    /// Evaluate focus for `query` this tick.
    fn check_focus(&mut self, query: FocusQuery) -> FocusCheck;

    /// Take logical focus on behalf of `id` (e.g. the platform tabbed into
    /// the widget's native control behind the UI's back).
    fn steal(&mut self, id: WidgetId);

    /// Release logical focus; no widget owns it afterwards.
    fn release(&mut self);

    /// Suppress keyboard navigation in the surrounding UI while a widget is
    /// consuming keystrokes. `vertical` additionally suppresses up/down
    /// movement (multi-line fields own those keys).
    fn suppress_directional_nav(&mut self, enabled: bool, vertical: bool);
}
