#![forbid(unsafe_code)]

//! Stable widget identity.

use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque stable key for one widget instance.
///
/// Assigned once at instance creation and never changed; the focus registry
/// and surface key their per-widget state on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

impl WidgetId {
    /// Allocate a fresh process-unique id.
    #[must_use]
    pub fn fresh() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw value, for diagnostics and registry keys.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "eb{}", self.0)
    }
}
