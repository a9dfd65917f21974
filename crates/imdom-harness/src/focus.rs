#![forbid(unsafe_code)]

//! Single-owner focus registry double.

use imdom_core::{FocusCheck, FocusQuery, FocusRegistry, WidgetId};

/// A focus registry with one owner slot and full call recording.
#[derive(Debug, Default)]
pub struct SingleOwnerFocus {
    owner: Option<WidgetId>,
    deny_focus: bool,
    steals: Vec<WidgetId>,
    releases: u32,
    suppress_calls: Vec<(bool, bool)>,
}

impl SingleOwnerFocus {
    /// Current logical-focus owner.
    #[must_use]
    pub fn owner(&self) -> Option<WidgetId> {
        self.owner
    }

    /// Hand logical focus to `id` directly (as a click elsewhere in the UI
    /// would).
    pub fn set_owner(&mut self, id: Option<WidgetId>) {
        self.owner = id;
    }

    /// Make `check_focus` report `allow_focus: false` (e.g. a modal is up).
    pub fn deny_focus(&mut self, deny: bool) {
        self.deny_focus = deny;
    }

    /// All `steal` calls, in order.
    #[must_use]
    pub fn steals(&self) -> &[WidgetId] {
        &self.steals
    }

    /// Number of `release` calls.
    #[must_use]
    pub fn releases(&self) -> u32 {
        self.releases
    }

    /// All `suppress_directional_nav` calls as `(enabled, vertical)`.
    #[must_use]
    pub fn suppress_calls(&self) -> &[(bool, bool)] {
        &self.suppress_calls
    }
}

impl FocusRegistry for SingleOwnerFocus {
    fn check_focus(&mut self, query: FocusQuery) -> FocusCheck {
        FocusCheck {
            allow_focus: !self.deny_focus,
            focused: self.owner == Some(query.id),
        }
    }

    fn steal(&mut self, id: WidgetId) {
        self.owner = Some(id);
        self.steals.push(id);
    }

    fn release(&mut self) {
        self.owner = None;
        self.releases += 1;
    }

    fn suppress_directional_nav(&mut self, enabled: bool, vertical: bool) {
        self.suppress_calls.push((enabled, vertical));
    }
}
