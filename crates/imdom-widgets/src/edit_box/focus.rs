#![forbid(unsafe_code)]

//! Focus reconciliation between logical and native focus.
//!
//! Logical focus is recomputed by the focus registry every tick; native
//! focus lives on a persistent platform object that the registry does not
//! control (tab order, popups, autofill all move it independently). This
//! module resolves each (logical, native) combination into one decision,
//! evaluated once per widget per tick.
//!
//! # Invariants
//!
//! - The decision is a pure function of the four inputs; side effects are
//!   applied by the caller.
//! - A registry verdict change always wins: native state is forced to match.
//! - Native focus moving to an unrelated control (e.g. a password-manager
//!   popup) is never touched.
//! - Deterministic: the same inputs yield the same decision every tick, so
//!   steady states produce no focus/blur churn.

use imdom_core::FocusCheck;

/// Where the platform's focus target currently is, relative to this widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NativeFocus {
    /// This widget's own field.
    ThisField,
    /// The surface (canvas/background) or this widget's trailing helper
    /// element.
    Surface,
    /// Some unrelated native control or popup.
    Other,
}

/// The action side of a focus decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FocusTransition {
    /// States agree; do nothing.
    Steady,
    /// Registry verdict flipped to focused; pull native focus to the field.
    ApplyLogicalFocus,
    /// Registry verdict flipped to unfocused; blur the field.
    ApplyLogicalBlur,
    /// The platform silently focused the field (e.g. tab key); steal
    /// logical focus on the widget's behalf.
    StealFromNative,
    /// Logically focused but the instance just (re)appeared; schedule a
    /// one-time native focus pull for when the field next binds.
    SchedulePull,
    /// Native focus fell back to the surface or the trailing helper;
    /// release logical focus.
    ReleaseToSurface,
    /// Native focus sits on an unrelated control; leave it alone.
    LeaveAlone,
}

/// Resolve one tick's focus decision.
///
/// Returns the widget's logical-focus flag for this tick and the transition
/// the caller must apply. Note that [`FocusTransition::ReleaseToSurface`]
/// keeps the flag true for the remainder of the current tick; the registry
/// reports the release on the next check.
pub(crate) fn reconcile(
    was_focused: bool,
    check: FocusCheck,
    native: NativeFocus,
    is_reset: bool,
) -> (bool, FocusTransition) {
    let native_focused = native == NativeFocus::ThisField;

    if was_focused != check.focused {
        // The registry's verdict changed from external causes (clicks or
        // keyboard navigation elsewhere); force native state to match.
        if check.focused && !native_focused {
            return (true, FocusTransition::ApplyLogicalFocus);
        }
        if !check.focused && native_focused {
            return (false, FocusTransition::ApplyLogicalBlur);
        }
        return (check.focused, FocusTransition::Steady);
    }

    if native_focused && !check.focused {
        return (true, FocusTransition::StealFromNative);
    }

    if !native_focused && check.focused {
        if is_reset {
            return (true, FocusTransition::SchedulePull);
        }
        return match native {
            NativeFocus::Surface => (true, FocusTransition::ReleaseToSurface),
            _ => (true, FocusTransition::LeaveAlone),
        };
    }

    (check.focused, FocusTransition::Steady)
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn check(allow_focus: bool, focused: bool) -> FocusCheck {
        FocusCheck {
            allow_focus,
            focused,
        }
    }

    // --- Steady states ---

    #[test]
    fn steady_focused_takes_no_action() {
        let (focused, t) = reconcile(true, check(true, true), NativeFocus::ThisField, false);
        assert!(focused);
        assert_eq!(t, FocusTransition::Steady);
    }

    #[test]
    fn steady_unfocused_takes_no_action() {
        let (focused, t) = reconcile(false, check(true, false), NativeFocus::Other, false);
        assert!(!focused);
        assert_eq!(t, FocusTransition::Steady);
    }

    #[test]
    fn steady_is_idempotent_over_repeated_ticks() {
        for _ in 0..10 {
            let (focused, t) = reconcile(true, check(true, true), NativeFocus::ThisField, false);
            assert!(focused);
            assert_eq!(t, FocusTransition::Steady);
        }
    }

    // --- Registry verdict changed ---

    #[test]
    fn registry_gain_pulls_native_focus() {
        let (focused, t) = reconcile(false, check(true, true), NativeFocus::Surface, false);
        assert!(focused);
        assert_eq!(t, FocusTransition::ApplyLogicalFocus);
    }

    #[test]
    fn registry_loss_blurs_native() {
        let (focused, t) = reconcile(true, check(true, false), NativeFocus::ThisField, false);
        assert!(!focused);
        assert_eq!(t, FocusTransition::ApplyLogicalBlur);
    }

    #[test]
    fn registry_gain_with_native_already_matching_is_steady() {
        let (focused, t) = reconcile(false, check(true, true), NativeFocus::ThisField, false);
        assert!(focused);
        assert_eq!(t, FocusTransition::Steady);
    }

    #[test]
    fn registry_loss_with_native_already_elsewhere_is_steady() {
        let (focused, t) = reconcile(true, check(true, false), NativeFocus::Other, false);
        assert!(!focused);
        assert_eq!(t, FocusTransition::Steady);
    }

    // --- Platform took focus behind the registry's back ---

    #[test]
    fn native_tab_in_steals_logical_focus() {
        let (focused, t) = reconcile(false, check(true, false), NativeFocus::ThisField, false);
        assert!(focused);
        assert_eq!(t, FocusTransition::StealFromNative);
    }

    // --- Logically focused, native elsewhere ---

    #[test]
    fn reset_schedules_one_time_pull() {
        let (focused, t) = reconcile(true, check(true, true), NativeFocus::Other, true);
        assert!(focused);
        assert_eq!(t, FocusTransition::SchedulePull);
    }

    #[test]
    fn native_on_surface_releases_logical_focus() {
        let (focused, t) = reconcile(true, check(true, true), NativeFocus::Surface, false);
        // Flag stays true for the rest of this tick; the registry reports
        // the release next tick.
        assert!(focused);
        assert_eq!(t, FocusTransition::ReleaseToSurface);
    }

    #[test]
    fn native_on_popup_is_left_alone() {
        let (focused, t) = reconcile(true, check(true, true), NativeFocus::Other, false);
        assert!(focused);
        assert_eq!(t, FocusTransition::LeaveAlone);
    }

    #[test]
    fn reset_wins_over_surface_release() {
        let (_, t) = reconcile(true, check(true, true), NativeFocus::Surface, true);
        assert_eq!(t, FocusTransition::SchedulePull);
    }
}
