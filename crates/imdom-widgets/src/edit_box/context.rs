#![forbid(unsafe_code)]

//! Shared per-process widget context: frame registry, liveness sweep,
//! active-instance tracking, and the identity→instance cache.
//!
//! The context replaces what a dynamic host would keep in module-level
//! globals. It is owned by the caller, threaded `&mut` through every widget
//! invocation, and mutated only from the single tick thread.

use ahash::AHashMap;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use imdom_core::{FrameClock, InputPoll, UiSurface};

use super::{EditBox, EditBoxParams};

/// Process-wide edit-box bookkeeping.
///
/// Exactly one [`tick`](UiContext::tick) call per frame performs the
/// liveness sweep, after all widget invocations of that frame.
pub struct UiContext {
    /// Instances that ran in the current frame, in invocation order.
    this_frame: Vec<EditBox>,
    /// Instances that ran in the previous frame.
    last_frame: Vec<EditBox>,
    /// The most recently active (focused) instance, time-gated by frame.
    active: Option<EditBox>,
    active_frame: u64,
    submit_hook_installed: bool,
    cache: AHashMap<u64, EditBox>,
    rng: SmallRng,
}

impl UiContext {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            this_frame: Vec::new(),
            last_frame: Vec::new(),
            active: None,
            active_frame: 0,
            submit_hook_installed: false,
            cache: AHashMap::new(),
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Per-tick liveness sweep. Call exactly once per frame, after all
    /// widget invocations of that frame.
    ///
    /// Any instance that ran last frame but not this frame is told to drop
    /// its native binding; the instance itself survives and rebinds if it
    /// runs again.
    pub fn tick(&mut self, clock: &dyn FrameClock) {
        let now = clock.frame_index();
        for eb in &self.last_frame {
            if eb.last_run().is_some_and(|f| f < now) {
                eb.unbind();
            }
        }
        self.last_frame = std::mem::take(&mut self.this_frame);
    }

    /// Whether any edit box was active this frame or the previous one.
    ///
    /// Hosts use this for "is some text field eating the keyboard" checks
    /// before acting on global shortcuts.
    #[must_use]
    pub fn any_edit_box_active(&self, clock: &dyn FrameClock) -> bool {
        self.active.is_some() && self.active_frame + 1 >= clock.frame_index()
    }

    /// Native form submission arrived (e.g. the platform's submit event).
    ///
    /// Marks the currently active instance as submitted and reconciles its
    /// field, so the value submitted is the validated one. No-op when no
    /// instance is active.
    pub fn form_submit(&mut self, clock: &dyn FrameClock, input: &mut dyn InputPoll) {
        if !self.any_edit_box_active(clock) {
            return;
        }
        if let Some(active) = self.active.clone() {
            active.handle_form_submit(input);
        }
    }

    pub(crate) fn note_ran(&mut self, eb: &EditBox) {
        self.this_frame.push(eb.clone());
    }

    pub(crate) fn set_active(&mut self, eb: &EditBox, frame_index: u64) {
        self.active = Some(eb.clone());
        self.active_frame = frame_index;
    }

    pub(crate) fn ensure_submit_hook(&mut self, surface: &mut dyn UiSurface) {
        if !self.submit_hook_installed {
            self.submit_hook_installed = true;
            surface.install_submit_hook();
        }
    }

    /// Fetch or create the cached instance for a stable caller key.
    pub(crate) fn cached(&mut self, key: u64, params: &EditBoxParams) -> EditBox {
        self.cache
            .entry(key)
            .or_insert_with(|| EditBox::new(params))
            .clone()
    }

    /// Autocomplete tokens must vary per write: platforms ignore a plain
    /// "off" value, but an unrecognized token disables the heuristics.
    pub(crate) fn autocomplete_off_token(&mut self) -> String {
        format!("auto-off-{:08x}", self.rng.random::<u32>())
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}

// =========================================================================
// Tests
// =========================================================================
