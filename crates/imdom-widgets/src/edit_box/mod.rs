#![forbid(unsafe_code)]

//! Edit box: a text-input widget bridging an immediate-mode UI and a
//! retained input surface.
//!
//! The immediate-mode UI rebuilds its tree every tick; the native text
//! field is a persistent platform object. One [`EditBox`] instance per
//! logical identity persists across ticks and owns the reconciliation
//! between the two worlds: logical vs native focus (see [`focus`]),
//! validation with rollback (see [`validate`]), and binding the native
//! field on and off as layout grants or denies a renderable slot.
//!
//! # Per-tick control flow
//!
//! [`EditBox::run`] once per widget: apply parameters → reconcile focus →
//! bind/unbind the native field → validate native-side edits → sync visual
//! properties → consume input → report [`EditBoxResult`]. Then
//! [`UiContext::tick`] once per frame, after all widgets, for the liveness
//! sweep.

mod context;
mod focus;
pub mod validate;

pub use context::UiContext;
pub use validate::{Constraints, EditOutcome, validate_edit};

use std::cell::RefCell;
use std::rc::Rc;

use bitflags::bitflags;

use imdom_core::{
    ClickQuery, FieldAttr, FieldKind, FieldListener, FocusCheck, FocusQuery, Key, KeyOpts,
    PercentPos, PlatformField, SlotId, TextSpec, TextType, UiFrame, VirtualRect, WidgetId,
};

use focus::{FocusTransition, NativeFocus};
use validate::ValidState;

bitflags! {
    /// Behavioral flags of an edit box.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EditBoxFlags: u16 {
        /// Display text uppercased (value untouched).
        const UPPERCASE = 1 << 0;
        /// Pull native focus whenever a fresh field binds.
        const INITIAL_FOCUS = 1 << 1;
        /// Release logical focus when a click lands outside the widget.
        const AUTO_UNFOCUS = 1 << 2;
        /// Select the whole value when a fresh field binds.
        const INITIAL_SELECT = 1 << 3;
        /// Native spellchecking enabled.
        const SPELLCHECK = 1 << 4;
        /// ESC clears the text when non-empty (stays focused).
        const ESC_CLEARS = 1 << 5;
        /// ESC releases focus (and cancels) when there is nothing to clear.
        const ESC_UNFOCUSES = 1 << 6;
        /// Suppress up/down keyboard navigation while focused even for
        /// single-line boxes.
        const SUPPRESS_UP_DOWN = 1 << 7;
        /// Keep logical focus until something else takes it.
        const STICKY_FOCUS = 1 << 8;
        /// Cooperate with pointer lock: exit on focus, re-enter on empty
        /// submit.
        const POINTER_LOCK = 1 << 9;
    }
}

impl Default for EditBoxFlags {
    fn default() -> Self {
        EditBoxFlags::SPELLCHECK
            | EditBoxFlags::ESC_CLEARS
            | EditBoxFlags::ESC_UNFOCUSES
            | EditBoxFlags::STICKY_FOCUS
    }
}

/// Autocomplete configuration for the native field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Autocomplete {
    /// Suppress platform autocomplete. Written as a randomized token;
    /// platforms ignore a plain "off".
    #[default]
    Off,
    /// Platform autocomplete with this token (e.g. `"username"`).
    Token(String),
}

/// Terminal result of one tick of an edit box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditBoxResult {
    /// ENTER or a native form submission.
    Submit,
    /// ESC released focus.
    Cancel,
}

/// Per-tick parameters. Unset fields keep their previous value, so callers
/// typically pass a full builder chain on the first tick and a cheap default
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct EditBoxParams {
    /// Position in virtual units.
    pub pos: Option<(f32, f32)>,
    /// Width in virtual units.
    pub width: Option<f32>,
    /// Text height in virtual units (also the widget's click height).
    pub font_height: Option<f32>,
    /// Replace the authoritative text.
    pub text: Option<String>,
    /// Semantic input type.
    pub text_type: Option<TextType>,
    /// Placeholder, possibly localized.
    pub placeholder: Option<TextSpec>,
    /// Per-line length limit; `0` = unlimited.
    pub max_len: Option<u32>,
    /// Line-count limit; `0` = single-line.
    pub max_lines: Option<u32>,
    /// Stacking order override.
    pub z_index: Option<i32>,
    /// Autocomplete configuration.
    pub autocomplete: Option<Autocomplete>,
    /// Behavior flags (full replacement when set).
    pub flags: Option<EditBoxFlags>,
    /// Steal logical and native focus this tick (transient).
    pub focus_steal: bool,
}

impl EditBoxParams {
    /// Empty parameter set: everything keeps its previous value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the position in virtual units.
    #[must_use]
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.pos = Some((x, y));
        self
    }

    /// Set the width in virtual units.
    #[must_use]
    pub fn width(mut self, w: f32) -> Self {
        self.width = Some(w);
        self
    }

    /// Set the text height in virtual units.
    #[must_use]
    pub fn font_height(mut self, h: f32) -> Self {
        self.font_height = Some(h);
        self
    }

    /// Replace the authoritative text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the semantic input type.
    #[must_use]
    pub fn text_type(mut self, tt: TextType) -> Self {
        self.text_type = Some(tt);
        self
    }

    /// Set the placeholder.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<TextSpec>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// Limit per-line length (`0` = unlimited).
    #[must_use]
    pub fn max_len(mut self, n: u32) -> Self {
        self.max_len = Some(n);
        self
    }

    /// Make the box multi-line with a line-count limit (`0` = single-line).
    #[must_use]
    pub fn max_lines(mut self, n: u32) -> Self {
        self.max_lines = Some(n);
        self
    }

    /// Set the stacking order.
    #[must_use]
    pub fn z_index(mut self, z: i32) -> Self {
        self.z_index = Some(z);
        self
    }

    /// Set autocomplete behavior.
    #[must_use]
    pub fn autocomplete(mut self, ac: Autocomplete) -> Self {
        self.autocomplete = Some(ac);
        self
    }

    /// Replace the behavior flags.
    #[must_use]
    pub fn flags(mut self, flags: EditBoxFlags) -> Self {
        self.flags = Some(flags);
        self
    }

    /// Steal focus this tick.
    #[must_use]
    pub fn steal_focus(mut self) -> Self {
        self.focus_steal = true;
        self
    }
}

struct Binding {
    slot: SlotId,
    field: Box<dyn PlatformField>,
}

struct EditBoxInner {
    id: WidgetId,
    // Configuration; persists across ticks, overwritten by params.
    x: f32,
    y: f32,
    w: f32,
    font_height: f32,
    text_type: TextType,
    placeholder: TextSpec,
    constraints: Constraints,
    z_index: Option<i32>,
    autocomplete: Autocomplete,
    flags: EditBoxFlags,
    // State.
    state: ValidState,
    focused: bool,
    bound: Option<Binding>,
    onetime_focus: bool,
    last_autocomplete: Option<Autocomplete>,
    last_font_px: Option<u16>,
    last_run: Option<u64>,
    submitted: bool,
    canceled: bool,
}

/// A persistent edit-box instance.
///
/// Cheap to clone; clones share the same instance. Create once per logical
/// identity (or let [`edit_box`] cache by key) and call [`run`](Self::run)
/// every tick the widget is part of the UI.
#[derive(Clone)]
pub struct EditBox {
    inner: Rc<RefCell<EditBoxInner>>,
}

impl EditBox {
    /// Create a new instance. `params` provides the initial configuration;
    /// the same struct is normally passed to [`run`](Self::run) as well.
    #[must_use]
    pub fn new(params: &EditBoxParams) -> Self {
        let mut inner = EditBoxInner {
            id: WidgetId::fresh(),
            x: 0.0,
            y: 0.0,
            w: 120.0,
            font_height: 24.0,
            text_type: TextType::Text,
            placeholder: TextSpec::empty(),
            constraints: Constraints::default(),
            z_index: None,
            autocomplete: Autocomplete::Off,
            flags: EditBoxFlags::default(),
            state: ValidState::default(),
            focused: false,
            bound: None,
            onetime_focus: false,
            last_autocomplete: None,
            last_font_px: None,
            last_run: None,
            submitted: false,
            canceled: false,
        };
        inner.apply_params(params);
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Stable identity of this instance.
    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.inner.borrow().id
    }

    /// The authoritative text.
    #[must_use]
    pub fn text(&self) -> String {
        self.inner.borrow().state.text.clone()
    }

    /// Replace the text, in the native field too when bound.
    pub fn set_text(&self, text: &str) {
        self.inner.borrow_mut().set_text(text);
    }

    /// Whether the box held logical focus after its last `run`.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.inner.borrow().focused
    }

    /// Take logical (and, when bound, native) focus immediately.
    pub fn focus(&self, ctx: &mut UiContext, frame: &mut UiFrame<'_>) {
        let mut inner = self.inner.borrow_mut();
        inner.focus_now(self, ctx, frame);
    }

    /// Release logical focus.
    pub fn unfocus(&self, frame: &mut UiFrame<'_>) {
        frame.focus.release();
    }

    /// Run one tick of the widget.
    ///
    /// Must be called at most once per instance per tick; a second call is
    /// a usage error and degrades to a no-op.
    pub fn run(
        &self,
        ctx: &mut UiContext,
        frame: &mut UiFrame<'_>,
        params: &EditBoxParams,
    ) -> Option<EditBoxResult> {
        let now = frame.clock.frame_index();
        self.inner.borrow_mut().apply_params(params);
        if params.focus_steal {
            self.focus(ctx, frame);
        }

        let mut inner = self.inner.borrow_mut();
        if inner.last_run == Some(now) {
            debug_assert!(false, "edit box {} ran twice in tick {now}", inner.id);
            #[cfg(feature = "tracing")]
            tracing::warn!(id = %inner.id, tick = now, "edit box ran twice in one tick");
            return None;
        }
        // A frame gap means the box was not running; async-originated flags
        // from that era are stale.
        let is_reset = inner.last_run != Some(now.wrapping_sub(1));
        if is_reset {
            inner.submitted = false;
        }
        inner.last_run = Some(now);
        inner.canceled = false;

        let check = inner.update_focus(self, ctx, frame, is_reset);
        if inner.focused {
            let vertical = inner.constraints.max_lines > 0
                || inner.flags.contains(EditBoxFlags::SUPPRESS_UP_DOWN);
            frame.focus.suppress_directional_nav(true, vertical);
        }
        ctx.note_ran(self);

        let slot = if check.allow_focus {
            frame.surface.claim_slot(inner.id)
        } else {
            None
        };
        if slot != inner.bound.as_ref().map(|b| b.slot) {
            inner.rebind(self, ctx, frame, slot);
        } else {
            // Covers native edits the keystroke listener did not see
            // (programmatic or IME input).
            let inner = &mut *inner;
            if let Some(binding) = inner.bound.as_mut() {
                validate::sync_field(&mut inner.state, &inner.constraints, binding.field.as_mut());
            }
        }
        inner.sync_visual(ctx, frame);

        if inner.focused {
            if inner.flags.contains(EditBoxFlags::AUTO_UNFOCUS)
                && frame.input.click(ClickQuery { peek: true })
            {
                frame.focus.release();
            }
            // Platforms that suppress native form submission still deliver
            // the keystroke; catch ENTER ourselves.
            if frame.input.key_down_edge(Key::Enter, KeyOpts::default()) {
                inner.submitted = true;
            }
            // Keystrokes land in the native field; stop the surrounding UI
            // from also reacting to them.
            frame.input.eat_keyboard_input();
        }
        frame
            .input
            .consume_clicks_in(VirtualRect::new(inner.x, inner.y, inner.w, inner.font_height));

        if inner.submitted {
            inner.submitted = false;
            return Some(EditBoxResult::Submit);
        }
        if inner.canceled {
            inner.canceled = false;
            return Some(EditBoxResult::Cancel);
        }
        None
    }

    pub(crate) fn last_run(&self) -> Option<u64> {
        self.inner.borrow().last_run
    }

    /// Drop the native binding (liveness sweep); instance state survives.
    pub(crate) fn unbind(&self) {
        self.inner.borrow_mut().bound = None;
    }

    pub(crate) fn handle_form_submit(&self, input: &mut dyn imdom_core::InputPoll) {
        let mut inner = self.inner.borrow_mut();
        let inner = &mut *inner;
        inner.submitted = true;
        if let Some(binding) = inner.bound.as_mut() {
            validate::sync_field(&mut inner.state, &inner.constraints, binding.field.as_mut());
        }
        if inner.flags.contains(EditBoxFlags::POINTER_LOCK) && inner.state.text.is_empty() {
            input.pointer_lock_enter("edit_box_submit");
        }
    }
}

impl std::fmt::Debug for EditBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("EditBox")
            .field("id", &inner.id)
            .field("focused", &inner.focused)
            .field("bound", &inner.bound.is_some())
            .finish_non_exhaustive()
    }
}

impl EditBoxInner {
    fn apply_params(&mut self, p: &EditBoxParams) {
        if let Some((x, y)) = p.pos {
            self.x = x;
            self.y = y;
        }
        if let Some(w) = p.width {
            self.w = w;
        }
        if let Some(h) = p.font_height {
            self.font_height = h;
        }
        if let Some(text) = &p.text {
            self.state.text = text.clone();
        }
        if let Some(tt) = p.text_type {
            self.text_type = tt;
        }
        if let Some(ph) = &p.placeholder {
            self.placeholder = ph.clone();
        }
        if let Some(n) = p.max_len {
            self.constraints.max_len = n;
        }
        if let Some(n) = p.max_lines {
            self.constraints.max_lines = n;
        }
        if let Some(z) = p.z_index {
            self.z_index = Some(z);
        }
        if let Some(ac) = &p.autocomplete {
            self.autocomplete = ac.clone();
        }
        if let Some(flags) = p.flags {
            self.flags = flags;
        }
    }

    fn set_text(&mut self, text: &str) {
        if let Some(binding) = self.bound.as_mut()
            && binding.field.value() != text
        {
            binding.field.set_value(text);
        }
        self.state.text = text.to_owned();
    }

    fn focus_now(&mut self, handle: &EditBox, ctx: &mut UiContext, frame: &mut UiFrame<'_>) {
        if let Some(binding) = self.bound.as_mut() {
            binding.field.focus();
            ctx.set_active(handle, frame.clock.frame_index());
        } else {
            self.onetime_focus = true;
        }
        frame.focus.steal(self.id);
        self.focused = true;
        if self.flags.contains(EditBoxFlags::POINTER_LOCK) && frame.input.pointer_locked() {
            frame.input.pointer_lock_exit();
        }
    }

    fn classify_native_focus(&self, frame: &UiFrame<'_>) -> NativeFocus {
        if let Some(binding) = &self.bound {
            if binding.field.is_focused() {
                return NativeFocus::ThisField;
            }
            if binding.field.helper_focused() {
                return NativeFocus::Surface;
            }
        }
        if frame.surface.surface_focused() {
            NativeFocus::Surface
        } else {
            NativeFocus::Other
        }
    }

    fn update_focus(
        &mut self,
        handle: &EditBox,
        ctx: &mut UiContext,
        frame: &mut UiFrame<'_>,
        is_reset: bool,
    ) -> FocusCheck {
        let was_focused = self.focused;
        let check = frame.focus.check_focus(FocusQuery {
            id: self.id,
            sticky: self.flags.contains(EditBoxFlags::STICKY_FOCUS),
        });
        let native = self.classify_native_focus(frame);
        let (mut focused, transition) = focus::reconcile(was_focused, check, native, is_reset);

        match transition {
            FocusTransition::Steady | FocusTransition::LeaveAlone => {}
            FocusTransition::ApplyLogicalFocus => {
                self.trace_focus("logically focused, native not, focusing");
                if let Some(binding) = self.bound.as_mut() {
                    binding.field.focus();
                }
            }
            FocusTransition::ApplyLogicalBlur => {
                self.trace_focus("native focused, logically not, blurring");
                if let Some(binding) = self.bound.as_mut() {
                    binding.field.blur();
                }
            }
            FocusTransition::StealFromNative => {
                self.trace_focus("native focused, logically not, stealing");
                frame.focus.steal(self.id);
            }
            FocusTransition::SchedulePull => {
                self.trace_focus("logically focused, new binding, scheduling focus");
                self.onetime_focus = true;
            }
            FocusTransition::ReleaseToSurface => {
                self.trace_focus("native focus fell to surface, releasing");
                frame.focus.release();
            }
        }

        if focused {
            ctx.set_active(handle, frame.clock.frame_index());
            let esc_opts = KeyOpts {
                pointer_lock_on_event: self.flags.contains(EditBoxFlags::POINTER_LOCK)
                    && self.state.text.is_empty(),
            };
            if self
                .flags
                .intersects(EditBoxFlags::ESC_CLEARS | EditBoxFlags::ESC_UNFOCUSES)
                && frame.input.key_up_edge(Key::Esc, esc_opts)
            {
                if !self.state.text.is_empty() && self.flags.contains(EditBoxFlags::ESC_CLEARS) {
                    self.set_text("");
                } else {
                    frame.focus.release();
                    if let Some(binding) = self.bound.as_mut() {
                        binding.field.blur();
                    }
                    focused = false;
                    self.canceled = true;
                }
            }
        }
        self.focused = focused;
        check
    }

    fn rebind(
        &mut self,
        handle: &EditBox,
        ctx: &mut UiContext,
        frame: &mut UiFrame<'_>,
        slot: Option<SlotId>,
    ) {
        if let Some(slot) = slot {
            ctx.ensure_submit_hook(frame.surface);
            let multiline = self.constraints.max_lines > 0;
            let kind = if multiline {
                FieldKind::MultiLine {
                    rows: self.constraints.max_lines,
                }
            } else {
                FieldKind::SingleLine
            };
            let mut field = frame.surface.create_field(slot, kind);
            field.set_attr(FieldAttr::TextType(self.text_type));
            field.set_attr(FieldAttr::Placeholder(
                frame.localizer.resolve(&self.placeholder).into_owned(),
            ));
            if self.constraints.max_len > 0 {
                if multiline {
                    field.set_attr(FieldAttr::Cols(self.constraints.max_len));
                } else {
                    field.set_attr(FieldAttr::MaxLength(self.constraints.max_len));
                }
            }
            if multiline {
                field.set_attr(FieldAttr::Rows(self.constraints.max_lines));
            }
            field.set_attr(FieldAttr::TabIndex(2));
            field.set_value(&self.state.text);
            if self.flags.contains(EditBoxFlags::UPPERCASE) {
                field.set_attr(FieldAttr::Uppercase);
            }
            if self.flags.contains(EditBoxFlags::INITIAL_FOCUS) || self.onetime_focus {
                field.focus();
                ctx.set_active(handle, frame.clock.frame_index());
                self.onetime_focus = false;
            }
            if self.flags.contains(EditBoxFlags::INITIAL_SELECT) {
                field.select_all();
            }
            if self.constraints.any_active() {
                // Validate on every keystroke so the platform never renders
                // an invalid intermediate value. The listener may fire while
                // the widget itself is mid-mutation; skipping those calls is
                // safe because the next tick re-validates anyway.
                let weak = Rc::downgrade(&handle.inner);
                let listener: FieldListener = Rc::new(move |field, _event| {
                    if let Some(inner) = weak.upgrade()
                        && let Ok(mut inner) = inner.try_borrow_mut()
                    {
                        let inner = &mut *inner;
                        validate::sync_field(&mut inner.state, &inner.constraints, field);
                    }
                });
                field.set_listener(Some(listener));
            }
            self.bound = Some(Binding { slot, field });
        } else {
            self.bound = None;
        }
        // Fresh element (or none): attribute caches no longer describe it.
        self.last_autocomplete = None;
        self.last_font_px = None;
        self.submitted = false;
    }

    fn sync_visual(&mut self, ctx: &mut UiContext, frame: &mut UiFrame<'_>) {
        let Some(binding) = self.bound.as_mut() else {
            return;
        };
        let field = binding.field.as_mut();

        if !self.flags.contains(EditBoxFlags::SPELLCHECK) {
            field.set_attr(FieldAttr::SpellcheckOff);
        }
        let (left, top) = frame.surface.virtual_to_percent(self.x, self.y);
        let (width, _) = frame.surface.virtual_size_to_percent(self.w, 0.0);
        field.set_position(PercentPos { left, top, width });

        // Integer pixels plus a fractional corrective scale; fonts rendered
        // at fractional pixel sizes blur on most platforms.
        let precise = frame.surface.virtual_to_font_px(self.font_height);
        let px = precise.floor().max(1.0);
        if self.last_font_px != Some(px as u16) {
            self.last_font_px = Some(px as u16);
            field.set_font_size(px as u16, precise / px);
        }

        if let Some(z) = self.z_index {
            field.set_attr(FieldAttr::ZIndex(z));
        }
        if self.last_autocomplete.as_ref() != Some(&self.autocomplete) {
            self.last_autocomplete = Some(self.autocomplete.clone());
            let token = match &self.autocomplete {
                Autocomplete::Token(token) => token.clone(),
                Autocomplete::Off => ctx.autocomplete_off_token(),
            };
            field.set_attr(FieldAttr::Autocomplete(token));
        }
    }

    fn trace_focus(&self, msg: &'static str) {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "imdom::edit_box::focus", id = %self.id, "{msg}");
        #[cfg(not(feature = "tracing"))]
        let _ = msg;
    }
}

/// Cached-instance convenience: fetch (or create) the instance for `key`,
/// run it, and return the result together with the current text.
pub fn edit_box(
    ctx: &mut UiContext,
    frame: &mut UiFrame<'_>,
    key: u64,
    params: &EditBoxParams,
) -> EditBoxOutput {
    let eb = ctx.cached(key, params);
    let result = eb.run(ctx, frame, params);
    EditBoxOutput {
        result,
        text: eb.text(),
        edit_box: eb,
    }
}

/// Output of the [`edit_box`] convenience entry point.
#[derive(Debug)]
pub struct EditBoxOutput {
    /// Terminal result of this tick, if any.
    pub result: Option<EditBoxResult>,
    /// Text after this tick.
    pub text: String,
    /// The persistent instance, for direct calls (`focus`, `set_text`).
    pub edit_box: EditBox,
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_match_documented_defaults() {
        let flags = EditBoxFlags::default();
        assert!(flags.contains(EditBoxFlags::SPELLCHECK));
        assert!(flags.contains(EditBoxFlags::ESC_CLEARS));
        assert!(flags.contains(EditBoxFlags::ESC_UNFOCUSES));
        assert!(flags.contains(EditBoxFlags::STICKY_FOCUS));
        assert!(!flags.contains(EditBoxFlags::UPPERCASE));
        assert!(!flags.contains(EditBoxFlags::AUTO_UNFOCUS));
    }

    #[test]
    fn params_only_overwrite_what_they_set() {
        let eb = EditBox::new(&EditBoxParams::new().text("hello").max_len(5));
        {
            let inner = eb.inner.borrow();
            assert_eq!(inner.state.text, "hello");
            assert_eq!(inner.constraints.max_len, 5);
            assert_eq!(inner.constraints.max_lines, 0);
        }
        eb.inner.borrow_mut().apply_params(&EditBoxParams::new().max_lines(3));
        let inner = eb.inner.borrow();
        assert_eq!(inner.state.text, "hello"); // Untouched.
        assert_eq!(inner.constraints.max_len, 5); // Untouched.
        assert_eq!(inner.constraints.max_lines, 3);
    }

    #[test]
    fn set_text_without_binding_updates_state_only() {
        let eb = EditBox::new(&EditBoxParams::new());
        eb.set_text("abc");
        assert_eq!(eb.text(), "abc");
        assert!(!eb.is_focused());
    }

    #[test]
    fn instances_get_distinct_ids() {
        let a = EditBox::new(&EditBoxParams::new());
        let b = EditBox::new(&EditBoxParams::new());
        assert_ne!(a.id(), b.id());
    }
}
