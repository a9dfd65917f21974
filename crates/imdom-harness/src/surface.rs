#![forbid(unsafe_code)]

//! Recording surface and field doubles.
//!
//! [`HeadlessField`] shares its state behind `Rc<RefCell<…>>`: the widget
//! owns one boxed handle, the test keeps another, and listener dispatch
//! (`emit`) reaches both. Every mutation is recorded so tests can assert
//! on churn (how many focus calls, which attributes were rewritten) and
//! not just on final values.

use std::cell::RefCell;
use std::rc::Rc;

use ahash::AHashMap;

use imdom_core::{
    FieldAttr, FieldEvent, FieldKind, FieldListener, PercentPos, PlatformField, Selection, SlotId,
    UiSurface, WidgetId,
};

#[derive(Default)]
struct FieldState {
    value: String,
    selection: Selection,
    focused: bool,
    helper_focused: bool,
    attrs: Vec<FieldAttr>,
    position: Option<PercentPos>,
    font: Option<(u16, f32)>,
    font_writes: u32,
    value_writes: u32,
    focus_calls: u32,
    blur_calls: u32,
    listener: Option<FieldListener>,
}

/// A native-field double with shared state and full call recording.
#[derive(Clone, Default)]
pub struct HeadlessField {
    state: Rc<RefCell<FieldState>>,
}

impl HeadlessField {
    /// Fresh unfocused empty field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the platform moving native focus onto or off this field.
    pub fn set_native_focused(&self, focused: bool) {
        self.state.borrow_mut().focused = focused;
    }

    /// Simulate native focus landing on the trailing helper element.
    pub fn set_helper_focused(&self, focused: bool) {
        self.state.borrow_mut().helper_focused = focused;
    }

    /// Simulate a user edit: the platform applies value and selection, then
    /// dispatches a key event to the listener.
    pub fn user_edit(&self, value: &str, selection: Selection) {
        {
            let mut state = self.state.borrow_mut();
            state.value = value.to_owned();
            state.selection = selection.clamp(value.chars().count());
            state.focused = true;
        }
        self.emit(FieldEvent::KeyUp);
    }

    /// Dispatch an event to the installed listener, if any.
    pub fn emit(&self, event: FieldEvent) {
        let listener = self.state.borrow().listener.clone();
        if let Some(listener) = listener {
            let mut view = self.clone();
            listener(&mut view, event);
        }
    }

    /// Number of `focus()` calls.
    #[must_use]
    pub fn focus_calls(&self) -> u32 {
        self.state.borrow().focus_calls
    }

    /// Number of `blur()` calls.
    #[must_use]
    pub fn blur_calls(&self) -> u32 {
        self.state.borrow().blur_calls
    }

    /// Number of `set_value` calls.
    #[must_use]
    pub fn value_writes(&self) -> u32 {
        self.state.borrow().value_writes
    }

    /// Number of `set_font_size` calls.
    #[must_use]
    pub fn font_writes(&self) -> u32 {
        self.state.borrow().font_writes
    }

    /// Last applied font, as `(px, scale)`.
    #[must_use]
    pub fn font(&self) -> Option<(u16, f32)> {
        self.state.borrow().font
    }

    /// Last applied position.
    #[must_use]
    pub fn position(&self) -> Option<PercentPos> {
        self.state.borrow().position
    }

    /// All attribute writes, in order.
    #[must_use]
    pub fn attrs(&self) -> Vec<FieldAttr> {
        self.state.borrow().attrs.clone()
    }

    /// Autocomplete attribute values written, in order.
    #[must_use]
    pub fn autocomplete_writes(&self) -> Vec<String> {
        self.state
            .borrow()
            .attrs
            .iter()
            .filter_map(|a| match a {
                FieldAttr::Autocomplete(token) => Some(token.clone()),
                _ => None,
            })
            .collect()
    }

    /// Whether a listener is installed.
    #[must_use]
    pub fn has_listener(&self) -> bool {
        self.state.borrow().listener.is_some()
    }
}

impl PlatformField for HeadlessField {
    fn value(&self) -> String {
        self.state.borrow().value.clone()
    }

    fn set_value(&mut self, value: &str) {
        let mut state = self.state.borrow_mut();
        state.value = value.to_owned();
        state.value_writes += 1;
        let len = state.value.chars().count();
        state.selection = state.selection.clamp(len);
    }

    fn selection(&self) -> Selection {
        self.state.borrow().selection
    }

    fn set_selection(&mut self, selection: Selection) {
        let mut state = self.state.borrow_mut();
        let len = state.value.chars().count();
        state.selection = selection.clamp(len);
    }

    fn select_all(&mut self) {
        let mut state = self.state.borrow_mut();
        let len = state.value.chars().count();
        state.selection = Selection::new(0, len);
    }

    fn focus(&mut self) {
        let mut state = self.state.borrow_mut();
        state.focused = true;
        state.focus_calls += 1;
    }

    fn blur(&mut self) {
        let mut state = self.state.borrow_mut();
        state.focused = false;
        state.blur_calls += 1;
    }

    fn is_focused(&self) -> bool {
        self.state.borrow().focused
    }

    fn helper_focused(&self) -> bool {
        self.state.borrow().helper_focused
    }

    fn set_attr(&mut self, attr: FieldAttr) {
        self.state.borrow_mut().attrs.push(attr);
    }

    fn set_position(&mut self, pos: PercentPos) {
        self.state.borrow_mut().position = Some(pos);
    }

    fn set_font_size(&mut self, px: u16, scale: f32) {
        let mut state = self.state.borrow_mut();
        state.font = Some((px, scale));
        state.font_writes += 1;
    }

    fn set_listener(&mut self, listener: Option<FieldListener>) {
        self.state.borrow_mut().listener = listener;
    }
}

struct SlotEntry {
    slot: SlotId,
    kind: Option<FieldKind>,
    field: Option<HeadlessField>,
}

/// A surface double: grants one slot per widget id, records created fields,
/// and lets tests deny slots or force element recycling.
pub struct HeadlessSurface {
    slots: AHashMap<WidgetId, SlotEntry>,
    denied: AHashMap<WidgetId, ()>,
    next_slot: u64,
    surface_focused: bool,
    submit_hook_installs: u32,
    font_px_per_unit: f32,
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self {
            slots: AHashMap::new(),
            denied: AHashMap::new(),
            next_slot: 1,
            surface_focused: false,
            submit_hook_installs: 0,
            font_px_per_unit: 1.0,
        }
    }
}

impl HeadlessSurface {
    /// Fresh surface granting every claim.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deny (or re-grant) the slot for `id`, as layout hiding the widget.
    pub fn deny_slot(&mut self, id: WidgetId, deny: bool) {
        if deny {
            self.denied.insert(id, ());
        } else {
            self.denied.remove(&id);
        }
    }

    /// Recycle the element behind `id`: the next claim returns a fresh slot
    /// token and the old field handle is dead.
    pub fn recycle_slot(&mut self, id: WidgetId) {
        self.slots.remove(&id);
    }

    /// Simulate native focus on the surface itself (canvas/background).
    pub fn set_surface_focused(&mut self, focused: bool) {
        self.surface_focused = focused;
    }

    /// The field most recently created for `id`.
    #[must_use]
    pub fn field(&self, id: WidgetId) -> Option<HeadlessField> {
        self.slots.get(&id).and_then(|entry| entry.field.clone())
    }

    /// The kind the field for `id` was created with.
    #[must_use]
    pub fn field_kind(&self, id: WidgetId) -> Option<FieldKind> {
        self.slots.get(&id).and_then(|entry| entry.kind)
    }

    /// Number of `install_submit_hook` calls (idempotence check).
    #[must_use]
    pub fn submit_hook_installs(&self) -> u32 {
        self.submit_hook_installs
    }

    /// Scale factor for `virtual_to_font_px` (exercise fractional sizes).
    pub fn set_font_px_per_unit(&mut self, scale: f32) {
        self.font_px_per_unit = scale;
    }
}

impl UiSurface for HeadlessSurface {
    fn claim_slot(&mut self, id: WidgetId) -> Option<SlotId> {
        if self.denied.contains_key(&id) {
            return None;
        }
        let next = &mut self.next_slot;
        let entry = self.slots.entry(id).or_insert_with(|| {
            let slot = SlotId(*next);
            *next += 1;
            SlotEntry {
                slot,
                kind: None,
                field: None,
            }
        });
        Some(entry.slot)
    }

    fn create_field(&mut self, slot: SlotId, kind: FieldKind) -> Box<dyn PlatformField> {
        let field = HeadlessField::new();
        if let Some(entry) = self.slots.values_mut().find(|entry| entry.slot == slot) {
            entry.kind = Some(kind);
            entry.field = Some(field.clone());
        }
        Box::new(field)
    }

    fn surface_focused(&self) -> bool {
        self.surface_focused
    }

    fn install_submit_hook(&mut self) {
        self.submit_hook_installs += 1;
    }

    fn virtual_to_percent(&self, x: f32, y: f32) -> (f32, f32) {
        (x / 10.0, y / 10.0)
    }

    fn virtual_size_to_percent(&self, w: f32, h: f32) -> (f32, f32) {
        (w / 10.0, h / 10.0)
    }

    fn virtual_to_font_px(&self, h: f32) -> f32 {
        h * self.font_px_per_unit
    }
}
