#![forbid(unsafe_code)]

//! The retained input surface: slot allocation and coordinate transforms.

use crate::field::PlatformField;
use crate::id::WidgetId;

/// Opaque generation token for a renderable slot.
///
/// A widget that claims its slot every tick keeps the same token; when the
/// surface reclaims the underlying element (the widget stopped claiming, or
/// the element pool recycled it) the next claim returns a fresh token. A
/// token change tells the widget its old field handle is dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub u64);

/// Which native control variant to create in a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// One line; ENTER submits.
    SingleLine,
    /// `rows` visible lines; ENTER inserts a newline.
    MultiLine {
        /// Visible row count.
        rows: u32,
    },
}

/// The retained surface the immediate-mode UI floats above.
pub trait UiSurface {
    /// Claim the renderable slot for `id` this tick.
    ///
    /// Returns `None` when layout does not grant the widget a slot (hidden,
    /// disabled, occluded by a modal). Unclaimed slots are reclaimed by the
    /// surface on its own schedule.
    fn claim_slot(&mut self, id: WidgetId) -> Option<SlotId>;

    /// Create a native field inside a claimed slot.
    fn create_field(&mut self, slot: SlotId, kind: FieldKind) -> Box<dyn PlatformField>;

    /// Whether the platform's focus target is the surface itself (the canvas
    /// or background, as opposed to a field or an unrelated popup).
    fn surface_focused(&self) -> bool;

    /// Intercept native form submission and route it to the host, which
    /// forwards to `UiContext::form_submit`. Idempotent; called once
    /// process-wide.
    fn install_submit_hook(&mut self);

    /// Map a virtual position to percent of the native viewport.
    fn virtual_to_percent(&self, x: f32, y: f32) -> (f32, f32);

    /// Map a virtual size to percent of the native viewport.
    fn virtual_size_to_percent(&self, w: f32, h: f32) -> (f32, f32);

    /// Map a virtual text height to a native font size in pixels
    /// (fractional; the widget rounds and corrects with a transform scale).
    fn virtual_to_font_px(&self, h: f32) -> f32;
}
