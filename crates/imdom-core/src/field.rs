#![forbid(unsafe_code)]

//! The persistent native text control.
//!
//! A [`PlatformField`] is the live editable buffer: it outlives frames, the
//! platform dispatches events to it directly, and it reports its own native
//! focus status. Widgets hold a boxed handle while bound and drop it when
//! the layout stops granting them a slot; dropping the handle never destroys
//! the widget's own state.

use std::rc::Rc;

/// A selection range in the field's value, in Unicode scalar values.
///
/// `start == end` is a collapsed caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
}

impl Selection {
    /// Create a range selection.
    #[inline]
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a collapsed caret.
    #[inline]
    #[must_use]
    pub const fn caret(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Clamp both offsets to `len`.
    #[inline]
    #[must_use]
    pub fn clamp(self, len: usize) -> Self {
        Self {
            start: self.start.min(len),
            end: self.end.min(len),
        }
    }
}

/// Semantic input type of a field, mapped by adapters to the platform's own
/// vocabulary (e.g. the DOM `type` attribute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextType {
    /// Plain text.
    #[default]
    Text,
    /// Obscured input.
    Password,
    /// Email address (platforms may offer a dedicated soft keyboard).
    Email,
    /// Numeric input.
    Number,
}

impl TextType {
    /// Platform attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TextType::Text => "text",
            TextType::Password => "password",
            TextType::Email => "email",
            TextType::Number => "number",
        }
    }
}

/// One write-only attribute of a native field.
///
/// Attributes are set individually, mirroring how a retained element tree is
/// mutated; widgets avoid redundant writes themselves where churn matters
/// (autocomplete, font size).
#[derive(Debug, Clone, PartialEq)]
pub enum FieldAttr {
    /// Semantic input type.
    TextType(TextType),
    /// Ghost text shown while empty.
    Placeholder(String),
    /// Hard per-line length limit enforced natively (single-line fields).
    MaxLength(u32),
    /// Visible row count (multi-line fields).
    Rows(u32),
    /// Visible column count (multi-line fields).
    Cols(u32),
    /// Native tab order position.
    TabIndex(i32),
    /// Display text uppercased (display only; the value is untouched).
    Uppercase,
    /// Disable native spellchecking.
    SpellcheckOff,
    /// Stacking order.
    ZIndex(i32),
    /// Autocomplete token. Adapters pass the string through verbatim.
    Autocomplete(String),
}

/// Platform event classes a field listener observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// Key released inside the field.
    KeyUp,
    /// Key pressed inside the field.
    KeyDown,
    /// Value changed (covers programmatic and IME input).
    Change,
}

/// Callback invoked by the platform on field events, outside the tick's
/// synchronous control flow. Must be idempotent: the widget re-validates on
/// the next tick regardless, the listener only prevents an invalid value
/// from being visible for a frame.
pub type FieldListener = Rc<dyn Fn(&mut dyn PlatformField, FieldEvent)>;

/// A persistent native text control.
pub trait PlatformField {
    /// Current value.
    fn value(&self) -> String;

    /// Replace the value. Does not move native focus.
    fn set_value(&mut self, value: &str);

    /// Current selection range.
    fn selection(&self) -> Selection;

    /// Set the selection range. Implementations clamp to the value length.
    fn set_selection(&mut self, selection: Selection);

    /// Select the entire value.
    fn select_all(&mut self);

    /// Take native focus.
    fn focus(&mut self);

    /// Drop native focus.
    fn blur(&mut self);

    /// Whether the platform's focus target is this field.
    fn is_focused(&self) -> bool;

    /// Whether the platform's focus target is this field's trailing helper
    /// element (the tab-stop that brackets the field in native tab order).
    fn helper_focused(&self) -> bool;

    /// Set one attribute.
    fn set_attr(&mut self, attr: FieldAttr);

    /// Position and size the field, in percent of the native viewport.
    fn set_position(&mut self, pos: PercentPos);

    /// Apply a font size: integer pixels plus a fractional corrective scale
    /// (`precise / px`) so the rendered size matches the virtual size without
    /// sub-pixel blur.
    fn set_font_size(&mut self, px: u16, scale: f32);

    /// Install or clear the event listener.
    fn set_listener(&mut self, listener: Option<FieldListener>);
}

/// Percent-of-viewport placement for a field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PercentPos {
    /// Left edge, percent.
    pub left: f32,
    /// Top edge, percent.
    pub top: f32,
    /// Width, percent.
    pub width: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_clamps_both_ends() {
        let sel = Selection::new(4, 9);
        assert_eq!(sel.clamp(6), Selection::new(4, 6));
        assert_eq!(sel.clamp(2), Selection::new(2, 2));
        assert_eq!(sel.clamp(20), sel);
    }

    #[test]
    fn caret_is_collapsed() {
        let sel = Selection::caret(3);
        assert_eq!(sel.start, sel.end);
    }

    #[test]
    fn text_type_attribute_values() {
        assert_eq!(TextType::Text.as_str(), "text");
        assert_eq!(TextType::Password.as_str(), "password");
    }
}
