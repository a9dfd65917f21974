#![forbid(unsafe_code)]

//! Core: capability interfaces between immediate-mode widgets and a
//! retained input surface.
//!
//! # Role in imdom
//! `imdom-core` defines the seam between per-frame widget code and the
//! persistent platform underneath it (a DOM-like element tree, a native
//! GUI toolkit, or a headless test double). Widgets consume these traits;
//! platform adapters implement them. The crate holds no widget logic.
//!
//! # Primary responsibilities
//! - **Identity**: stable per-widget keys ([`WidgetId`]).
//! - **Frame clock**: the monotonically increasing tick counter.
//! - **Focus registry**: per-frame logical-focus arbitration.
//! - **Input polling**: edge-triggered key/click queries and consumption.
//! - **Platform field**: the persistent native text control.
//! - **Surface**: slot allocation and virtual→native coordinate transforms.
//! - **Localization**: placeholder string resolution.
//!
//! # How it fits in the system
//! `imdom-widgets` drives these capabilities once per tick to reconcile its
//! own per-frame state against the persistent platform objects. Keeping the
//! traits here means widget logic never names a concrete platform, so the
//! same reconciliation code runs against a browser adapter in production and
//! against `imdom-harness` doubles in tests.

pub mod field;
pub mod focus;
pub mod frame;
pub mod geometry;
pub mod id;
pub mod input;
pub mod localize;
pub mod surface;

pub use field::{
    FieldAttr, FieldEvent, FieldListener, PercentPos, PlatformField, Selection, TextType,
};
pub use focus::{FocusCheck, FocusQuery, FocusRegistry};
pub use frame::FrameClock;
pub use geometry::VirtualRect;
pub use id::WidgetId;
pub use input::{ClickQuery, InputPoll, Key, KeyOpts};
pub use localize::{Localizer, PassthroughLocalizer, TextSpec};
pub use surface::{FieldKind, SlotId, UiSurface};

/// The capability bundle a widget needs for one tick.
///
/// Assembled by the host once per frame and passed to every widget
/// invocation. All members are live for the duration of the tick only.
pub struct UiFrame<'a> {
    /// Per-tick frame counter.
    pub clock: &'a dyn FrameClock,
    /// Logical-focus arbitration.
    pub focus: &'a mut dyn FocusRegistry,
    /// Edge-triggered input queries and consumption.
    pub input: &'a mut dyn InputPoll,
    /// Slot allocation and coordinate transforms.
    pub surface: &'a mut dyn UiSurface,
    /// Placeholder string resolution.
    pub localizer: &'a dyn Localizer,
}
