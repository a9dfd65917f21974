#![forbid(unsafe_code)]

//! Widgets for imdom: immediate-mode UI over a retained input surface.
//!
//! # Role in imdom
//! `imdom-widgets` holds the widget state machines. The flagship widget is
//! the edit box, which owns the reconciliation between the immediate-mode
//! UI's per-frame focus model and the platform's persistent native focus,
//! plus validation-with-rollback of native-side edits.
//!
//! # How it fits in the system
//! Widgets consume the capability traits in `imdom-core` and never name a
//! concrete platform. Hosts assemble an [`imdom_core::UiFrame`] per tick,
//! invoke widgets, and call [`UiContext::tick`] once per frame for the
//! liveness sweep.

pub mod edit_box;

pub use edit_box::{
    Autocomplete, Constraints, EditBox, EditBoxFlags, EditBoxOutput, EditBoxParams, EditBoxResult,
    EditOutcome, UiContext, edit_box, validate_edit,
};
