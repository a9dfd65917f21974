#![forbid(unsafe_code)]

//! Headless capability doubles for imdom tests.
//!
//! # Role in imdom
//! Every trait in `imdom-core` gets a deterministic in-memory double here:
//! a settable clock, a single-owner focus registry, scripted input, and a
//! recording surface/field pair. Widget tests drive whole frame sequences
//! against these and assert on the recorded side effects (focus/blur calls,
//! attribute writes, value rollbacks) instead of a live platform.
//!
//! # How it fits in the system
//! Depends only on `imdom-core`, so widget crates consume it as a
//! dev-dependency without cycles.

pub mod clock;
pub mod focus;
pub mod input;
pub mod surface;

pub use clock::TestClock;
pub use focus::SingleOwnerFocus;
pub use input::ScriptedInput;
pub use surface::{HeadlessField, HeadlessSurface};

use imdom_core::{PassthroughLocalizer, UiFrame};

/// One bundle of all capability doubles, plus the [`UiFrame`] assembly a
/// host would do per tick.
#[derive(Default)]
pub struct Fixture {
    /// Settable frame counter.
    pub clock: TestClock,
    /// Single-owner logical-focus registry.
    pub focus: SingleOwnerFocus,
    /// Scripted edge-triggered input.
    pub input: ScriptedInput,
    /// Recording surface and fields.
    pub surface: HeadlessSurface,
    /// Identity localizer.
    pub localizer: PassthroughLocalizer,
}

impl Fixture {
    /// Fresh fixture at frame 1.
    #[must_use]
    pub fn new() -> Self {
        let fixture = Self::default();
        fixture.clock.set(1);
        fixture
    }

    /// Assemble the per-tick capability bundle.
    pub fn frame(&mut self) -> UiFrame<'_> {
        UiFrame {
            clock: &self.clock,
            focus: &mut self.focus,
            input: &mut self.input,
            surface: &mut self.surface,
            localizer: &self.localizer,
        }
    }

    /// Advance the clock to the next frame.
    pub fn next_frame(&mut self) {
        self.clock.advance();
    }
}
