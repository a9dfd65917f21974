#![forbid(unsafe_code)]

//! Settable frame clock.

use std::cell::Cell;

use imdom_core::FrameClock;

/// A frame clock tests advance by hand.
#[derive(Debug, Default)]
pub struct TestClock {
    frame: Cell<u64>,
}

impl TestClock {
    /// Clock starting at `frame`.
    #[must_use]
    pub fn at(frame: u64) -> Self {
        Self {
            frame: Cell::new(frame),
        }
    }

    /// Jump to an absolute frame.
    pub fn set(&self, frame: u64) {
        self.frame.set(frame);
    }

    /// Advance by one frame.
    pub fn advance(&self) {
        self.frame.set(self.frame.get() + 1);
    }
}

impl FrameClock for TestClock {
    fn frame_index(&self) -> u64 {
        self.frame.get()
    }
}
