#![forbid(unsafe_code)]

//! Geometric primitives in virtual (camera) coordinates.

/// A rectangle in virtual UI units.
///
/// Virtual units are the immediate-mode UI's own coordinate space; the
/// surface maps them to native units (percent of viewport, font pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VirtualRect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl VirtualRect {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let r = VirtualRect::new(10.0, 20.0, 30.0, 40.0);
        assert!(r.contains(10.0, 20.0));
        assert!(r.contains(39.9, 59.9));
        assert!(!r.contains(40.0, 20.0));
        assert!(!r.contains(10.0, 60.0));
    }
}
