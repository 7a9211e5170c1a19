//=========================================================================
// Geometry
//=========================================================================
//
// Minimal 2D value types used by the director and scene graph.
//
// All values are logical (DPI-independent) units, matching what the
// director reports as the window size.
//
//=========================================================================

//=== Point ===============================================================

/// A position in logical window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

//=== Size ================================================================

/// Window or node dimensions in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center of an area of this size anchored at the origin.
    ///
    /// Always exactly `(width / 2, height / 2)`.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Ratio of this width against a design reference width.
    pub fn width_ratio(&self, reference_width: f32) -> f32 {
        self.width / reference_width
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
