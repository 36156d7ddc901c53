//! The painting boundary.
//!
//! The surface does not render; it describes what to draw through the
//! [`Painter`] trait and the host backend rasterizes with whatever it owns
//! (GPU canvas, terminal cells, SVG, ...).

use gridlock_core::{Color, Point};

/// Stroke style for line drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    /// Create a new stroke.
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// Drawing primitives the pattern lock needs from its host.
pub trait Painter {
    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Draw a line segment with round caps.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);
}
