//! Line segments between dots.

use gridlock_core::Point;

/// A start/end pixel-space pair: either a committed connector between two
/// consecutively visited dots, or the transient rubber-band segment from the
/// last visited dot to the current pointer position.
///
/// The distinguished [`Line::UNSPECIFIED`] sentinel represents "no line"
/// (NaN endpoints) rather than wrapping in `Option`, so rendering code can
/// treat the current line uniformly.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    /// The "no line" sentinel: both endpoints unset.
    pub const UNSPECIFIED: Self = Self {
        start: Point::new(f32::NAN, f32::NAN),
        end: Point::new(f32::NAN, f32::NAN),
    };

    /// Create a new line segment.
    #[inline]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Return this line with a different start point.
    #[inline]
    pub fn with_start(self, start: Point) -> Self {
        Self { start, ..self }
    }

    /// Return this line with a different end point.
    #[inline]
    pub fn with_end(self, end: Point) -> Self {
        Self { end, ..self }
    }

    /// True if any endpoint coordinate is unset.
    #[inline]
    pub fn is_unspecified(&self) -> bool {
        !self.start.is_finite() || !self.end.is_finite()
    }

    /// True if both endpoints are set, i.e. the segment is drawable.
    #[inline]
    pub fn is_fully_specified(&self) -> bool {
        !self.is_unspecified()
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::UNSPECIFIED
    }
}

impl PartialEq for Line {
    /// Two unspecified lines compare equal even though NaN normally does not.
    fn eq(&self, other: &Self) -> bool {
        if self.is_unspecified() && other.is_unspecified() {
            return true;
        }
        self.start == other.start && self.end == other.end
    }
}
