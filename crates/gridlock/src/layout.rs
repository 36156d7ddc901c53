//! Grid layout engine.
//!
//! Resolves grid cells to evenly spaced pixel-space centers for a square
//! dot matrix. Layout is a pure function of `(spans, area, dot_diameter)`;
//! callers recompute whenever the container size changes.

use gridlock_core::logging::targets;
use gridlock_core::{Point, Size};

use crate::cell::{Cell, Dot};

/// Compute evenly spaced dot positions for a `(spans + 1) x (spans + 1)`
/// grid filling `area`.
///
/// `spans` is the number of equal spans per axis, i.e. one less than the
/// number of dots per axis. Centers on the outer rows and columns are nudged
/// inward by half of `dot_diameter` so the dot graphic never clips outside
/// the bounding area; interior dots sit exactly on the span boundaries.
///
/// Returns an empty set when `area` is zero in either dimension (layout not
/// yet known; retry after measurement). Enumeration order is column-major:
/// column outer loop, row inner loop.
pub fn dots_positioned_evenly(spans: u32, area: Size, dot_diameter: f32) -> Vec<Dot> {
    if area.is_empty() {
        return Vec::new();
    }

    let span_width = if spans == 0 {
        0.0
    } else {
        area.width / spans as f32
    };
    let span_height = if spans == 0 {
        0.0
    } else {
        area.height / spans as f32
    };
    let inset = dot_diameter / 2.0;

    let per_axis = spans as usize + 1;
    let mut dots = Vec::with_capacity(per_axis * per_axis);

    for column in 0..=spans {
        for row in 0..=spans {
            let nudge_x = edge_nudge(column, spans);
            let nudge_y = edge_nudge(row, spans);

            let center = Point::new(
                span_width * column as f32 + inset * nudge_x,
                span_height * row as f32 + inset * nudge_y,
            );

            dots.push(Dot::new(Cell::new(row, column), center));
        }
    }

    tracing::trace!(
        target: targets::LAYOUT,
        spans,
        count = dots.len(),
        "grid layout computed"
    );

    dots
}

/// Inward nudge direction for an outer row/column; interior dots are
/// unaffected.
fn edge_nudge(index: u32, spans: u32) -> f32 {
    if index == 0 {
        1.0
    } else if index == spans {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_zero_area_yields_no_dots() {
        assert!(dots_positioned_evenly(2, Size::ZERO, 24.0).is_empty());
        assert!(dots_positioned_evenly(2, Size::new(300.0, 0.0), 24.0).is_empty());
    }

    #[test]
    fn test_dot_count_and_distinct_cells() {
        for spans in 1..=5 {
            let dots = dots_positioned_evenly(spans, Size::new(300.0, 300.0), 24.0);
            let expected = ((spans + 1) * (spans + 1)) as usize;
            assert_eq!(dots.len(), expected);

            let cells: HashSet<Cell> = dots.iter().map(|d| d.cell).collect();
            assert_eq!(cells.len(), expected);
        }
    }

    #[test]
    fn test_all_centers_within_area() {
        let area = Size::new(300.0, 240.0);
        for dot in dots_positioned_evenly(4, area, 24.0) {
            assert!(dot.center.x >= 0.0 && dot.center.x <= area.width, "{dot:?}");
            assert!(dot.center.y >= 0.0 && dot.center.y <= area.height, "{dot:?}");
        }
    }

    #[test]
    fn test_outer_edges_are_nudged_inward_by_radius() {
        let dots = dots_positioned_evenly(2, Size::new(300.0, 300.0), 24.0);
        let center_of = |row, column| {
            dots.iter()
                .find(|d| d.cell == Cell::new(row, column))
                .unwrap()
                .center
        };

        // Corners move inward by half the diameter on both axes.
        assert_eq!(center_of(0, 0), Point::new(12.0, 12.0));
        assert_eq!(center_of(2, 2), Point::new(288.0, 288.0));
        // Interior dot is unaffected.
        assert_eq!(center_of(1, 1), Point::new(150.0, 150.0));
        // Edge (non-corner) dots are nudged on one axis only.
        assert_eq!(center_of(0, 1), Point::new(150.0, 12.0));
    }

    #[test]
    fn test_enumeration_is_column_major() {
        let dots = dots_positioned_evenly(1, Size::new(100.0, 100.0), 10.0);
        let cells: Vec<Cell> = dots.iter().map(|d| d.cell).collect();
        assert_eq!(
            cells,
            vec![
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(0, 1),
                Cell::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_single_dot_grid() {
        let dots = dots_positioned_evenly(0, Size::new(100.0, 100.0), 20.0);
        assert_eq!(dots.len(), 1);
        assert_eq!(dots[0].cell, Cell::new(0, 0));
        assert_eq!(dots[0].center, Point::new(10.0, 10.0));
    }
}
