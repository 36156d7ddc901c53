//! Pattern input handling: the gesture state machine.
//!
//! [`PatternInputHandler`] consumes a stream of drag positions and maintains
//! the ordered list of connected dots, the committed line segments, and the
//! in-progress rubber-band line. It detects dot entry against an inclusive
//! square capture box, infers and splices in skipped intermediate dots, and
//! resets on completion or cancel.
//!
//! The handler is a plain mutable state container: every operation reports
//! its effect through its return value, and all state is observable through
//! accessors for synchronous per-frame redraw. It is single-owner and must
//! be driven from one thread; there is no internal locking.

use gridlock_core::Point;
use gridlock_core::logging::targets;

use crate::cell::{Cell, Dot};
use crate::line::Line;

/// The phase of a positional pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    /// Contact started.
    Pressed,
    /// Contact moved while held.
    Moved,
    /// Contact lifted normally.
    Released,
    /// Contact aborted by the platform.
    Cancelled,
}

/// A positional event from the host's raw event stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub position: Point,
}

impl PointerEvent {
    /// Create a press event.
    pub fn pressed(position: impl Into<Point>) -> Self {
        Self {
            action: PointerAction::Pressed,
            position: position.into(),
        }
    }

    /// Create a move event.
    pub fn moved(position: impl Into<Point>) -> Self {
        Self {
            action: PointerAction::Moved,
            position: position.into(),
        }
    }

    /// Create a release event.
    pub fn released(position: impl Into<Point>) -> Self {
        Self {
            action: PointerAction::Released,
            position: position.into(),
        }
    }

    /// Create a cancel event.
    pub fn cancelled(position: impl Into<Point>) -> Self {
        Self {
            action: PointerAction::Cancelled,
            position: position.into(),
        }
    }
}

/// What a pointer event did to the gesture session.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum EventOutcome {
    /// The event had no effect (no dot hit, or no gesture in progress).
    Ignored,
    /// A new gesture started on a dot.
    Started,
    /// The gesture advanced; selection state may have changed.
    Updated,
    /// The gesture completed with the ordered dots it connected.
    Finished(Vec<Dot>),
}

/// The gesture recognition state machine.
///
/// One gesture may be in progress at a time; starting a new one while a
/// session is active implicitly clears the prior state first.
#[derive(Debug, Clone)]
pub struct PatternInputHandler {
    /// Half-width of the square capture box around each dot center.
    capture_half_width: f32,
    /// The dot set for the current layout, in grid enumeration order.
    dots: Vec<Dot>,
    connected_dots: Vec<Dot>,
    connected_lines: Vec<Line>,
    current_line: Line,
}

impl PatternInputHandler {
    /// Create a handler over a laid-out dot set.
    ///
    /// `capture_half_width` is the touch-capture radius: the dot radius plus
    /// any extra touch margin. The capture region is a square box centered
    /// on the dot, with positions exactly on the boundary counting as hits.
    pub fn new(capture_half_width: f32, dots: Vec<Dot>) -> Self {
        Self {
            capture_half_width,
            dots,
            connected_dots: Vec::new(),
            connected_lines: Vec::new(),
            current_line: Line::UNSPECIFIED,
        }
    }

    /// The dot set this handler hit-tests against.
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Dots connected so far, in visitation order.
    pub fn connected_dots(&self) -> &[Dot] {
        &self.connected_dots
    }

    /// Committed line segments, one per connection after the first dot.
    pub fn connected_lines(&self) -> &[Line] {
        &self.connected_lines
    }

    /// The live rubber-band segment; unspecified when no gesture is active.
    pub fn current_line(&self) -> Line {
        self.current_line
    }

    /// Whether a gesture is in progress (at least one dot connected).
    pub fn is_active(&self) -> bool {
        !self.connected_dots.is_empty()
    }

    /// Whether a dot for `cell` is already connected in this session.
    pub fn is_connected(&self, cell: Cell) -> bool {
        self.connected_dots.iter().any(|d| d.cell == cell)
    }

    /// Begin a gesture at `position`.
    ///
    /// If the position lies within a dot's capture box, any prior session is
    /// cleared, the dot becomes the first connected dot, and the rubber band
    /// is anchored at its center. When several capture boxes overlap the
    /// position, the dot whose center is nearest wins. Returns whether a dot
    /// was hit.
    pub fn on_drag_start(&mut self, position: Point) -> bool {
        let Some(dot) = self.hit_nearest(position) else {
            return false;
        };

        self.clear();
        tracing::trace!(
            target: targets::INPUT,
            row = dot.cell.row,
            column = dot.cell.column,
            "gesture started"
        );
        self.connected_dots.push(dot);
        self.current_line = Line::UNSPECIFIED.with_start(dot.center);
        true
    }

    /// Advance the gesture to `position`.
    ///
    /// The rubber-band end tracks the position unconditionally. Every not-
    /// yet-connected dot whose capture box contains the position is then
    /// connected, in grid enumeration order; true sub-pixel ordering within
    /// one coarse movement is not reconstructed.
    pub fn on_drag(&mut self, position: Point) {
        self.current_line = self.current_line.with_end(position);

        for index in 0..self.dots.len() {
            let dot = self.dots[index];
            if self.is_connected(dot.cell) || !self.in_capture_box(dot.center, position) {
                continue;
            }
            self.connect(dot);
        }
    }

    /// Finish the gesture, returning a snapshot of the connected dots.
    ///
    /// Clears the rubber band if anything was connected. Connected dots and
    /// committed lines are left in place for the caller to render or clear.
    pub fn on_drag_end(&mut self) -> Vec<Dot> {
        if !self.connected_dots.is_empty() {
            self.current_line = Line::UNSPECIFIED;
        }
        self.connected_dots.clone()
    }

    /// Drive the handler from a raw event stream.
    ///
    /// Mirrors the three drag phases keyed off the event action. Move events
    /// without an active gesture and empty releases are ignored; a release
    /// or cancel with at least one connected dot finishes the gesture.
    pub fn handle_event(&mut self, event: PointerEvent) -> EventOutcome {
        if self.dots.is_empty() {
            return EventOutcome::Ignored;
        }

        match event.action {
            PointerAction::Pressed => {
                if self.on_drag_start(event.position) {
                    EventOutcome::Started
                } else {
                    EventOutcome::Ignored
                }
            }
            PointerAction::Moved => {
                if !self.is_active() {
                    return EventOutcome::Ignored;
                }
                self.on_drag(event.position);
                EventOutcome::Updated
            }
            PointerAction::Released | PointerAction::Cancelled => {
                if !self.is_active() {
                    return EventOutcome::Ignored;
                }
                EventOutcome::Finished(self.on_drag_end())
            }
        }
    }

    /// Reset to the idle state. Idempotent.
    pub fn clear(&mut self) {
        self.connected_lines.clear();
        self.connected_dots.clear();
        self.current_line = Line::UNSPECIFIED;
    }

    /// Connect `dot`, splicing in a skipped intermediate dot first when the
    /// step jumped over one.
    fn connect(&mut self, dot: Dot) {
        let anchor = self.current_line.start;

        if let Some(missing) = self.find_missing_dot(dot) {
            tracing::debug!(
                target: targets::INPUT,
                row = missing.cell.row,
                column = missing.cell.column,
                "skipped dot inferred"
            );
            // Two segments so committed lines stay one per connection.
            self.connected_lines.push(Line::new(anchor, missing.center));
            self.connected_lines
                .push(Line::new(missing.center, dot.center));
            self.connected_dots.push(missing);
        } else {
            self.connected_lines.push(Line::new(anchor, dot.center));
        }

        tracing::trace!(
            target: targets::INPUT,
            row = dot.cell.row,
            column = dot.cell.column,
            "dot connected"
        );
        self.connected_dots.push(dot);
        self.current_line = self.current_line.with_start(dot.center);
    }

    /// Skipped-dot inference.
    ///
    /// When the entered dot's cell is two rows or two columns away from the
    /// last connected cell, the gesture jumped over the dot in between; that
    /// midpoint is treated as implicitly visited. The fill-in coordinate
    /// moves one step toward the entered dot on an axis only when the other
    /// axis delta is not 1, so unit steps and knight-jumps leave the
    /// candidate at the last cell itself (always connected, hence a no-op).
    ///
    /// Inherited from the reference pattern-lock algorithm; a single step
    /// corrects at most one cell, which is known to under-correct longer
    /// jumps on larger grids.
    fn find_missing_dot(&self, dot: Dot) -> Option<Dot> {
        let last = self.connected_dots.last()?.cell;
        let cell = dot.cell;

        let d_row = cell.row as i32 - last.row as i32;
        let d_column = cell.column as i32 - last.column as i32;

        let mut fill_row = last.row as i32;
        let mut fill_column = last.column as i32;

        if d_row.abs() == 2 && d_column.abs() != 1 {
            fill_row += d_row.signum();
        }
        if d_column.abs() == 2 && d_row.abs() != 1 {
            fill_column += d_column.signum();
        }

        let fill_cell = Cell::new(fill_row as u32, fill_column as u32);
        let candidate = self.dots.iter().copied().find(|d| d.cell == fill_cell)?;

        if self.is_connected(candidate.cell) {
            None
        } else {
            Some(candidate)
        }
    }

    /// Inclusive square hit test around a dot center.
    fn in_capture_box(&self, center: Point, position: Point) -> bool {
        (position.x - center.x).abs() <= self.capture_half_width
            && (position.y - center.y).abs() <= self.capture_half_width
    }

    /// Nearest-center hit among all dots whose capture box contains the
    /// position.
    fn hit_nearest(&self, position: Point) -> Option<Dot> {
        self.dots
            .iter()
            .copied()
            .filter(|d| self.in_capture_box(d.center, position))
            .min_by(|a, b| {
                a.center
                    .distance_squared(position)
                    .total_cmp(&b.center.distance_squared(position))
            })
    }
}

static_assertions::assert_impl_all!(PatternInputHandler: Send, Sync);
