//! The pattern lock surface.
//!
//! [`PatternLock`] owns the full widget cycle: it lays out the dot grid for
//! the current viewport, drives the input handler from the host's pointer
//! stream, runs the matcher set when a gesture completes, applies the
//! wrong-pattern color feedback, and schedules the auto-clear.
//!
//! The surface is host-agnostic. A host feeds it three things: viewport
//! size changes ([`PatternLock::set_viewport`]), pointer events
//! ([`PatternLock::handle_pointer`]), and time ([`PatternLock::tick`]); it
//! reads back draw calls through [`PatternLock::paint`] and subscribes to
//! the [`pattern_completed`](PatternLock::pattern_completed) and
//! [`cleared`](PatternLock::cleared) signals.
//!
//! # Example
//!
//! ```
//! use gridlock::{LengthMatcher, PatternLock, PointerEvent};
//! use gridlock_core::Size;
//!
//! let mut lock = PatternLock::strings(3)
//!     .unwrap()
//!     .with_matcher(LengthMatcher::at_least(4));
//!
//! lock.pattern_completed.connect(|result| {
//!     println!("pattern {:?} success={}", result.pattern, result.success());
//! });
//!
//! lock.set_viewport(Size::new(300.0, 300.0));
//! lock.handle_pointer(PointerEvent::pressed((12.0, 12.0)));
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use gridlock_core::logging::targets;
use gridlock_core::{Deferred, Error, Result, Signal, Size};

use crate::cell::{Cell, Dot};
use crate::colors::PatternLockColors;
use crate::input::{EventOutcome, PatternInputHandler, PointerEvent};
use crate::layout::dots_positioned_evenly;
use crate::line::Line;
use crate::matcher::{PatternMatcher, first_invalidator};
use crate::painter::{Painter, Stroke};
use crate::provider::{PatternProvider, StringPatternProvider};
use crate::result::PatternResult;

/// Default unselected dot diameter in pixels.
const DEFAULT_DOT_SIZE: f32 = 14.0;
/// Default selected-container diameter in pixels.
const DEFAULT_SELECTED_DOT_SIZE: f32 = 24.0;
/// Default pattern line stroke width in pixels.
const DEFAULT_LINE_STROKE: f32 = 3.0;
/// Default extra touch margin around each dot in pixels.
const DEFAULT_EXTRA_TOUCH: f32 = 32.0;
/// Default delay before a completed pattern auto-clears.
const DEFAULT_CLEAR_DELAY: Duration = Duration::from_millis(800);

/// An embeddable pattern-lock widget.
///
/// Generic over the [`PatternProvider`] that encodes completed gestures, so
/// the provider, the matcher set, and the emitted [`PatternResult`] agree on
/// the pattern value type statically.
///
/// # Signals
///
/// - `pattern_completed(PatternResult<P::Pattern>)`: emitted once per
///   completed gesture that connected at least one dot
/// - `cleared(())`: emitted whenever displayed pattern state is discarded:
///   auto-clear firing, a manual [`clear`](Self::clear), or a new gesture
///   wiping a prior pattern (pending clear or not)
pub struct PatternLock<P: PatternProvider> {
    provider: P,
    /// Dots per axis.
    cell_count: u32,
    dot_size: f32,
    selected_dot_size: f32,
    line_stroke: f32,
    extra_touch: f32,
    colors: PatternLockColors,
    matchers: Vec<Arc<dyn PatternMatcher<P::Pattern>>>,
    /// `None` disables auto-clear entirely.
    clear_delay: Option<Duration>,
    viewport: Size,
    handler: PatternInputHandler,
    /// Whether the wrong-pattern color variant is active.
    wrong: bool,
    /// At most one pending auto-clear; replaced or cancelled on preemption.
    clear_task: Deferred,

    /// Signal emitted when a gesture completes.
    pub pattern_completed: Signal<PatternResult<P::Pattern>>,
    /// Signal emitted when the pattern is cleared.
    pub cleared: Signal<()>,
}

impl PatternLock<StringPatternProvider> {
    /// Create a pattern lock over the reference string codec.
    pub fn strings(cell_count: u32) -> Result<Self> {
        Self::new(StringPatternProvider::new(), cell_count)
    }
}

impl<P: PatternProvider> PatternLock<P> {
    /// Create a pattern lock with `cell_count` dots per axis.
    ///
    /// Fails with [`Error::Configuration`] when `cell_count` is zero. The
    /// dot grid is empty until the first [`set_viewport`](Self::set_viewport)
    /// with a non-zero size.
    pub fn new(provider: P, cell_count: u32) -> Result<Self> {
        if cell_count < 1 {
            return Err(Error::configuration("cell count must be at least 1"));
        }

        let mut lock = Self {
            provider,
            cell_count,
            dot_size: DEFAULT_DOT_SIZE,
            selected_dot_size: DEFAULT_SELECTED_DOT_SIZE,
            line_stroke: DEFAULT_LINE_STROKE,
            extra_touch: DEFAULT_EXTRA_TOUCH,
            colors: PatternLockColors::default(),
            matchers: Vec::new(),
            clear_delay: Some(DEFAULT_CLEAR_DELAY),
            viewport: Size::ZERO,
            handler: PatternInputHandler::new(0.0, Vec::new()),
            wrong: false,
            clear_task: Deferred::new(),
            pattern_completed: Signal::new(),
            cleared: Signal::new(),
        };
        lock.relayout();
        Ok(lock)
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Set the unselected dot diameter using builder pattern.
    pub fn with_dot_size(mut self, size: f32) -> Self {
        self.dot_size = size;
        self.relayout();
        self
    }

    /// Set the selected-container diameter using builder pattern.
    pub fn with_selected_dot_size(mut self, size: f32) -> Self {
        self.selected_dot_size = size;
        self.relayout();
        self
    }

    /// Set the line stroke width using builder pattern.
    pub fn with_line_stroke(mut self, width: f32) -> Self {
        self.line_stroke = width;
        self
    }

    /// Set the extra touch margin using builder pattern.
    pub fn with_extra_touch(mut self, margin: f32) -> Self {
        self.extra_touch = margin;
        self.relayout();
        self
    }

    /// Set the color set using builder pattern.
    pub fn with_colors(mut self, colors: PatternLockColors) -> Self {
        self.colors = colors;
        self
    }

    /// Append a matcher to the evaluation order using builder pattern.
    pub fn with_matcher(mut self, matcher: impl PatternMatcher<P::Pattern> + 'static) -> Self {
        self.matchers.push(Arc::new(matcher));
        self
    }

    /// Replace the matcher list using builder pattern.
    pub fn with_matchers(mut self, matchers: Vec<Arc<dyn PatternMatcher<P::Pattern>>>) -> Self {
        self.matchers = matchers;
        self
    }

    /// Set the auto-clear delay using builder pattern; `None` disables
    /// auto-clear (the pattern persists until a new gesture or an explicit
    /// [`clear`](Self::clear)).
    pub fn with_clear_delay(mut self, delay: Option<Duration>) -> Self {
        self.clear_delay = delay;
        self
    }

    /// The configured color set.
    pub fn colors(&self) -> &PatternLockColors {
        &self.colors
    }

    /// Set the color set.
    pub fn set_colors(&mut self, colors: PatternLockColors) {
        self.colors = colors;
    }

    /// The configured auto-clear delay.
    pub fn clear_delay(&self) -> Option<Duration> {
        self.clear_delay
    }

    /// Set the auto-clear delay; `None` disables auto-clear.
    pub fn set_clear_delay(&mut self, delay: Option<Duration>) {
        self.clear_delay = delay;
    }

    /// Dots per axis.
    pub fn cell_count(&self) -> u32 {
        self.cell_count
    }

    /// The pattern provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    // =========================================================================
    // State access (for per-frame rendering)
    // =========================================================================

    /// The laid-out dot grid; empty until the viewport is known.
    pub fn dots(&self) -> &[Dot] {
        self.handler.dots()
    }

    /// Dots connected by the current or just-completed gesture.
    pub fn connected_dots(&self) -> &[Dot] {
        self.handler.connected_dots()
    }

    /// Committed line segments of the current or just-completed gesture.
    pub fn connected_lines(&self) -> &[Line] {
        self.handler.connected_lines()
    }

    /// The live rubber-band segment.
    pub fn current_line(&self) -> Line {
        self.handler.current_line()
    }

    /// Whether the wrong-pattern color variant is active.
    pub fn is_wrong(&self) -> bool {
        self.wrong
    }

    // =========================================================================
    // Host integration
    // =========================================================================

    /// Inform the surface of its drawable area.
    ///
    /// Recomputes the dot grid when the size changes; layout is a pure
    /// function of `(cell_count, size, selected_dot_size)`. Changing the
    /// size mid-gesture discards the gesture.
    pub fn set_viewport(&mut self, size: Size) {
        if size == self.viewport && !self.dots().is_empty() {
            return;
        }
        self.viewport = size;
        self.relayout();
    }

    /// Feed one pointer event from the host's event stream, stamped with
    /// the real clock.
    ///
    /// Convenience over [`handle_pointer_at`](Self::handle_pointer_at) for
    /// hosts that also drive [`tick`](Self::tick) with `Instant::now()`.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        self.handle_pointer_at(event, Instant::now())
    }

    /// Feed one pointer event, treating `now` as the current time.
    ///
    /// Returns whether the event affected the surface. Completion runs the
    /// provider and matcher set, emits `pattern_completed`, and anchors the
    /// auto-clear deadline at `now`; a new gesture start preempts any
    /// pending auto-clear and discards a prior pattern. `now` must come
    /// from the same clock later passed to [`tick`](Self::tick).
    pub fn handle_pointer_at(&mut self, event: PointerEvent, now: Instant) -> bool {
        let had_pattern = self.handler.is_active();
        match self.handler.handle_event(event) {
            EventOutcome::Ignored => false,
            EventOutcome::Started => {
                self.preempt_pending_clear(had_pattern);
                true
            }
            EventOutcome::Updated => true,
            EventOutcome::Finished(dots) => {
                self.complete(&dots, now);
                true
            }
        }
    }

    /// Advance time; fires the pending auto-clear when due.
    ///
    /// Hosts call this from their frame or timer loop with the current
    /// instant, on the same clock that stamps pointer events.
    pub fn tick(&mut self, now: Instant) {
        if self.clear_task.poll(now) {
            tracing::debug!(target: targets::SURFACE, "auto-clear fired");
            self.handler.clear();
            self.wrong = false;
            self.cleared.emit(());
        }
    }

    /// Clear the pattern immediately and cancel any pending auto-clear.
    pub fn clear(&mut self) {
        self.clear_task.cancel();
        self.handler.clear();
        self.wrong = false;
        self.cleared.emit(());
    }

    /// Draw the current state through the host's painter.
    pub fn paint(&self, painter: &mut dyn Painter) {
        let (selected_dot, container, line_color) = if self.wrong {
            (
                self.colors.wrong_dot,
                self.colors.wrong_selected_dot_container,
                self.colors.wrong_pattern,
            )
        } else {
            (
                self.colors.selected_dot,
                self.colors.selected_dot_container,
                self.colors.pattern,
            )
        };

        for dot in self.dots() {
            let selected = self.handler.is_connected(dot.cell);
            let fill = if selected { selected_dot } else { self.colors.dot };
            painter.fill_circle(dot.center, self.dot_size / 2.0, fill);

            if selected {
                painter.fill_circle(dot.center, self.selected_dot_size / 2.0, container);
            }
        }

        let stroke = Stroke::new(line_color, self.line_stroke);
        let current = self.current_line();
        if current.is_fully_specified() {
            painter.draw_line(current.start, current.end, &stroke);
        }
        for line in self.connected_lines() {
            painter.draw_line(line.start, line.end, &stroke);
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Recompute the dot grid and rebuild the input handler over it.
    ///
    /// The grid divides each axis into `cell_count - 1` spans; dots are kept
    /// clear of the edges by the selected-container radius since that is the
    /// largest circle drawn.
    fn relayout(&mut self) {
        let dots = dots_positioned_evenly(
            self.cell_count - 1,
            self.viewport,
            self.selected_dot_size,
        );
        let capture_half_width = self.dot_size / 2.0 + self.extra_touch;
        self.handler = PatternInputHandler::new(capture_half_width, dots);
    }

    /// Reset colors and cancel a pending auto-clear when a new gesture
    /// starts, so a stale clear cannot wipe the new gesture's state.
    ///
    /// Emits `cleared` whenever something was actually discarded: a pending
    /// auto-clear, or a persisted pattern the handler wiped to seed the new
    /// session.
    fn preempt_pending_clear(&mut self, discarded_pattern: bool) {
        self.wrong = false;
        let was_pending = self.clear_task.cancel();
        if was_pending {
            tracing::debug!(target: targets::SURFACE, "pending auto-clear preempted");
        }
        if was_pending || discarded_pattern {
            self.cleared.emit(());
        }
    }

    /// Run the completion pipeline for a finished gesture.
    fn complete(&mut self, dots: &[Dot], now: Instant) {
        if dots.is_empty() {
            return;
        }

        let cells: Vec<Cell> = dots.iter().map(|d| d.cell).collect();
        let pattern = self.provider.build(&cells);
        let invalidator = first_invalidator(&self.matchers, &cells, &pattern);
        self.wrong = invalidator.is_some();

        if let Some(delay) = self.clear_delay {
            self.clear_task.schedule(now, delay);
        }

        tracing::debug!(
            target: targets::SURFACE,
            cells = cells.len(),
            success = invalidator.is_none(),
            "pattern completed"
        );

        self.pattern_completed.emit(PatternResult {
            pattern,
            cells,
            invalidator,
        });
    }
}

static_assertions::assert_impl_all!(PatternLock<StringPatternProvider>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::LengthMatcher;
    use gridlock_core::{Color, Point};
    use parking_lot::Mutex;

    /// Painter that records every draw call.
    #[derive(Default)]
    struct RecordingPainter {
        circles: Vec<(Point, f32, Color)>,
        lines: Vec<(Point, Point, Stroke)>,
    }

    impl Painter for RecordingPainter {
        fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
            self.circles.push((center, radius, color));
        }

        fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
            self.lines.push((from, to, *stroke));
        }
    }

    /// A 3x3 lock laid out over 300x300: centers at 12/150/288 per axis.
    fn lock() -> PatternLock<StringPatternProvider> {
        let mut lock = PatternLock::strings(3).unwrap();
        lock.set_viewport(Size::new(300.0, 300.0));
        lock
    }

    fn center_of(lock: &PatternLock<StringPatternProvider>, row: u32, column: u32) -> Point {
        lock.dots()
            .iter()
            .find(|d| d.cell == Cell::new(row, column))
            .unwrap()
            .center
    }

    /// Press on the first cell, move through the rest, release on the last.
    fn swipe(lock: &mut PatternLock<StringPatternProvider>, path: &[(u32, u32)]) {
        let positions: Vec<Point> = path.iter().map(|&(r, c)| center_of(lock, r, c)).collect();
        assert!(lock.handle_pointer(PointerEvent::pressed(positions[0])));
        for &position in &positions[1..] {
            assert!(lock.handle_pointer(PointerEvent::moved(position)));
        }
        let last = *positions.last().unwrap();
        assert!(lock.handle_pointer(PointerEvent::released(last)));
    }

    #[test]
    fn test_zero_cell_count_is_rejected() {
        assert!(matches!(
            PatternLock::strings(0),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_viewport_drives_layout() {
        let mut lock = PatternLock::strings(3).unwrap();
        assert!(lock.dots().is_empty());

        lock.set_viewport(Size::new(300.0, 300.0));
        assert_eq!(lock.dots().len(), 9);

        lock.set_viewport(Size::new(150.0, 150.0));
        assert_eq!(lock.dots().len(), 9);
        assert_eq!(center_of(&lock, 1, 1), Point::new(75.0, 75.0));
    }

    #[test]
    fn test_end_to_end_success() {
        let mut lock = lock().with_matcher(LengthMatcher::at_least(4));

        let captured: Arc<Mutex<Option<PatternResult<String>>>> = Arc::new(Mutex::new(None));
        let slot = captured.clone();
        lock.pattern_completed.connect(move |result| {
            *slot.lock() = Some(result.clone());
        });

        swipe(&mut lock, &[(0, 0), (0, 1), (0, 2), (1, 1), (2, 0)]);

        let result = captured.lock().take().expect("one result per gesture");
        assert!(result.success());
        assert_eq!(result.pattern, "0-0,0-1,0-2,1-1,2-0");
        assert_eq!(
            result.cells,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 1),
                Cell::new(2, 0),
            ]
        );

        assert_eq!(lock.connected_dots().len(), 5);
        assert_eq!(lock.connected_lines().len(), 4);
        assert!(lock.current_line().is_unspecified());
        assert!(!lock.is_wrong());
    }

    #[test]
    fn test_rejected_pattern_switches_palette() {
        let mut lock = lock().with_matcher(LengthMatcher::at_least(6));
        swipe(&mut lock, &[(0, 0), (0, 1)]);
        assert!(lock.is_wrong());

        let mut painter = RecordingPainter::default();
        lock.paint(&mut painter);
        let wrong = lock.colors().wrong_pattern;
        assert!(painter.lines.iter().all(|(_, _, s)| s.color == wrong));
    }

    #[test]
    fn test_rejected_result_carries_invalidator() {
        let mut lock = lock().with_matcher(LengthMatcher::at_least(6));

        let captured: Arc<Mutex<Option<PatternResult<String>>>> = Arc::new(Mutex::new(None));
        let slot = captured.clone();
        lock.pattern_completed.connect(move |result| {
            *slot.lock() = Some(result.clone());
        });

        swipe(&mut lock, &[(0, 0), (0, 1)]);
        let result = captured.lock().take().unwrap();
        assert!(!result.success());
        assert!(result.invalidator.is_some());
    }

    #[test]
    fn test_empty_gesture_emits_nothing() {
        let mut lock = lock();
        let fired = Arc::new(Mutex::new(0u32));
        let slot = fired.clone();
        lock.pattern_completed.connect(move |_| *slot.lock() += 1);

        // Dead center between dots: no hit, no result.
        assert!(!lock.handle_pointer(PointerEvent::pressed((75.0, 75.0))));
        assert!(!lock.handle_pointer(PointerEvent::released((75.0, 75.0))));
        assert_eq!(*fired.lock(), 0);
    }

    #[test]
    fn test_auto_clear_fires_after_delay() {
        let mut lock = lock().with_clear_delay(Some(Duration::ZERO));
        let cleared = Arc::new(Mutex::new(0u32));
        let slot = cleared.clone();
        lock.cleared.connect(move |_| *slot.lock() += 1);

        swipe(&mut lock, &[(0, 0), (0, 1)]);
        assert_eq!(lock.connected_dots().len(), 2);

        lock.tick(Instant::now());
        assert!(lock.connected_dots().is_empty());
        assert!(lock.connected_lines().is_empty());
        assert!(!lock.is_wrong());
        assert_eq!(*cleared.lock(), 1);

        // Consumed: further ticks do nothing.
        lock.tick(Instant::now());
        assert_eq!(*cleared.lock(), 1);
    }

    #[test]
    fn test_auto_clear_disabled_persists_pattern() {
        let mut lock = lock().with_clear_delay(None);
        swipe(&mut lock, &[(0, 0), (0, 1)]);

        lock.tick(Instant::now() + Duration::from_secs(60));
        assert_eq!(lock.connected_dots().len(), 2);
    }

    #[test]
    fn test_new_gesture_preempts_pending_clear() {
        let mut lock = lock().with_clear_delay(Some(Duration::from_millis(800)));
        swipe(&mut lock, &[(0, 0), (0, 1)]);

        // Start a new gesture before the clear fires.
        assert!(lock.handle_pointer(PointerEvent::pressed(center_of(&lock, 2, 2))));
        assert_eq!(lock.connected_dots().len(), 1);

        // Long past the original deadline: the stale clear must not wipe
        // the new gesture.
        lock.tick(Instant::now() + Duration::from_secs(10));
        assert_eq!(lock.connected_dots().len(), 1);
        assert_eq!(
            lock.connected_dots()[0].cell,
            Cell::new(2, 2)
        );
    }

    #[test]
    fn test_clear_deadline_follows_supplied_clock() {
        let mut lock = lock().with_clear_delay(Some(Duration::from_millis(800)));
        // A simulated clock far ahead of the real one: a deadline anchored
        // to the real clock would fire on the first tick below.
        let t0 = Instant::now() + Duration::from_secs(3600);

        let a = center_of(&lock, 0, 0);
        let b = center_of(&lock, 0, 1);
        assert!(lock.handle_pointer_at(PointerEvent::pressed(a), t0));
        assert!(lock.handle_pointer_at(PointerEvent::moved(b), t0));
        assert!(lock.handle_pointer_at(PointerEvent::released(b), t0));

        lock.tick(t0 + Duration::from_millis(799));
        assert_eq!(lock.connected_dots().len(), 2);

        lock.tick(t0 + Duration::from_millis(800));
        assert!(lock.connected_dots().is_empty());
    }

    #[test]
    fn test_restart_over_persisted_pattern_emits_cleared() {
        // Auto-clear disabled: the completed pattern persists with no
        // pending timer.
        let mut lock = lock().with_clear_delay(None);
        swipe(&mut lock, &[(0, 0), (0, 1)]);
        assert_eq!(lock.connected_dots().len(), 2);

        let cleared = Arc::new(Mutex::new(0u32));
        let slot = cleared.clone();
        lock.cleared.connect(move |_| *slot.lock() += 1);

        // The new gesture discards the persisted pattern, which must be
        // observable as a clear.
        assert!(lock.handle_pointer(PointerEvent::pressed(center_of(&lock, 2, 2))));
        assert_eq!(*cleared.lock(), 1);
        assert_eq!(lock.connected_dots().len(), 1);
    }

    #[test]
    fn test_fresh_gesture_does_not_emit_cleared() {
        let mut lock = lock();
        let cleared = Arc::new(Mutex::new(0u32));
        let slot = cleared.clone();
        lock.cleared.connect(move |_| *slot.lock() += 1);

        // Nothing displayed and nothing pending: no clear to report.
        assert!(lock.handle_pointer(PointerEvent::pressed(center_of(&lock, 0, 0))));
        assert_eq!(*cleared.lock(), 0);
    }

    #[test]
    fn test_preemption_resets_wrong_palette() {
        let mut lock = lock().with_matcher(LengthMatcher::at_least(6));
        swipe(&mut lock, &[(0, 0), (0, 1)]);
        assert!(lock.is_wrong());

        assert!(lock.handle_pointer(PointerEvent::pressed(center_of(&lock, 1, 1))));
        assert!(!lock.is_wrong());
    }

    #[test]
    fn test_manual_clear_cancels_pending_task() {
        let mut lock = lock();
        swipe(&mut lock, &[(0, 0), (0, 1)]);

        lock.clear();
        assert!(lock.connected_dots().is_empty());

        // The cancelled task never fires a second clear signal.
        let cleared = Arc::new(Mutex::new(0u32));
        let slot = cleared.clone();
        lock.cleared.connect(move |_| *slot.lock() += 1);
        lock.tick(Instant::now() + Duration::from_secs(10));
        assert_eq!(*cleared.lock(), 0);
    }

    #[test]
    fn test_paint_draws_grid_and_selection() {
        let mut lock = lock();
        swipe(&mut lock, &[(0, 0), (0, 1), (0, 2)]);

        let mut painter = RecordingPainter::default();
        lock.paint(&mut painter);

        // 9 dots plus one container per selected dot.
        assert_eq!(painter.circles.len(), 9 + 3);
        // Rubber band is unspecified after release: committed lines only.
        assert_eq!(painter.lines.len(), 2);

        let accent = lock.colors().selected_dot;
        let selected: Vec<_> = painter
            .circles
            .iter()
            .filter(|(_, _, color)| *color == accent)
            .collect();
        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn test_paint_includes_rubber_band_mid_gesture() {
        let mut lock = lock();
        assert!(lock.handle_pointer(PointerEvent::pressed(center_of(&lock, 0, 0))));
        assert!(lock.handle_pointer(PointerEvent::moved((75.0, 75.0))));

        let mut painter = RecordingPainter::default();
        lock.paint(&mut painter);

        assert_eq!(painter.lines.len(), 1);
        let (from, to, _) = painter.lines[0];
        assert_eq!(from, center_of(&lock, 0, 0));
        assert_eq!(to, Point::new(75.0, 75.0));
    }
}
