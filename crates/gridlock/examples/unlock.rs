//! Gridlock Unlock Example
//!
//! Drives a complete unlock cycle without a windowing host:
//! - Layout: 3x3 grid over a 300x300 viewport
//! - Input: a scripted swipe with a diagonal jump (skip inference)
//! - Matching: minimum length plus an exact reference pattern
//! - Auto-clear: simulated clock, preemption by a second gesture
//!
//! Draw calls are printed through a console painter. Run with:
//! cargo run -p gridlock --example unlock
//!
//! Set RUST_LOG (e.g. RUST_LOG=gridlock=trace) to watch the pipeline log.

use std::time::{Duration, Instant};

use gridlock::prelude::*;

/// Painter that narrates draw calls instead of rasterizing.
#[derive(Default)]
struct ConsolePainter {
    circles: u32,
    lines: u32,
}

impl Painter for ConsolePainter {
    fn fill_circle(&mut self, center: Point, radius: f32, _color: Color) {
        self.circles += 1;
        println!("  circle r={radius:>4.1} at ({:>5.1}, {:>5.1})", center.x, center.y);
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.lines += 1;
        println!(
            "  line   w={:>4.1} ({:>5.1}, {:>5.1}) -> ({:>5.1}, {:>5.1})",
            stroke.width, from.x, from.y, to.x, to.y
        );
    }
}

fn center_of(lock: &PatternLock<StringPatternProvider>, row: u32, column: u32) -> Point {
    lock.dots()
        .iter()
        .find(|d| d.cell == Cell::new(row, column))
        .expect("cell is on the grid")
        .center
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gridlock=debug")),
        )
        .init();

    let mut lock = PatternLock::strings(3)
        .expect("cell count is valid")
        .with_matcher(LengthMatcher::at_least(4))
        .with_matcher(EqualityMatcher::new("0-0,1-1,2-2,2-1".to_string()))
        .with_clear_delay(Some(Duration::from_millis(800)));

    lock.pattern_completed.connect(|result| {
        if result.success() {
            println!("unlocked: {} ({} cells)", result.pattern, result.cells.len());
        } else {
            println!(
                "rejected: {} by {:?}",
                result.pattern,
                result.invalidator.as_ref().expect("rejected results carry an invalidator")
            );
        }
    });
    lock.cleared.connect(|_| println!("pattern cleared"));

    lock.set_viewport(Size::new(300.0, 300.0));
    println!("laid out {} dots", lock.dots().len());

    // Swipe from the top-left corner to the bottom-right, then one step
    // left. The corner-to-corner jump skips the grid center, which is
    // inferred and spliced in automatically.
    let clock = Instant::now();
    let path = [
        PointerEvent::pressed(center_of(&lock, 0, 0)),
        PointerEvent::moved(center_of(&lock, 2, 2)),
        PointerEvent::moved(center_of(&lock, 2, 1)),
        PointerEvent::released(center_of(&lock, 2, 1)),
    ];
    for event in path {
        lock.handle_pointer_at(event, clock);
    }

    println!("painting the completed pattern:");
    let mut painter = ConsolePainter::default();
    lock.paint(&mut painter);
    println!("  ({} circles, {} lines)", painter.circles, painter.lines);

    // Let the auto-clear deadline pass.
    lock.tick(clock + Duration::from_millis(800));
    assert!(lock.connected_dots().is_empty());

    // A second, too-short gesture is rejected by the length matcher and
    // preempted by a third press before its auto-clear fires.
    lock.handle_pointer_at(PointerEvent::pressed(center_of(&lock, 0, 0)), clock);
    lock.handle_pointer_at(PointerEvent::moved(center_of(&lock, 0, 1)), clock);
    lock.handle_pointer_at(PointerEvent::released(center_of(&lock, 0, 1)), clock);

    lock.handle_pointer_at(PointerEvent::pressed(center_of(&lock, 1, 1)), clock);
    lock.tick(clock + Duration::from_secs(10));
    assert_eq!(lock.connected_dots().len(), 1, "preempted clear must not fire");
    println!("new gesture survived the preempted auto-clear");
}
