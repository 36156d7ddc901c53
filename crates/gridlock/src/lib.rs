//! Gridlock - an embeddable pattern-lock gesture widget.
//!
//! Gridlock turns a stream of pointer events over a square dot grid into an
//! ordered sequence of connected cells (an Android-style "connect the dots"
//! unlock gesture), infers dots the gesture skipped over, and validates the
//! completed pattern against a pluggable matcher list.
//!
//! The crate is host-agnostic: it owns no window, event loop, or renderer.
//! A host feeds [`PatternLock`] viewport sizes, pointer events, and time,
//! draws through the [`Painter`] boundary, and listens on the completion
//! signal.
//!
//! # Example
//!
//! ```
//! use gridlock::prelude::*;
//! use std::time::Duration;
//!
//! let mut lock = PatternLock::strings(3)?
//!     .with_matcher(LengthMatcher::at_least(4))
//!     .with_clear_delay(Some(Duration::from_millis(800)));
//!
//! lock.pattern_completed.connect(|result| {
//!     if result.success() {
//!         println!("unlocked with {}", result.pattern);
//!     }
//! });
//!
//! lock.set_viewport(Size::new(300.0, 300.0));
//! // Feed pointer events from the host event source:
//! lock.handle_pointer(PointerEvent::pressed((12.0, 12.0)));
//! # Ok::<(), gridlock::Error>(())
//! ```

pub mod cell;
pub mod colors;
pub mod input;
pub mod layout;
pub mod line;
pub mod matcher;
pub mod painter;
pub mod prelude;
pub mod provider;
pub mod result;
pub mod surface;

pub use cell::{Cell, Dot};
pub use colors::PatternLockColors;
pub use input::{EventOutcome, PatternInputHandler, PointerAction, PointerEvent};
pub use layout::dots_positioned_evenly;
pub use line::Line;
pub use matcher::{EqualityMatcher, LengthMatcher, PatternMatcher, first_invalidator};
pub use painter::{Painter, Stroke};
pub use provider::{PatternProvider, StringPatternProvider};
pub use result::PatternResult;
pub use surface::PatternLock;

pub use gridlock_core::{Color, ConnectionId, Error, Point, Result, Signal, Size};
