//! Prelude module for Gridlock.
//!
//! Re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use gridlock::prelude::*;
//! ```

pub use crate::cell::{Cell, Dot};
pub use crate::colors::PatternLockColors;
pub use crate::input::{EventOutcome, PatternInputHandler, PointerAction, PointerEvent};
pub use crate::line::Line;
pub use crate::matcher::{EqualityMatcher, LengthMatcher, PatternMatcher};
pub use crate::painter::{Painter, Stroke};
pub use crate::provider::{PatternProvider, StringPatternProvider};
pub use crate::result::PatternResult;
pub use crate::surface::PatternLock;

pub use gridlock_core::{Color, Error, Point, Result, Signal, Size};
