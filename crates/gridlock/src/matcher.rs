//! Pattern matchers: pass/fail predicates over a completed gesture.

use std::fmt;
use std::sync::Arc;

use gridlock_core::{Error, Result};

use crate::cell::Cell;

/// A correctness rule evaluated against a completed cell sequence and its
/// built pattern value.
///
/// Matchers are stateless, reusable across gestures, and composable as an
/// ordered list. The list is evaluated first-failure: the first matcher
/// returning `false` becomes the result's invalidator, and an empty list
/// always succeeds.
pub trait PatternMatcher<T>: fmt::Debug + Send + Sync {
    /// Whether the completed gesture satisfies this rule.
    fn matches(&self, cells: &[Cell], pattern: &T) -> bool;
}

/// Find the first failing matcher, if any.
pub fn first_invalidator<T>(
    matchers: &[Arc<dyn PatternMatcher<T>>],
    cells: &[Cell],
    pattern: &T,
) -> Option<Arc<dyn PatternMatcher<T>>> {
    matchers
        .iter()
        .find(|matcher| !matcher.matches(cells, pattern))
        .cloned()
}

/// Passes iff the connected cell count lies within `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthMatcher {
    min: usize,
    max: usize,
}

impl LengthMatcher {
    /// Require at least `min` connected cells, with no upper bound.
    pub const fn at_least(min: usize) -> Self {
        Self {
            min,
            max: usize::MAX,
        }
    }

    /// Require between `min` and `max` connected cells, inclusive.
    ///
    /// Inverted bounds are rejected at construction rather than manifesting
    /// as a matcher that silently never passes.
    pub fn between(min: usize, max: usize) -> Result<Self> {
        if min > max {
            return Err(Error::configuration(format!(
                "length bounds are inverted: min {min} > max {max}"
            )));
        }
        Ok(Self { min, max })
    }

    /// The minimum accepted length.
    pub const fn min(&self) -> usize {
        self.min
    }

    /// The maximum accepted length.
    pub const fn max(&self) -> usize {
        self.max
    }
}

impl<T> PatternMatcher<T> for LengthMatcher {
    fn matches(&self, cells: &[Cell], _pattern: &T) -> bool {
        (self.min..=self.max).contains(&cells.len())
    }
}

/// Passes iff the built pattern value equals a target reference value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualityMatcher<T> {
    target: T,
}

impl<T> EqualityMatcher<T> {
    /// Match against `target` using value equality.
    pub const fn new(target: T) -> Self {
        Self { target }
    }

    /// The reference pattern value.
    pub const fn target(&self) -> &T {
        &self.target
    }
}

impl<T> PatternMatcher<T> for EqualityMatcher<T>
where
    T: PartialEq + fmt::Debug + Send + Sync,
{
    fn matches(&self, _cells: &[Cell], pattern: &T) -> bool {
        self.target == *pattern
    }
}
