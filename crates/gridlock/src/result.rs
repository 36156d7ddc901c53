//! The terminal result of a completed gesture.

use std::sync::Arc;

use crate::cell::Cell;
use crate::matcher::PatternMatcher;

/// Everything a caller learns from one completed gesture: the built pattern
/// value, the ordered cells it visited, and the first failing matcher if
/// any.
///
/// Created once per completed gesture and delivered through the surface's
/// completion signal; immutable thereafter.
#[derive(Debug, Clone)]
pub struct PatternResult<T> {
    /// The opaque pattern value built by the provider.
    pub pattern: T,
    /// The ordered cells the gesture connected.
    pub cells: Vec<Cell>,
    /// The first matcher that rejected the gesture, if any.
    pub invalidator: Option<Arc<dyn PatternMatcher<T>>>,
}

impl<T> PatternResult<T> {
    /// Whether every matcher accepted the gesture.
    pub fn success(&self) -> bool {
        self.invalidator.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::LengthMatcher;

    #[test]
    fn test_success_iff_no_invalidator() {
        let ok: PatternResult<String> = PatternResult {
            pattern: "0-0,1-1".to_string(),
            cells: vec![Cell::new(0, 0), Cell::new(1, 1)],
            invalidator: None,
        };
        assert!(ok.success());

        let rejected = PatternResult {
            invalidator: Some(
                Arc::new(LengthMatcher::at_least(4)) as Arc<dyn PatternMatcher<String>>
            ),
            ..ok
        };
        assert!(!rejected.success());
    }
}
