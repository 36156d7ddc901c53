//! Color set for the pattern lock surface.

use gridlock_core::Color;

/// Colors for dots, selection containers, and pattern lines, with separate
/// variants for the wrong-pattern feedback state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternLockColors {
    /// Unselected dot fill.
    pub dot: Color,
    /// Selected dot fill.
    pub selected_dot: Color,
    /// Translucent container drawn around a selected dot.
    pub selected_dot_container: Color,
    /// Committed and rubber-band line color.
    pub pattern: Color,
    /// Selected dot fill after a rejected gesture.
    pub wrong_dot: Color,
    /// Line color after a rejected gesture.
    pub wrong_pattern: Color,
    /// Selection container after a rejected gesture.
    pub wrong_selected_dot_container: Color,
}

impl PatternLockColors {
    /// Build a color set from the three base colors; containers derive from
    /// their dot color at half alpha.
    pub fn from_base(dot: Color, accent: Color, error: Color) -> Self {
        Self {
            dot,
            selected_dot: accent,
            selected_dot_container: accent.with_alpha(0.5),
            pattern: accent,
            wrong_dot: error,
            wrong_pattern: error,
            wrong_selected_dot_container: error.with_alpha(0.5),
        }
    }
}

impl Default for PatternLockColors {
    /// Neutral gray dots, blue accent, red error.
    fn default() -> Self {
        Self::from_base(
            Color::from_rgb8(120, 120, 120),
            Color::from_rgb8(66, 133, 244),
            Color::from_rgb8(211, 47, 47),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_containers_derive_from_dot_colors() {
        let colors = PatternLockColors::default();
        assert_eq!(
            colors.selected_dot_container,
            colors.selected_dot.with_alpha(0.5)
        );
        assert_eq!(
            colors.wrong_selected_dot_container,
            colors.wrong_dot.with_alpha(0.5)
        );
        assert_eq!(colors.pattern, colors.selected_dot);
    }
}
