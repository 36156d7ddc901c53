//! Pattern providers: codecs between cell sequences and pattern values.

use gridlock_core::{Error, Result};

use crate::cell::Cell;

/// Converts an ordered cell sequence to and from an opaque pattern value.
///
/// Implementations form a round-trip codec: `parse(&build(cells)) == cells`
/// for every valid, non-empty `cells`. Behavior on empty input is
/// provider-defined and must be documented by each implementation. `parse`
/// must fail deterministically with [`Error::Format`] on malformed input
/// rather than substituting default cells.
pub trait PatternProvider {
    /// The opaque pattern value, e.g. a serialized string. Owned data, so
    /// results and matchers can hold it past the gesture that produced it.
    type Pattern: 'static;

    /// Build a pattern value from an ordered cell sequence.
    fn build(&self, cells: &[Cell]) -> Self::Pattern;

    /// Recover the ordered cell sequence from a pattern value.
    fn parse(&self, pattern: &Self::Pattern) -> Result<Vec<Cell>>;
}

/// The reference string codec: comma-separated `row-column` tokens.
///
/// Cells `[(0,0), (1,1), (2,2)]` encode as `"0-0,1-1,2-2"`. Building an
/// empty sequence yields the empty string; parsing the empty string is a
/// format error (an empty token is malformed), so the round-trip law holds
/// for non-empty sequences only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringPatternProvider;

impl StringPatternProvider {
    /// Create the string provider.
    pub const fn new() -> Self {
        Self
    }
}

impl PatternProvider for StringPatternProvider {
    type Pattern = String;

    fn build(&self, cells: &[Cell]) -> String {
        cells
            .iter()
            .map(Cell::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    fn parse(&self, pattern: &String) -> Result<Vec<Cell>> {
        pattern
            .split(',')
            .map(|token| {
                let (row, column) = token.split_once('-').ok_or_else(|| {
                    Error::format(format!("token `{token}` is not of the form `row-column`"))
                })?;
                let row = row.parse().map_err(|_| {
                    Error::format(format!("token `{token}` has a non-numeric row"))
                })?;
                let column = column.parse().map_err(|_| {
                    Error::format(format!("token `{token}` has a non-numeric column"))
                })?;
                Ok(Cell::new(row, column))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_reference_encoding() {
        let provider = StringPatternProvider::new();
        let cells = [Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2)];
        assert_eq!(provider.build(&cells), "0-0,1-1,2-2");
    }

    #[test]
    fn test_round_trip() {
        let provider = StringPatternProvider::new();
        let cells = vec![
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(0, 2),
            Cell::new(1, 1),
            Cell::new(2, 0),
        ];
        let pattern = provider.build(&cells);
        assert_eq!(provider.parse(&pattern).unwrap(), cells);
    }

    #[test]
    fn test_build_empty_is_empty_string() {
        let provider = StringPatternProvider::new();
        assert_eq!(provider.build(&[]), "");
    }

    #[test]
    fn test_parse_rejects_empty_string() {
        let provider = StringPatternProvider::new();
        assert!(matches!(
            provider.parse(&String::new()),
            Err(Error::Format { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_tokens() {
        let provider = StringPatternProvider::new();
        for input in ["0", "0-", "-0", "a-1", "1-b", "0-0,", "0-0,,1-1", "1.5-2"] {
            let result = provider.parse(&input.to_string());
            assert!(
                matches!(result, Err(Error::Format { .. })),
                "expected format error for {input:?}, got {result:?}"
            );
        }
    }
}
