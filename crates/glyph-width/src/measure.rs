#![forbid(unsafe_code)]

//! Display-width scanners.
//!
//! [`width`] sums the columns of a single line. [`wrapped_width`] lays the
//! same text out on a terminal of fixed width, where a wide glyph that would
//! straddle two rows is pushed to the start of the next row instead.
//!
//! # Example
//! ```
//! use glyph_width::UnicodeClassifier;
//! use glyph_width::measure::{width, wrapped_width};
//!
//! let classifier = UnicodeClassifier::new();
//! let line: Vec<char> = "ab\u{4E2D}".chars().collect();
//! assert_eq!(width(&classifier, &line), 4);
//!
//! // On a 3-column terminal the wide glyph cannot start in column 2.
//! assert_eq!(wrapped_width(&classifier, &line, 3, 0), 5);
//! ```

use crate::class::{GlyphClass, GlyphClassifier, class_of};
use crate::escape::visible;

/// Row and column of a position on a wrapping terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct CursorPosition {
    /// Zero-based terminal row, relative to the row the scan started on.
    pub row: usize,
    /// Zero-based column within that row.
    pub column: usize,
}

impl CursorPosition {
    /// Split a linear column position for a terminal `columns` wide.
    ///
    /// A zero-column terminal cannot wrap, so everything stays on row 0.
    #[must_use]
    pub const fn from_offset(offset: usize, columns: usize) -> Self {
        if columns == 0 {
            return Self {
                row: 0,
                column: offset,
            };
        }
        Self {
            row: offset / columns,
            column: offset % columns,
        }
    }
}

/// Total display width of `s`, ignoring escape sequences.
#[must_use]
pub fn width<C: GlyphClassifier + ?Sized>(classifier: &C, s: &[char]) -> usize {
    visible(s)
        .iter()
        .map(|&ch| class_of(classifier, ch).columns())
        .sum()
}

/// Final column position after laying `s` out from column `start` on a
/// terminal `columns` wide.
///
/// When a wide glyph ends one column into a row, it would have started in
/// the last column of the previous row; the position skips one more column
/// so the glyph starts at the beginning of the row instead. With
/// `columns == 0` no wrapping happens and the result is `start + width(s)`.
/// Positions saturate at `usize::MAX`.
#[must_use]
pub fn wrapped_width<C: GlyphClassifier + ?Sized>(
    classifier: &C,
    s: &[char],
    columns: usize,
    start: usize,
) -> usize {
    if columns == 0 {
        #[cfg(feature = "tracing")]
        tracing::trace!(start, "zero-column terminal, wrapping disabled");
        return start.saturating_add(width(classifier, s));
    }

    let mut pos = start;
    for &ch in visible(s).iter() {
        match class_of(classifier, ch) {
            GlyphClass::Zero => {}
            GlyphClass::Narrow => pos = pos.saturating_add(1),
            GlyphClass::Wide => {
                pos = pos.saturating_add(2);
                if pos % columns == 1 {
                    pos = pos.saturating_add(1);
                }
            }
        }
    }
    pos
}

/// Row and column where the cursor lands after laying `s` out from column
/// `start` on a terminal `columns` wide.
#[must_use]
pub fn cursor_position<C: GlyphClassifier + ?Sized>(
    classifier: &C,
    s: &[char],
    columns: usize,
    start: usize,
) -> CursorPosition {
    CursorPosition::from_offset(wrapped_width(classifier, s, columns, start), columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::UnicodeClassifier;

    const UNICODE: UnicodeClassifier = UnicodeClassifier::new();

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    // ==========================================================================
    // width tests
    // ==========================================================================

    #[test]
    fn width_ascii() {
        assert_eq!(width(&UNICODE, &chars("hello world")), 11);
    }

    #[test]
    fn width_empty() {
        assert_eq!(width(&UNICODE, &[]), 0);
    }

    #[test]
    fn width_cjk() {
        assert_eq!(width(&UNICODE, &chars("\u{4F60}\u{597D}")), 4);
    }

    #[test]
    fn width_combining_mark_adds_nothing() {
        assert_eq!(width(&UNICODE, &chars("e\u{0301}")), 1);
        assert_eq!(width(&UNICODE, &chars("cafe\u{0301}")), 4);
    }

    #[test]
    fn width_skips_escapes() {
        assert_eq!(width(&UNICODE, &chars("\x1b[31mA\x1b[0m")), 1);
    }

    #[test]
    fn width_counts_truncated_escape() {
        // ESC, '[', '3', '1' are all below 127.
        assert_eq!(width(&UNICODE, &chars("A\x1b[31")), 5);
    }

    #[test]
    fn width_ascii_controls_count_one() {
        assert_eq!(width(&UNICODE, &chars("a\tb")), 3);
    }

    #[test]
    fn width_only_escapes() {
        assert_eq!(width(&UNICODE, &chars("\x1b[1m\x1b[0m")), 0);
    }

    #[test]
    fn width_mixed() {
        let s = chars("\x1b[1mHi \u{4E16}\u{754C}\x1b[0m!");
        assert_eq!(width(&UNICODE, &s), 8);
    }

    // ==========================================================================
    // wrapped_width tests
    // ==========================================================================

    #[test]
    fn wrapped_narrow_text_is_linear() {
        let s = chars("abcdefghijklmnop");
        assert_eq!(wrapped_width(&UNICODE, &s, 10, 0), 16);
        assert_eq!(wrapped_width(&UNICODE, &s, 10, 3), 19);
    }

    #[test]
    fn wrapped_wide_glyph_pushed_to_next_row() {
        let s = chars("123456789\u{4E2D}");
        assert_eq!(wrapped_width(&UNICODE, &s, 10, 0), 12);
    }

    #[test]
    fn wrapped_wide_glyph_that_fits() {
        let s = chars("12345678\u{4E2D}");
        assert_eq!(wrapped_width(&UNICODE, &s, 10, 0), 10);
    }

    #[test]
    fn wrapped_respects_start_offset() {
        // Starting at column 9, the wide glyph has no room on the first row.
        let s = chars("\u{4E2D}");
        assert_eq!(wrapped_width(&UNICODE, &s, 10, 9), 12);
        assert_eq!(wrapped_width(&UNICODE, &s, 10, 8), 10);
    }

    #[test]
    fn wrapped_zero_width_never_adjusts() {
        let s = chars("123456789\u{0301}");
        assert_eq!(wrapped_width(&UNICODE, &s, 10, 0), 9);
    }

    #[test]
    fn wrapped_narrow_at_row_end_never_adjusts() {
        let s = chars("1234567890a");
        assert_eq!(wrapped_width(&UNICODE, &s, 10, 0), 11);
    }

    #[test]
    fn wrapped_skips_escapes() {
        let s = chars("\x1b[31m123456789\x1b[0m\u{4E2D}");
        assert_eq!(wrapped_width(&UNICODE, &s, 10, 0), 12);
    }

    #[test]
    fn wrapped_zero_columns_disables_wrapping() {
        let s = chars("123456789\u{4E2D}");
        assert_eq!(wrapped_width(&UNICODE, &s, 0, 2), 13);
    }

    #[test]
    fn wrapped_saturates_near_usize_max() {
        let s = chars("ab\u{4E2D}");
        assert_eq!(wrapped_width(&UNICODE, &s, 10, usize::MAX - 1), usize::MAX);
        assert_eq!(wrapped_width(&UNICODE, &s, 0, usize::MAX - 1), usize::MAX);
        assert_eq!(
            cursor_position(&UNICODE, &s, 10, usize::MAX),
            CursorPosition::from_offset(usize::MAX, 10)
        );
    }

    #[test]
    fn wrapped_single_column_terminal() {
        let s = chars("a\u{4E2D}b");
        assert_eq!(wrapped_width(&UNICODE, &s, 1, 0), 4);
    }

    #[test]
    fn wrapped_successive_wide_glyphs() {
        // 5 columns: two wide glyphs fill 4, the third cannot start in column 4.
        let s = chars("\u{4E2D}\u{6587}\u{5B57}");
        assert_eq!(wrapped_width(&UNICODE, &s, 5, 0), 7);
    }

    // ==========================================================================
    // cursor_position tests
    // ==========================================================================

    #[test]
    fn cursor_position_splits_rows() {
        let s = chars("123456789\u{4E2D}");
        assert_eq!(
            cursor_position(&UNICODE, &s, 10, 0),
            CursorPosition { row: 1, column: 2 }
        );
    }

    #[test]
    fn cursor_position_zero_columns() {
        let s = chars("abc");
        assert_eq!(
            cursor_position(&UNICODE, &s, 0, 1),
            CursorPosition { row: 0, column: 4 }
        );
    }

    #[test]
    fn cursor_position_exact_row_end() {
        let s = chars("abcde");
        assert_eq!(
            cursor_position(&UNICODE, &s, 5, 0),
            CursorPosition { row: 1, column: 0 }
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::class::UnicodeClassifier;
    use proptest::prelude::*;

    const UNICODE: UnicodeClassifier = UnicodeClassifier::new();

    proptest! {
        #[test]
        fn ascii_width_equals_len(s in "[ -~]{0,80}") {
            let text: Vec<char> = s.chars().collect();
            prop_assert_eq!(width(&UNICODE, &text), text.len());
        }

        #[test]
        fn width_ignores_escapes(s in "[a-z\u{4E00}-\u{4E10}]{0,20}", code in 0u8..108) {
            let plain: Vec<char> = s.chars().collect();
            let colored: Vec<char> = format!("\x1b[{code}m{s}\x1b[0m").chars().collect();
            prop_assert_eq!(width(&UNICODE, &colored), width(&UNICODE, &plain));
        }

        #[test]
        fn wrapped_never_less_than_width(
            s in "[a-z\u{4E00}-\u{4E10}\u{0300}-\u{0306}]{0,40}",
            columns in 1usize..20,
            start in 0usize..20,
        ) {
            let text: Vec<char> = s.chars().collect();
            let plain = width(&UNICODE, &text);
            let wrapped = wrapped_width(&UNICODE, &text, columns, start);
            prop_assert!(wrapped >= start + plain);
        }

        #[test]
        fn wrapped_equals_width_without_wide(
            s in "[a-z\u{0300}-\u{0306}]{0,40}",
            columns in 1usize..20,
            start in 0usize..20,
        ) {
            let text: Vec<char> = s.chars().collect();
            prop_assert_eq!(
                wrapped_width(&UNICODE, &text, columns, start),
                start + width(&UNICODE, &text)
            );
        }
    }
}
