#![forbid(unsafe_code)]

//! Terminal display-width primitives for line editors.
//!
//! Text under an editor cursor is measured in three units at once: code
//! points, terminal columns, and positions in the original buffer. This
//! crate reconciles them:
//! - [`display_width`] - columns occupied by a line, ignoring ANSI escapes
//! - [`wrapped_width`] - final column on a wrapping terminal, never letting a
//!   wide glyph straddle two rows
//! - [`prefix`] / [`suffix`] - slices of the original text holding a glyph
//!   budget, with escapes and combining marks kept intact
//! - [`strip_escapes`] - the text with every CSI sequence removed
//! - [`Glyphs`] - the same operations with an injected [`GlyphClassifier`]
//!   or a non-default [`WidthPolicy`]
//!
//! # Example
//! ```
//! use glyph_width::{display_width, prefix, wrapped_width};
//!
//! let line: Vec<char> = "\x1b[1m\u{4F60}\u{597D}\x1b[0m, world".chars().collect();
//! assert_eq!(display_width(&line), 11);
//!
//! // Two glyphs keep their surrounding style codes.
//! let head: String = prefix(&line, 2).iter().collect();
//! assert_eq!(head, "\x1b[1m\u{4F60}\u{597D}\x1b[0m");
//!
//! // On a 5-column terminal the second wide glyph moves to the next row.
//! let cjk: Vec<char> = "ab\u{4F60}\u{597D}".chars().collect();
//! assert_eq!(wrapped_width(&cjk, 5, 0), 7);
//! ```

pub mod class;
pub mod escape;
pub mod extract;
pub mod glyphs;
pub mod measure;
pub mod policy;

pub use class::{GlyphClass, GlyphClassifier, UnicodeClassifier, is_zero_width_category};
pub use escape::{ESC, escape_mask, has_escapes, strip_escapes};
pub use extract::SuffixEscapes;
pub use glyphs::Glyphs;
pub use measure::CursorPosition;
pub use policy::WidthPolicy;

/// Display width of `s` in terminal columns, ignoring escape sequences.
#[must_use]
pub fn display_width(s: &[char]) -> usize {
    Glyphs::new().width(s)
}

/// Final column position after laying `s` out from column `start` on a
/// terminal `columns` wide.
#[must_use]
pub fn wrapped_width(s: &[char], columns: usize, start: usize) -> usize {
    Glyphs::new().wrapped_width(s, columns, start)
}

/// Row and column after laying `s` out from column `start` on a terminal
/// `columns` wide.
#[must_use]
pub fn cursor_position(s: &[char], columns: usize, start: usize) -> CursorPosition {
    Glyphs::new().cursor_position(s, columns, start)
}

/// Longest leading slice of `s` holding `num` countable glyphs, including
/// the escapes and zero-width marks that follow the last one.
#[must_use]
pub fn prefix(s: &[char], num: usize) -> &[char] {
    Glyphs::new().prefix(s, num)
}

/// Shortest trailing slice of `s` holding `num` countable glyphs.
///
/// Escape code points are counted like ordinary code points here; use
/// [`Glyphs::suffix_escapes`] with [`SuffixEscapes::Skip`] to step over them.
#[must_use]
pub fn suffix(s: &[char], num: usize) -> &[char] {
    Glyphs::new().suffix(s, num)
}
