#![forbid(unsafe_code)]

//! Configured scanner bundling a classifier with a [`WidthPolicy`].

use crate::class::{GlyphClassifier, UnicodeClassifier};
use crate::escape;
use crate::extract::{self, SuffixEscapes};
use crate::measure::{self, CursorPosition};
use crate::policy::WidthPolicy;

/// Escape-aware width measurement and extraction with one fixed
/// configuration.
///
/// # Example
/// ```
/// use glyph_width::{Glyphs, SuffixEscapes, WidthPolicy};
///
/// let glyphs = Glyphs::from_policy(
///     WidthPolicy::new().with_suffix_escapes(SuffixEscapes::Skip),
/// );
/// let line: Vec<char> = "\x1b[32mok\x1b[0m".chars().collect();
/// assert_eq!(glyphs.width(&line), 2);
/// assert_eq!(glyphs.suffix(&line, 1), &line[6..]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Glyphs<C = UnicodeClassifier> {
    classifier: C,
    suffix_escapes: SuffixEscapes,
}

impl Glyphs {
    /// Scanner using the Unicode tables with the default [`WidthPolicy`].
    #[must_use]
    pub const fn new() -> Self {
        Self::from_policy(WidthPolicy::new())
    }

    /// Scanner using the Unicode tables as `policy` configures them.
    #[must_use]
    pub const fn from_policy(policy: WidthPolicy) -> Self {
        let classifier = if policy.ambiguous_wide {
            UnicodeClassifier::cjk()
        } else {
            UnicodeClassifier::new()
        };
        Self {
            classifier,
            suffix_escapes: policy.suffix_escapes,
        }
    }
}

impl<C: GlyphClassifier> Glyphs<C> {
    /// Scanner using a caller-supplied classifier.
    #[must_use]
    pub const fn with_classifier(classifier: C) -> Self {
        Self {
            classifier,
            suffix_escapes: SuffixEscapes::Literal,
        }
    }

    /// Set how [`Glyphs::suffix`] treats escape sequences.
    #[must_use]
    pub fn suffix_escapes(mut self, escapes: SuffixEscapes) -> Self {
        self.suffix_escapes = escapes;
        self
    }

    /// The classifier in use.
    #[must_use]
    pub const fn classifier(&self) -> &C {
        &self.classifier
    }

    /// `s` with every complete escape sequence removed.
    #[must_use]
    pub fn strip(&self, s: &[char]) -> Vec<char> {
        escape::strip_escapes(s)
    }

    /// Display width of `s`; escape sequences occupy no columns.
    #[must_use]
    pub fn width(&self, s: &[char]) -> usize {
        measure::width(&self.classifier, s)
    }

    /// Final column after laying `s` out from `start` on a terminal
    /// `columns` wide.
    #[must_use]
    pub fn wrapped_width(&self, s: &[char], columns: usize, start: usize) -> usize {
        measure::wrapped_width(&self.classifier, s, columns, start)
    }

    /// Row and column after laying `s` out from `start` on a terminal
    /// `columns` wide.
    #[must_use]
    pub fn cursor_position(&self, s: &[char], columns: usize, start: usize) -> CursorPosition {
        measure::cursor_position(&self.classifier, s, columns, start)
    }

    /// Leading slice of `s` holding `num` countable glyphs.
    #[must_use]
    pub fn prefix<'a>(&self, s: &'a [char], num: usize) -> &'a [char] {
        extract::prefix(&self.classifier, s, num)
    }

    /// Trailing slice of `s` holding `num` countable glyphs.
    #[must_use]
    pub fn suffix<'a>(&self, s: &'a [char], num: usize) -> &'a [char] {
        extract::suffix(&self.classifier, s, num, self.suffix_escapes)
    }
}
