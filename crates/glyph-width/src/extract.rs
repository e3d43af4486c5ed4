#![forbid(unsafe_code)]

//! Glyph-budget boundary extraction.
//!
//! [`prefix`] and [`suffix`] return sub-slices of the original sequence
//! holding a given number of countable glyphs. A glyph is countable when it
//! is not zero-width and not part of an escape sequence. Results always borrow
//! from the input, so escape sequences inside the span survive untouched.
//!
//! # Example
//! ```
//! use glyph_width::UnicodeClassifier;
//! use glyph_width::extract::{SuffixEscapes, prefix, suffix};
//!
//! let classifier = UnicodeClassifier::new();
//! let line: Vec<char> = "\x1b[1mcafe\u{301}\x1b[0m!".chars().collect();
//!
//! // The accent stays with its base letter, and the trailing reset is kept.
//! let head: String = prefix(&classifier, &line, 4).iter().collect();
//! assert_eq!(head, "\x1b[1mcafe\u{301}\x1b[0m");
//!
//! let tail: String = suffix(&classifier, &line, 2, SuffixEscapes::Skip).iter().collect();
//! assert_eq!(tail, "e\u{301}\x1b[0m!");
//! ```

use crate::class::{GlyphClass, GlyphClassifier, class_of};
use crate::escape::{ESC, escape_mask};

/// How [`suffix`] treats escape sequences while scanning backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum SuffixEscapes {
    /// Escape code points are classified like any other code point.
    #[default]
    Literal,
    /// Complete escape sequences are stepped over whole without consuming
    /// budget, and sequences directly before the result are included.
    Skip,
}

impl SuffixEscapes {
    pub(crate) fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "literal" | "legacy" => Some(Self::Literal),
            "skip" | "ansi" => Some(Self::Skip),
            _ => None,
        }
    }

    /// Name accepted by `GLYPH_WIDTH_SUFFIX_ESCAPES` for this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Literal => "literal",
            Self::Skip => "skip",
        }
    }
}

/// Escape membership of each position, or `None` when `s` holds no [`ESC`].
struct Hidden(Option<Vec<bool>>);

impl Hidden {
    fn of(s: &[char]) -> Self {
        Self(s.contains(&ESC).then(|| escape_mask(s)))
    }

    #[inline]
    fn at(&self, i: usize) -> bool {
        self.0.as_ref().is_some_and(|mask| mask[i])
    }
}

/// Longest leading slice of `s` holding at most `num` countable glyphs.
///
/// Escape sequences are skipped whole. Once the budget is spent, the run of
/// zero-width code points and escape sequences right after the last glyph is
/// included too, so a base letter never loses its combining marks.
#[must_use]
pub fn prefix<'a, C: GlyphClassifier + ?Sized>(
    classifier: &C,
    s: &'a [char],
    num: usize,
) -> &'a [char] {
    let hidden = Hidden::of(s);
    let mut pos = 0;
    let mut counted = 0;
    while counted < num && pos < s.len() {
        if !hidden.at(pos) && class_of(classifier, s[pos]).is_countable() {
            counted += 1;
        }
        pos += 1;
    }

    while pos < s.len()
        && (hidden.at(pos) || class_of(classifier, s[pos]) == GlyphClass::Zero)
    {
        pos += 1;
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(num, counted, len = pos, "prefix extracted");

    &s[..pos]
}

/// Shortest trailing slice of `s` holding `num` countable glyphs, or all of
/// `s` if it has fewer.
///
/// Zero-width code points met while scanning backward are included without
/// consuming budget. See [`SuffixEscapes`] for the treatment of escapes.
#[must_use]
pub fn suffix<'a, C: GlyphClassifier + ?Sized>(
    classifier: &C,
    s: &'a [char],
    num: usize,
    escapes: SuffixEscapes,
) -> &'a [char] {
    let hidden = match escapes {
        SuffixEscapes::Literal => Hidden(None),
        SuffixEscapes::Skip => Hidden::of(s),
    };
    let mut pos = s.len();
    let mut counted = 0;
    while counted < num && pos > 0 {
        pos -= 1;
        if !hidden.at(pos) && class_of(classifier, s[pos]).is_countable() {
            counted += 1;
        }
    }

    while pos > 0 && hidden.at(pos - 1) {
        pos -= 1;
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(num, counted, len = s.len() - pos, ?escapes, "suffix extracted");

    &s[pos..]
}
