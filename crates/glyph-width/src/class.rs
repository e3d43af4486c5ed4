#![forbid(unsafe_code)]

//! Per-code-point width classification.
//!
//! Every code point falls into one of three classes: zero-width (combining
//! marks, control and format characters), narrow, or wide. The width table
//! comes from `unicode-width`; the zero-width category is a Unicode general
//! category test. Callers that need a different table implement
//! [`GlyphClassifier`].

use unicode_general_category::{GeneralCategory, get_general_category};
use unicode_width::UnicodeWidthChar;

/// Code points below this value are always one column wide.
const ASCII_FAST_PATH: u32 = 127;

/// Display width class of a single code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphClass {
    /// Occupies no column and never consumes a glyph budget.
    Zero,
    /// One terminal column.
    Narrow,
    /// Two terminal columns (East-Asian wide and fullwidth).
    Wide,
}

impl GlyphClass {
    /// Number of terminal columns this class occupies.
    #[inline]
    #[must_use]
    pub const fn columns(self) -> usize {
        match self {
            Self::Zero => 0,
            Self::Narrow => 1,
            Self::Wide => 2,
        }
    }

    /// Whether a code point of this class counts against a glyph budget.
    #[inline]
    #[must_use]
    pub const fn is_countable(self) -> bool {
        !matches!(self, Self::Zero)
    }

    fn from_columns(columns: usize) -> Self {
        match columns {
            0 => Self::Zero,
            1 => Self::Narrow,
            _ => Self::Wide,
        }
    }
}

/// Maps code points to [`GlyphClass`].
///
/// Implementations must be pure: the same code point always yields the same
/// class.
pub trait GlyphClassifier {
    /// Classify a code point at or above 127.
    ///
    /// Lower code points never reach this method; see [`class_of`].
    fn classify(&self, ch: char) -> GlyphClass;
}

impl<C: GlyphClassifier + ?Sized> GlyphClassifier for &C {
    #[inline]
    fn classify(&self, ch: char) -> GlyphClass {
        (**self).classify(ch)
    }
}

/// Classify `ch`, taking the ASCII fast path before consulting `classifier`.
///
/// Code points below 127 are narrow, including ASCII control codes.
#[inline]
pub fn class_of<C: GlyphClassifier + ?Sized>(classifier: &C, ch: char) -> GlyphClass {
    if (ch as u32) < ASCII_FAST_PATH {
        GlyphClass::Narrow
    } else {
        classifier.classify(ch)
    }
}

/// Whether `ch` is a non-spacing mark, enclosing mark, control, or format
/// character.
#[must_use]
pub fn is_zero_width_category(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::NonspacingMark
            | GeneralCategory::EnclosingMark
            | GeneralCategory::Control
            | GeneralCategory::Format
    )
}

/// Classifier backed by the Unicode East-Asian width tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnicodeClassifier {
    ambiguous_wide: bool,
}

impl UnicodeClassifier {
    /// Classifier that treats ambiguous-width code points as narrow.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ambiguous_wide: false,
        }
    }

    /// Classifier that treats ambiguous-width code points as wide, as CJK
    /// locales render them.
    #[must_use]
    pub const fn cjk() -> Self {
        Self {
            ambiguous_wide: true,
        }
    }

    /// Whether ambiguous-width code points are classified as wide.
    #[must_use]
    pub const fn ambiguous_wide(&self) -> bool {
        self.ambiguous_wide
    }
}

impl GlyphClassifier for UnicodeClassifier {
    fn classify(&self, ch: char) -> GlyphClass {
        if is_zero_width_category(ch) {
            return GlyphClass::Zero;
        }
        let width = if self.ambiguous_wide {
            ch.width_cjk()
        } else {
            ch.width()
        };
        width.map_or(GlyphClass::Zero, GlyphClass::from_columns)
    }
}
