#![forbid(unsafe_code)]

//! ANSI CSI escape-sequence recognition.
//!
//! A complete sequence is `ESC [`, any run of `[0-9;]`, then one ASCII
//! letter. Sequences are matched greedily left to right and never overlap.
//! An `ESC` that does not open a complete sequence is an ordinary code point.
//!
//! # Example
//! ```
//! use glyph_width::escape::strip_escapes;
//!
//! let colored: Vec<char> = "\x1b[31mA\x1b[0m".chars().collect();
//! assert_eq!(strip_escapes(&colored), vec!['A']);
//! ```

use std::borrow::Cow;

/// The escape control code that opens every sequence.
pub const ESC: char = '\x1b';

/// Introducer following [`ESC`] in a control sequence.
const CSI: char = '[';

#[inline]
const fn is_param(ch: char) -> bool {
    matches!(ch, '0'..='9' | ';')
}

#[inline]
const fn is_terminator(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// Length of the complete escape sequence starting at `at`, if any.
///
/// Returns `None` when `at` is out of bounds, when it does not hold
/// [`ESC`], or when the sequence is truncated or interrupted before its
/// terminating letter.
#[must_use]
pub fn escape_len(s: &[char], at: usize) -> Option<usize> {
    if s.get(at) != Some(&ESC) || s.get(at + 1) != Some(&CSI) {
        return None;
    }
    for (offset, &ch) in s[at + 2..].iter().enumerate() {
        if is_param(ch) {
            continue;
        }
        return is_terminator(ch).then_some(offset + 3);
    }
    None
}

/// Start of the complete escape sequence ending just before `end`, if any.
///
/// This is the reverse of [`escape_len`]: when it returns `Some(start)`,
/// `escape_len(s, start) == Some(end - start)`.
#[must_use]
pub fn escape_start_before(s: &[char], end: usize) -> Option<usize> {
    let head = s.get(..end)?;
    let (&last, rest) = head.split_last()?;
    if !is_terminator(last) {
        return None;
    }
    let params = rest.iter().rev().take_while(|&&ch| is_param(ch)).count();
    let csi = rest.len().checked_sub(params + 1)?;
    if rest[csi] != CSI || csi == 0 || rest[csi - 1] != ESC {
        return None;
    }
    Some(csi - 1)
}

/// Whether `s` contains at least one complete escape sequence.
#[must_use]
pub fn has_escapes(s: &[char]) -> bool {
    s.iter()
        .enumerate()
        .any(|(i, &ch)| ch == ESC && escape_len(s, i).is_some())
}

/// Which positions of `s` belong to a complete escape sequence.
///
/// Sequences are removed left to right as soon as their terminating letter
/// is seen, and removal repeats until none remains: a sequence spliced into
/// the middle of another (`ESC ESC[0m [1m`) hides both. Every hidden span is
/// contiguous in `s`. This is the single membership rule behind
/// [`strip_escapes`] and the extractors.
#[must_use]
pub fn escape_mask(s: &[char]) -> Vec<bool> {
    let mut hidden = vec![false; s.len()];
    let mut kept: Vec<char> = Vec::with_capacity(s.len());
    let mut origin: Vec<usize> = Vec::with_capacity(s.len());
    for (i, &ch) in s.iter().enumerate() {
        kept.push(ch);
        origin.push(i);
        if is_terminator(ch)
            && let Some(start) = escape_start_before(&kept, kept.len())
        {
            hidden[origin[start]..=i].fill(true);
            kept.truncate(start);
            origin.truncate(start);
        }
    }
    hidden
}

/// Copy `s` with every complete escape sequence removed.
///
/// Membership follows [`escape_mask`], so stripping is idempotent even for
/// spliced sequences.
#[must_use]
pub fn strip_escapes(s: &[char]) -> Vec<char> {
    s.iter()
        .zip(escape_mask(s))
        .filter_map(|(&ch, hidden)| (!hidden).then_some(ch))
        .collect()
}

/// The code points of `s` that occupy display columns, borrowing when `s`
/// holds no [`ESC`] at all.
#[must_use]
pub fn visible(s: &[char]) -> Cow<'_, [char]> {
    if s.contains(&ESC) {
        Cow::Owned(strip_escapes(s))
    } else {
        Cow::Borrowed(s)
    }
}
