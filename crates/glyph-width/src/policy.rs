#![forbid(unsafe_code)]

//! Width policy (ambiguous-width handling and suffix escape treatment).
//!
//! Decisions are deterministic given environment variables, so a line editor
//! and anything measuring text on its behalf agree on every width.

use crate::extract::SuffixEscapes;

/// Environment variable to treat ambiguous-width code points as wide (`1/0/true/false`).
const ENV_CJK_WIDTH: &str = "GLYPH_WIDTH_CJK";
/// Environment variable selecting suffix escape handling (`skip` or `literal`).
const ENV_SUFFIX_ESCAPES: &str = "GLYPH_WIDTH_SUFFIX_ESCAPES";

/// Width measurement policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WidthPolicy {
    /// Whether East-Asian ambiguous-width code points count as wide.
    pub ambiguous_wide: bool,
    /// How suffix extraction treats escape sequences.
    pub suffix_escapes: SuffixEscapes,
}

impl WidthPolicy {
    /// Default policy: ambiguous code points are narrow and suffix extraction
    /// does not skip escapes.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ambiguous_wide: false,
            suffix_escapes: SuffixEscapes::Literal,
        }
    }

    /// Set whether ambiguous-width code points count as wide.
    #[must_use]
    pub const fn with_ambiguous_wide(mut self, wide: bool) -> Self {
        self.ambiguous_wide = wide;
        self
    }

    /// Set how suffix extraction treats escape sequences.
    #[must_use]
    pub const fn with_suffix_escapes(mut self, escapes: SuffixEscapes) -> Self {
        self.suffix_escapes = escapes;
        self
    }

    /// Detect policy from the process environment.
    #[must_use]
    pub fn detect() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Detect policy using a custom environment lookup (for tests).
    ///
    /// Unset or unrecognised values leave the default in place.
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut policy = Self::new();
        if let Some(wide) = get_env(ENV_CJK_WIDTH).and_then(|value| parse_bool(&value)) {
            policy.ambiguous_wide = wide;
        }
        if let Some(escapes) =
            get_env(ENV_SUFFIX_ESCAPES).and_then(|value| SuffixEscapes::parse(&value))
        {
            policy.suffix_escapes = escapes;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            ambiguous_wide = policy.ambiguous_wide,
            suffix_escapes = policy.suffix_escapes.as_str(),
            "width policy detected"
        );

        policy
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
