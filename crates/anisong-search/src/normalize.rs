//! Canonical text form used for every name comparison.
//!
//! ```text
//! "  Kimi no Shiranai  Monogatari! " -> "kimi no shiranai monogatari"
//! "Pokémon: Mezase"                  -> "pokemon mezase"
//! "ＣＯＮＮＥＣＴ"                    -> "connect"
//! ```
//!
//! Compatibility decomposition folds width variants and splits accents off
//! their base letters, lowercasing folds case, combining marks are dropped,
//! punctuation and symbols vanish without leaving a gap, and any whitespace
//! run becomes a single space. The result has no leading or trailing space.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonical form of `text`. Total, pure and idempotent.
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    // Decompose again after lowercasing: some lowercase mappings emit
    // precomposed or compatibility characters.
    for c in text.nfkd().flat_map(char::to_lowercase).nfkd() {
        if is_combining_mark(c) {
            continue;
        }
        if c.is_whitespace() {
            pending_space = true;
        } else if c.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        }
    }
    out
}

/// `normalize(query) == normalize(candidate)`.
#[must_use]
pub fn exact_match(query: &str, candidate: &str) -> bool {
    normalize(query) == normalize(candidate)
}

/// `normalize(candidate)` contains `normalize(query)`.
#[must_use]
pub fn partial_match(query: &str, candidate: &str) -> bool {
    normalize(candidate).contains(&normalize(query))
}

/// A query normalized once and compared against many candidates.
///
/// Used on the search path, where a query with an empty canonical form
/// selects nothing instead of every candidate.
#[derive(Debug, Clone)]
pub struct TextMatcher {
    needle: String,
    partial: bool,
}

impl TextMatcher {
    #[must_use]
    pub fn new(query: &str, partial: bool) -> Self {
        Self {
            needle: normalize(query),
            partial,
        }
    }

    /// A query with an empty canonical form matches nothing.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        if self.needle.is_empty() {
            return false;
        }
        let candidate = normalize(candidate);
        if self.partial {
            candidate.contains(&self.needle)
        } else {
            candidate == self.needle
        }
    }
}
