// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case folding, diacritic stripping and tokenization.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Minimum token length kept by [`tokenize`].
pub const MIN_TOKEN_LEN: usize = 2;

/// Word separators: whitespace, hyphen, underscore and period.
#[inline]
pub fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '_' | '.')
}

/// Does a word start at `pos`? True at position 0 and right after a separator.
#[inline]
pub fn is_boundary_at(chars: &[char], pos: usize) -> bool {
    pos == 0 || chars.get(pos - 1).is_some_and(|&c| is_word_separator(c))
}

/// Fold a single character: strip diacritics, then lowercase.
///
/// Always yields exactly one character, so offsets survive folding:
/// - 'É' → 'e'
/// - 'ṣ' → 's'
/// - 'İ' → 'i' (multi-char lowercase mappings keep their first char)
#[cfg(feature = "unicode-normalization")]
#[inline]
pub fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let base = std::iter::once(c).nfd().next().unwrap_or(c);
    base.to_lowercase().next().unwrap_or(base)
}

/// Lowercase-only folding when diacritic stripping is compiled out.
#[cfg(not(feature = "unicode-normalization"))]
#[inline]
pub fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    c.to_lowercase().next().unwrap_or(c)
}

/// Fold a whole string into a char vector, one output char per input char.
pub fn fold(value: &str) -> Vec<char> {
    value.chars().map(fold_char).collect()
}

/// Fold into a `String` (same char count as the input).
pub fn fold_string(value: &str) -> String {
    value.chars().map(fold_char).collect()
}

/// Normalize a query: fold, trim and collapse internal whitespace.
///
/// - "  K8s  " → "k8s"
/// - "Café   Setup" → "cafe setup"
pub fn normalize(value: &str) -> String {
    fold_string(value)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Char ranges `[start, end)` of every word in `chars`, in order.
pub fn word_ranges(chars: &[char]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut start = None;
    for (i, &c) in chars.iter().enumerate() {
        match (is_word_separator(c), start) {
            (true, Some(s)) => {
                ranges.push((s, i));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        ranges.push((s, chars.len()));
    }
    ranges
}

/// Split folded text into tokens, dropping tokens shorter than [`MIN_TOKEN_LEN`].
pub fn tokenize(value: &str) -> Vec<String> {
    let chars = fold(value);
    word_ranges(&chars)
        .into_iter()
        .filter(|(s, e)| e - s >= MIN_TOKEN_LEN)
        .map(|(s, e)| chars[s..e].iter().collect())
        .collect()
}

/// Is `needle` a (not necessarily contiguous) subsequence of `haystack`?
pub fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut hay = haystack.chars();
    needle.chars().all(|n| hay.any(|h| h == n))
}
