// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Wrap matched spans of a field in caller-chosen markers.
//!
//! Spans carry char offsets; rendering maps them to byte offsets once per
//! text. Out-of-range spans are dropped rather than panicking on a bad slice.

use crate::config::SearchConfig;
use crate::types::MatchSpan;

/// Character-to-byte offset table for one text.
struct CharOffsets {
    /// `char_to_byte[i]` is where char `i` starts; the last slot is `text.len()`.
    char_to_byte: Vec<usize>,
}

impl CharOffsets {
    fn new(text: &str) -> Self {
        let mut char_to_byte: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        char_to_byte.push(text.len());
        Self { char_to_byte }
    }

    fn char_count(&self) -> usize {
        self.char_to_byte.len() - 1
    }

    fn byte(&self, char_offset: usize) -> usize {
        self.char_to_byte[char_offset]
    }
}

/// Sort spans and merge any that overlap or touch. Ranges are `[start, end)`.
pub fn merge_spans(spans: &[MatchSpan]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = spans
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| (s.start, s.end))
        .collect();
    ranges.sort_unstable();

    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        match merged.last_mut() {
            Some((_, last_end)) if start <= *last_end => *last_end = (*last_end).max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighter {
    open: String,
    close: String,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new("<mark>", "</mark>")
    }
}

impl Highlighter {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.highlight_open.clone(), config.highlight_close.clone())
    }

    /// `text` with every (merged) span wrapped in the markers.
    pub fn render(&self, text: &str, spans: &[MatchSpan]) -> String {
        let offsets = CharOffsets::new(text);
        let len = offsets.char_count();
        let mut out = String::with_capacity(text.len() + spans.len() * (self.open.len() + self.close.len()));
        let mut cursor = 0;

        for (start, end) in merge_spans(spans) {
            if end > len {
                tracing::debug!(start, end, len, "dropping out-of-range highlight span");
                continue;
            }
            let (start, end) = (offsets.byte(start), offsets.byte(end));
            out.push_str(&text[cursor..start]);
            out.push_str(&self.open);
            out.push_str(&text[start..end]);
            out.push_str(&self.close);
            cursor = end;
        }
        out.push_str(&text[cursor..]);
        out
    }
}
