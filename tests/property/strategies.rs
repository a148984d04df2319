//! Shared proptest strategies.

use guidefind::GuideEntry;
use proptest::prelude::*;

/// Generate random word-like strings.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]{2,8}").unwrap()
}

/// Words joined by the separators the tokenizer splits on.
pub fn text_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(word_strategy(), 1..6),
        prop::collection::vec(prop::sample::select(vec![" ", "-", "_", ".", "  "]), 6),
    )
        .prop_map(|(words, seps)| {
            let mut text = String::new();
            for (i, word) in words.iter().enumerate() {
                if i > 0 {
                    text.push_str(seps[i % seps.len()]);
                }
                text.push_str(word);
            }
            text
        })
}

/// Mixed-case text with a few accented letters.
pub fn display_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-zéÉüÜ0-9]{2,8}( [A-Za-zéÉüÜ0-9]{2,8}){0,3}").unwrap()
}

pub fn entry_strategy() -> impl Strategy<Value = GuideEntry> {
    (
        word_strategy(),
        display_strategy(),
        text_strategy(),
        word_strategy(),
        prop::option::of(word_strategy()),
        prop::collection::vec(word_strategy(), 0..3),
        0u64..200_000,
    )
        .prop_map(
            |(name, display_name, description, category, language, topics, stars)| GuideEntry {
                slug: name.clone(),
                name,
                display_name,
                description,
                category,
                language,
                topics,
                stars,
            },
        )
}

pub fn catalog_strategy() -> impl Strategy<Value = Vec<GuideEntry>> {
    prop::collection::vec(entry_strategy(), 1..12)
}

/// Queries: random words, or a slice of a word that is likely to hit.
pub fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        word_strategy(),
        prop::string::string_regex("[a-z]{1,3}").unwrap(),
        (word_strategy(), word_strategy()).prop_map(|(a, b)| format!("{a} {b}")),
    ]
}
