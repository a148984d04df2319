//! Thesaurus expansion properties.

use guidefind::AliasTable;
use proptest::prelude::*;

use super::strategies::word_strategy;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_expansion_contains_term(term in word_strategy()) {
        prop_assert!(AliasTable::builtin().expand(&term).contains(&term));
    }

    /// Exact-key aliases are always part of the expansion.
    #[test]
    fn prop_declared_aliases_included(key in word_strategy(), alias in word_strategy()) {
        prop_assume!(key != alias);
        let table = AliasTable::from_pairs(&[(key.as_str(), &[alias.as_str()])]);
        let expanded = table.expand(&key);
        prop_assert!(expanded.contains(&alias));
        prop_assert!(expanded.contains(&key));
    }

    /// An empty table never adds anything.
    #[test]
    fn prop_empty_table_is_identity(term in word_strategy()) {
        let expanded = AliasTable::default().expand(&term);
        prop_assert_eq!(expanded.len(), 1);
    }
}
