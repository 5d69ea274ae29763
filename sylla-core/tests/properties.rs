//! Property tests for pattern hyphenation

use proptest::prelude::*;
use sylla_core::{HyphenationEngine, HyphenationPolicy, PatternTable};

/// Random pattern token over a small alphabet so matches are frequent
fn pattern_token() -> impl Strategy<Value = String> {
    (
        prop::bool::ANY,
        prop::collection::vec((0u8..10, "[abc]"), 1..5),
        0u8..10,
        prop::bool::ANY,
    )
        .prop_map(|(anchor_start, body, tail, anchor_end)| {
            let mut token = String::new();
            if anchor_start {
                token.push('.');
            }
            for (digit, letter) in body {
                if digit > 0 {
                    token.push(char::from(b'0' + digit));
                }
                token.push_str(&letter);
            }
            if tail > 0 {
                token.push(char::from(b'0' + tail));
            }
            if anchor_end {
                token.push('.');
            }
            token
        })
}

fn pattern_table() -> impl Strategy<Value = PatternTable> {
    prop::collection::vec(pattern_token(), 0..20).prop_map(|tokens| {
        PatternTable::from_patterns(tokens.iter().map(String::as_str))
            .expect("generated tokens are well formed")
    })
}

fn policy() -> impl Strategy<Value = HyphenationPolicy> {
    (0usize..4, 0usize..4).prop_map(|(prefix, suffix)| HyphenationPolicy::new(prefix, suffix))
}

proptest! {
    #[test]
    fn concatenation_reproduces_word(
        table in pattern_table(),
        policy in policy(),
        word in "[abcABCé]{0,12}",
    ) {
        let engine = HyphenationEngine::new(&table).with_policy(policy);
        prop_assert_eq!(engine.hyphenate_word(&word).concat(), word);
    }

    #[test]
    fn hyphenation_is_deterministic(
        table in pattern_table(),
        policy in policy(),
        word in "[abc]{0,12}",
    ) {
        let engine = HyphenationEngine::new(&table).with_policy(policy);
        prop_assert_eq!(engine.hyphenate_word(&word), engine.hyphenate_word(&word));
        prop_assert_eq!(engine.compute_breakpoints(&word), engine.compute_breakpoints(&word));
    }

    #[test]
    fn short_words_stay_whole(
        table in pattern_table(),
        policy in policy(),
        word in "[abc]{1,12}",
    ) {
        let engine = HyphenationEngine::new(&table).with_policy(policy);
        if word.chars().count() < policy.min_word_len() {
            prop_assert_eq!(engine.hyphenate_word(&word), vec![word.clone()]);
        }
    }

    #[test]
    fn breakpoints_have_one_flag_per_gap(
        table in pattern_table(),
        word in "[abc]{0,12}",
    ) {
        let engine = HyphenationEngine::new(&table);
        let expected = word.chars().count().saturating_sub(1);
        prop_assert_eq!(engine.compute_breakpoints(&word).len(), expected);
        prop_assert_eq!(engine.gap_weights(&word).len(), expected);
    }

    #[test]
    fn breaks_only_at_odd_weights(
        table in pattern_table(),
        word in "[abc]{2,12}",
    ) {
        let engine = HyphenationEngine::new(&table).with_policy(HyphenationPolicy::unrestricted());
        let weights = engine.gap_weights(&word);
        let breaks = engine.compute_breakpoints(&word);
        for (weight, legal) in weights.iter().zip(breaks) {
            prop_assert_eq!(weight % 2 == 1, legal);
        }
    }

    #[test]
    fn syllables_are_never_empty(
        table in pattern_table(),
        policy in policy(),
        word in "[abc]{1,12}",
    ) {
        let engine = HyphenationEngine::new(&table).with_policy(policy);
        prop_assert!(engine.hyphenate_word(&word).iter().all(|piece| !piece.is_empty()));
    }
}
