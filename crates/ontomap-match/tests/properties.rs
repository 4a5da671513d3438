//! Algebraic properties of normalization and scoring.

use ontomap_match::{label_similarity, normalize_label};
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalization_is_idempotent(raw in ".*") {
        let once = normalize_label(&raw);
        let twice = normalize_label(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalized_output_is_canonical(raw in ".*") {
        let normalized = normalize_label(&raw);
        prop_assert!(!normalized.starts_with(' '));
        prop_assert!(!normalized.ends_with(' '));
        prop_assert!(!normalized.contains("  "));
        prop_assert!(normalized.chars().all(|ch| ch == ' ' || ch.is_alphanumeric()));
    }

    #[test]
    fn similarity_is_symmetric(a in ".*", b in ".*") {
        prop_assert_eq!(label_similarity(&a, &b), label_similarity(&b, &a));
    }

    #[test]
    fn similarity_is_bounded(a in ".*", b in ".*") {
        let score = label_similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score), "score {} out of bounds", score);
    }

    #[test]
    fn self_similarity_is_one(raw in ".+") {
        prop_assert_eq!(label_similarity(&raw, &raw), 1.0);
    }
}
