//! Lexical similarity between labels.

use rapidfuzz::distance::jaro_winkler;

use crate::normalize::normalize_label;

/// Similarity ratio between two labels in `[0.0, 1.0]`.
///
/// Both labels are normalized first, then compared with Jaro-Winkler over
/// their character sequences. Symmetric; identical normalized labels score
/// exactly 1.0, labels with nothing in common score 0.0. Matching is purely
/// lexical.
pub fn label_similarity(a: &str, b: &str) -> f64 {
    let left = normalize_label(a);
    let right = normalize_label(b);
    jaro_winkler::similarity(left.chars(), right.chars())
}
