//! Label canonicalization for similarity comparison.

/// Characters that act as token boundaries rather than content.
const SEPARATORS: [char; 5] = ['_', '-', '.', '/', '\\'];

/// Canonicalize a raw label for comparison.
///
/// Lowercases, turns separator characters into spaces, strips every other
/// character that is neither alphanumeric nor whitespace, and collapses
/// whitespace runs. Idempotent. Normalized forms are only ever fed to the
/// scorer; display and reporting always use the original label.
pub fn normalize_label(raw: &str) -> String {
    raw.to_lowercase()
        .replace(SEPARATORS, " ")
        .chars()
        .filter(|ch| ch.is_alphanumeric() || ch.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize_label("  Wire Fraud  "), "wire fraud");
    }

    #[test]
    fn separators_become_token_boundaries() {
        assert_eq!(normalize_label("wire-fraud "), "wire fraud");
        assert_eq!(normalize_label("wire_fraud/scheme"), "wire fraud scheme");
    }

    #[test]
    fn other_punctuation_is_stripped() {
        assert_eq!(normalize_label("Fraud (financial)"), "fraud financial");
        assert_eq!(normalize_label("Q&A"), "qa");
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(normalize_label("wire \t  fraud\n"), "wire fraud");
    }

    #[test]
    fn empty_and_punctuation_only_inputs_normalize_to_empty() {
        assert_eq!(normalize_label(""), "");
        assert_eq!(normalize_label("!!!"), "");
    }

    #[test]
    fn unicode_case_is_lowered() {
        assert_eq!(normalize_label("Betrugsfälle"), "betrugsfälle");
    }
}
