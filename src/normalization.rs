/// Normalizes a research interest by stripping surrounding whitespace
/// and decomposing it into Unicode Normalization Form D, so that the
/// duplicate check in the profile form compares like with like.
///
/// ```
/// use portfolio_backend::normalization::normalize_interest;
/// assert_eq!(normalize_interest(" machine learning "), "machine learning");
/// ```
pub fn normalize_interest(raw: impl AsRef<str>) -> String {
    use unicode_normalization::UnicodeNormalization;

    raw.as_ref().trim().nfd().to_string()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use unicode_normalization::is_nfd;

    use super::normalize_interest;

    #[test]
    fn blank_input_normalizes_to_empty() {
        assert_eq!(normalize_interest(""), "");
        assert_eq!(normalize_interest("   \t "), "");
    }

    #[test]
    fn composed_accents_are_decomposed() {
        // U+00E9 vs U+0065 U+0301
        assert_eq!(normalize_interest("r\u{e9}seaux"), "re\u{301}seaux");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(5000))]

        #[test]
        fn normalized_interests_are_trimmed_decomposed_and_stable(
            interest in "\\S(.*\\S)?",
            padding_before in "\\s*",
            padding_after in "\\s*",
        ) {
            let raw = format!("{}{}{}", padding_before, interest, padding_after);
            let normalized = normalize_interest(&raw);

            prop_assert!(is_nfd(&normalized), "{:?} came back incompletely decomposed", normalized);

            prop_assert!(
                normalized == normalized.trim(),
                "{:?} came back with surrounding whitespace",
                normalized
            );

            // duplicate detection relies on normalization being a fixed point
            prop_assert_eq!(normalize_interest(&normalized), normalized);
        }
    }
}
