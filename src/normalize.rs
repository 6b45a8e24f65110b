//! Input canonicalization shared by the field validators.
//!
//! Untrusted form input arrives with full-width digits, combining accents,
//! and stray whitespace. Each validator funnels its input through
//! [`normalize_basic`] before any length or pattern check, so visually
//! equivalent representations compare equal.

use unicode_normalization::UnicodeNormalization;

/// Applies Unicode NFKC normalization, then trims leading and trailing
/// whitespace.
///
/// NFKC folds compatibility characters to their canonical forms: full-width
/// digits become ASCII digits, combining accents compose into single code
/// points.
///
/// # Example
///
/// ```
/// use payform_validator::normalize::normalize_basic;
///
/// assert_eq!(normalize_basic("４１１１"), "4111");
/// assert_eq!(normalize_basic("  Jose\u{301}  "), "José");
/// ```
pub fn normalize_basic(input: &str) -> String {
    input.nfkc().collect::<String>().trim().to_string()
}

/// Removes space and hyphen separators.
///
/// Card numbers are commonly entered in `XXXX-XXXX-XXXX-XXXX` or
/// `XXXX XXXX XXXX XXXX` groupings; this strips both before digit checks.
/// Other fields keep their interior spacing.
///
/// # Example
///
/// ```
/// use payform_validator::normalize::strip_separators;
///
/// assert_eq!(strip_separators("4111-1111 1111-1111"), "4111111111111111");
/// ```
pub fn strip_separators(input: &str) -> String {
    input.chars().filter(|c| *c != ' ' && *c != '-').collect()
}

/// Collapses runs of whitespace to a single ASCII space.
///
/// Leading and trailing whitespace is removed as well. Used for the
/// cardholder name, where interior spacing is meaningful but repeated
/// spaces are not.
///
/// # Example
///
/// ```
/// use payform_validator::normalize::collapse_spaces;
///
/// assert_eq!(collapse_spaces("Ana   Maria"), "Ana Maria");
/// ```
pub fn collapse_spaces(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nfkc_folds_fullwidth_digits() {
        assert_eq!(normalize_basic("４１１１１１１１１１１１１１１１"), "4111111111111111");
    }

    #[test]
    fn test_nfkc_composes_combining_accents() {
        // 'e' + combining acute composes to a single code point
        assert_eq!(normalize_basic("Jose\u{301}"), "Jos\u{e9}");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalize_basic("  hello  "), "hello");
        assert_eq!(normalize_basic("\t4111\n"), "4111");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_basic(""), "");
        assert_eq!(normalize_basic("   "), "");
    }

    #[test]
    fn test_strip_separators() {
        assert_eq!(strip_separators("4111-1111-1111-1111"), "4111111111111111");
        assert_eq!(strip_separators("4111 1111 1111 1111"), "4111111111111111");
        assert_eq!(strip_separators("4111-1111 1111-1111"), "4111111111111111");
        assert_eq!(strip_separators("----"), "");
    }

    #[test]
    fn test_strip_separators_keeps_other_characters() {
        assert_eq!(strip_separators("41a1"), "41a1");
    }

    #[test]
    fn test_collapse_spaces() {
        assert_eq!(collapse_spaces("Ana   Maria"), "Ana Maria");
        assert_eq!(collapse_spaces("  Ana  Maria  "), "Ana Maria");
        assert_eq!(collapse_spaces("Ana\t\tMaria"), "Ana Maria");
        assert_eq!(collapse_spaces("one"), "one");
        assert_eq!(collapse_spaces(""), "");
    }
}
