//! Cardholder name validation.
//!
//! # Policy
//!
//! Characters are restricted to Unicode letters (the `Alphabetic`
//! property, which covers accented forms), spaces, apostrophes, and
//! hyphens. The letter classification is script-agnostic by intent; the
//! accepted name space is whatever `char::is_alphabetic` admits, kept as
//! an explicit policy rather than a per-locale rule.

use std::fmt;

use crate::normalize::{collapse_spaces, normalize_basic};

/// Shortest accepted name, in characters.
pub const MIN_NAME_CHARS: usize = 2;

/// Longest accepted name, in characters.
pub const MAX_NAME_CHARS: usize = 60;

/// Errors that can occur during cardholder name validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// The normalized name is outside the 2-60 character range.
    InvalidLength {
        /// Actual length in characters.
        length: usize,
    },
    /// The name contains a character outside the allowed set.
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { length } => {
                write!(
                    f,
                    "name must be {}-{} characters, got {}",
                    MIN_NAME_CHARS, MAX_NAME_CHARS, length
                )
            }
            Self::InvalidCharacter { character } => {
                write!(
                    f,
                    "name may only contain letters, spaces, apostrophes, or hyphens (found '{}')",
                    character.escape_default()
                )
            }
        }
    }
}

impl std::error::Error for NameError {}

#[inline]
fn is_allowed(c: char) -> bool {
    c.is_alphabetic() || c == ' ' || c == '\'' || c == '-'
}

/// Validates and normalizes a cardholder name.
///
/// Normalization is NFKC + trim with interior whitespace runs collapsed to
/// a single space; the collapsed form is what the length and character
/// checks see, and what is returned on success.
///
/// # Example
///
/// ```
/// use payform_validator::name::{validate_name_on_card, NameError};
///
/// assert_eq!(
///     validate_name_on_card("  José   O'Brien-Smith  ").unwrap(),
///     "José O'Brien-Smith"
/// );
///
/// assert!(matches!(
///     validate_name_on_card("John123"),
///     Err(NameError::InvalidCharacter { character: '1' })
/// ));
/// ```
pub fn validate_name_on_card(input: &str) -> Result<String, NameError> {
    let name = collapse_spaces(&normalize_basic(input));

    let length = name.chars().count();
    if !(MIN_NAME_CHARS..=MAX_NAME_CHARS).contains(&length) {
        return Err(NameError::InvalidLength { length });
    }

    if let Some(character) = name.chars().find(|&c| !is_allowed(c)) {
        return Err(NameError::InvalidCharacter { character });
    }

    Ok(name)
}

/// Quick boolean check for a cardholder name string.
#[inline]
pub fn is_valid_name_on_card(input: &str) -> bool {
    validate_name_on_card(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accented_name_with_collapsed_spaces() {
        assert_eq!(
            validate_name_on_card("  José   O'Brien-Smith  ").unwrap(),
            "José O'Brien-Smith"
        );
    }

    #[test]
    fn test_plain_names() {
        assert_eq!(validate_name_on_card("Ana Maria").unwrap(), "Ana Maria");
        assert_eq!(validate_name_on_card("Li").unwrap(), "Li");
    }

    #[test]
    fn test_combining_accent_composes() {
        // 'e' + combining acute normalizes to a single letter
        assert_eq!(validate_name_on_card("Jose\u{301}").unwrap(), "Jos\u{e9}");
    }

    #[test]
    fn test_digits_rejected() {
        assert_eq!(
            validate_name_on_card("John123").unwrap_err(),
            NameError::InvalidCharacter { character: '1' }
        );
    }

    #[test]
    fn test_punctuation_rejected() {
        assert_eq!(
            validate_name_on_card("Ana; Maria").unwrap_err(),
            NameError::InvalidCharacter { character: ';' }
        );
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            validate_name_on_card("A").unwrap_err(),
            NameError::InvalidLength { length: 1 }
        );
        assert_eq!(
            validate_name_on_card("").unwrap_err(),
            NameError::InvalidLength { length: 0 }
        );
        // Whitespace-only collapses to empty
        assert_eq!(
            validate_name_on_card("    ").unwrap_err(),
            NameError::InvalidLength { length: 0 }
        );
    }

    #[test]
    fn test_too_long() {
        let long = "a".repeat(61);
        assert_eq!(
            validate_name_on_card(&long).unwrap_err(),
            NameError::InvalidLength { length: 61 }
        );

        let edge = "a".repeat(60);
        assert!(validate_name_on_card(&edge).is_ok());
    }

    #[test]
    fn test_length_checked_after_collapse() {
        // 2 letters separated by many spaces collapses to 3 chars
        assert_eq!(validate_name_on_card("A      B").unwrap(), "A B");
    }

    #[test]
    fn test_length_reported_before_charset() {
        assert_eq!(
            validate_name_on_card("1").unwrap_err(),
            NameError::InvalidLength { length: 1 }
        );
    }

    #[test]
    fn test_non_latin_letters_allowed() {
        assert!(validate_name_on_card("Müller").is_ok());
        assert!(validate_name_on_card("Søren Kierkegaard").is_ok());
        assert!(validate_name_on_card("李小龍").is_ok());
    }

    #[test]
    fn test_is_valid_name_on_card() {
        assert!(is_valid_name_on_card("Ana Maria"));
        assert!(!is_valid_name_on_card("Ana_Maria"));
    }
}
