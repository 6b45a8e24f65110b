//! Card number validation pipeline.
//!
//! The pipeline runs NFKC normalization, separator stripping, the all-digit
//! check, the length check, and finally the Luhn checksum, reporting the
//! first failing step. Format errors deliberately take priority over the
//! checksum so that malformed input is never blamed on a typo.

use crate::card::{ValidatedCardNumber, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
use crate::error::CardNumberError;
use crate::luhn;
use crate::normalize::{normalize_basic, strip_separators};

/// Validates a card number string.
///
/// The input may contain spaces and hyphens as separators; full-width
/// digits are folded to ASCII by NFKC normalization before any check.
///
/// # Example
///
/// ```
/// use payform_validator::validate_card_number;
///
/// let card = validate_card_number("4111-1111-1111-1111").unwrap();
/// assert_eq!(card.digits(), "4111111111111111");
/// assert_eq!(card.last_four(), "1111");
///
/// assert!(validate_card_number("4111111111111112").is_err());
/// ```
pub fn validate_card_number(input: &str) -> Result<ValidatedCardNumber, CardNumberError> {
    let cleaned = strip_separators(&normalize_basic(input));

    if cleaned.is_empty() {
        return Err(CardNumberError::Empty);
    }

    if let Some(character) = cleaned.chars().find(|c| !c.is_ascii_digit()) {
        return Err(CardNumberError::NonNumeric { character });
    }

    // All chars are ASCII digits, so byte length equals digit count.
    let count = cleaned.len();
    if count < MIN_CARD_DIGITS {
        return Err(CardNumberError::TooShort {
            length: count,
            minimum: MIN_CARD_DIGITS,
        });
    }
    if count > MAX_CARD_DIGITS {
        return Err(CardNumberError::TooLong {
            length: count,
            maximum: MAX_CARD_DIGITS,
        });
    }

    let mut digits = [0u8; MAX_CARD_DIGITS];
    for (i, b) in cleaned.bytes().enumerate() {
        digits[i] = b - b'0';
    }

    if !luhn::validate(&digits[..count]) {
        return Err(CardNumberError::InvalidChecksum);
    }

    Ok(ValidatedCardNumber::new(digits, count as u8))
}

/// Quick boolean check for a card number string.
///
/// # Example
///
/// ```
/// use payform_validator::is_valid_card_number;
///
/// assert!(is_valid_card_number("4111 1111 1111 1111"));
/// assert!(!is_valid_card_number("4111111111111112"));
/// ```
#[inline]
pub fn is_valid_card_number(input: &str) -> bool {
    validate_card_number(input).is_ok()
}

/// Checks only the Luhn relation, ignoring length rules.
///
/// Separators and other non-digit characters are skipped.
#[inline]
pub fn passes_luhn(input: &str) -> bool {
    let digits: Vec<u8> = input
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| d as u8))
        .collect();

    !digits.is_empty() && luhn::validate(&digits)
}
