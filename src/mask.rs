//! Masking utilities for safe display of card numbers.
//!
//! The collaborator that renders or logs validation outcomes must never see
//! the full number. These helpers produce the `****-****-****-1234` form
//! that shows only the last four digits.

use crate::ValidatedCardNumber;

/// Masks a validated card number down to its last four digits.
///
/// # Example
///
/// ```
/// use payform_validator::validate_card_number;
///
/// let card = validate_card_number("4111-1111-1111-1111").unwrap();
/// assert_eq!(card.masked(), "****-****-****-1111");
/// ```
#[inline]
pub fn mask_card(card: &ValidatedCardNumber) -> String {
    grouped_mask(card.length(), &card.last_four())
}

/// Masks a raw card number string.
///
/// Non-digit characters are stripped before masking, so formatted and
/// unformatted input produce the same masked output. Inputs with four or
/// fewer digits are masked entirely.
///
/// # Example
///
/// ```
/// use payform_validator::mask_string;
///
/// assert_eq!(mask_string("4111 1111 1111 1111"), "****-****-****-1111");
/// assert_eq!(mask_string("123"), "***");
/// ```
pub fn mask_string(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() <= 4 {
        return "*".repeat(digits.len());
    }

    let last_four: String = digits[digits.len() - 4..].iter().collect();
    grouped_mask(digits.len(), &last_four)
}

/// Extracts the last four digits from a card number string.
///
/// Returns an empty string when fewer than four digits are present.
pub fn last_four_from_string(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() < 4 {
        return String::new();
    }
    digits[digits.len() - 4..].iter().collect()
}

/// Builds `*` runs in groups of four, ending with the clear last-four.
fn grouped_mask(total_len: usize, last_four: &str) -> String {
    let masked_count = total_len.saturating_sub(4);
    let mut out = String::with_capacity(total_len + total_len / 4);

    for i in 0..masked_count {
        if i > 0 && i % 4 == 0 {
            out.push('-');
        }
        out.push('*');
    }

    if masked_count > 0 && masked_count % 4 == 0 {
        out.push('-');
    }

    out.push_str(last_four);
    out
}
