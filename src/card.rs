//! Validated card number storage.
//!
//! A [`ValidatedCardNumber`] holds the digits of a card number that passed
//! format and checksum validation. Storage is a fixed-size array zeroed on
//! drop, and `Debug`/`Display` output is always masked, so the number does
//! not leak through logging or linger in freed memory.

use std::fmt;
use zeroize::Zeroize;

/// Maximum number of digits in a card number.
pub const MAX_CARD_DIGITS: usize = 19;

/// Minimum number of digits in a card number.
pub const MIN_CARD_DIGITS: usize = 13;

/// A card number that passed format and Luhn validation.
///
/// Call [`digits`](Self::digits) to obtain the clean digit string for
/// downstream processing; everything printable is masked.
#[derive(Clone)]
pub struct ValidatedCardNumber {
    /// The digits as values 0-9.
    digits: [u8; MAX_CARD_DIGITS],
    /// Number of digits actually present.
    digit_count: u8,
}

impl ValidatedCardNumber {
    /// Internal constructor; use `validate_card_number` to create instances.
    #[inline]
    pub(crate) fn new(digits: [u8; MAX_CARD_DIGITS], digit_count: u8) -> Self {
        Self {
            digits,
            digit_count,
        }
    }

    /// Returns the number of digits (13-19).
    #[inline]
    pub const fn length(&self) -> usize {
        self.digit_count as usize
    }

    /// Returns the full digit string.
    ///
    /// This exposes the primary account number. Never log the result; use
    /// [`masked`](Self::masked) for display.
    #[inline]
    pub fn digits(&self) -> String {
        self.digit_slice().iter().map(|&d| (b'0' + d) as char).collect()
    }

    /// Returns the last four digits, safe for display.
    #[inline]
    pub fn last_four(&self) -> String {
        let len = self.length();
        let start = len.saturating_sub(4);
        self.digits[start..len]
            .iter()
            .map(|&d| (b'0' + d) as char)
            .collect()
    }

    /// Returns the number masked down to the last four digits.
    ///
    /// Format: `****-****-****-1111`.
    #[inline]
    pub fn masked(&self) -> String {
        crate::mask::mask_card(self)
    }

    /// Raw digit values for checksum and masking internals.
    #[inline]
    pub(crate) fn digit_slice(&self) -> &[u8] {
        &self.digits[..self.digit_count as usize]
    }
}

impl fmt::Debug for ValidatedCardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedCardNumber")
            .field("number", &self.masked())
            .field("length", &self.digit_count)
            .finish()
    }
}

impl fmt::Display for ValidatedCardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

impl Drop for ValidatedCardNumber {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(digits_slice: &[u8]) -> ValidatedCardNumber {
        let mut digits = [0u8; MAX_CARD_DIGITS];
        digits[..digits_slice.len()].copy_from_slice(digits_slice);
        ValidatedCardNumber::new(digits, digits_slice.len() as u8)
    }

    #[test]
    fn test_digits_roundtrip() {
        let card = make(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]);
        assert_eq!(card.digits(), "4111111111111111");
        assert_eq!(card.length(), 16);
    }

    #[test]
    fn test_last_four() {
        let card = make(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 3, 4]);
        assert_eq!(card.last_four(), "1234");
    }

    #[test]
    fn test_debug_is_masked() {
        let card = make(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]);
        let debug = format!("{:?}", card);
        assert!(!debug.contains("4111111111111111"));
        assert!(debug.contains("*"));
    }

    #[test]
    fn test_display_is_masked() {
        let card = make(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]);
        let display = card.to_string();
        assert!(!display.contains("4111111111111111"));
        assert!(display.ends_with("1111"));
    }

    #[test]
    fn test_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidatedCardNumber>();
    }
}
