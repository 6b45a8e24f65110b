//! # payform_validator
//!
//! Boundary-layer validation for payment intake forms.
//!
//! Five untrusted text fields — card number, expiration date, CVV,
//! cardholder name, billing email — are normalized and validated
//! independently, and the per-field outcomes are merged into a single
//! report. No field's failure stops evaluation of the others, so callers
//! can surface every problem in one pass.
//!
//! ## Quick Start
//!
//! ```rust
//! use payform_validator::validate_payment_form;
//!
//! let report = validate_payment_form(
//!     "4111-1111-1111-1111",
//!     "12/30",
//!     "123",
//!     "José O'Brien-Smith",
//!     "User@Example.com",
//! );
//!
//! assert!(report.is_valid());
//! assert_eq!(report.clean()["card"], "4111111111111111");
//! assert_eq!(report.clean()["billing_email"], "user@example.com");
//!
//! // The CVV is validated but its value is never surfaced
//! assert!(!report.clean().contains_key("cvv"));
//! ```
//!
//! ## Per-Field Validation
//!
//! Each field validator is usable on its own:
//!
//! ```rust
//! use payform_validator::{validate_card_number, validate_cvv};
//! use payform_validator::email::validate_billing_email;
//! use payform_validator::name::validate_name_on_card;
//!
//! let card = validate_card_number("4111 1111 1111 1111").unwrap();
//! assert_eq!(card.last_four(), "1111");
//! assert_eq!(card.masked(), "****-****-****-1111");
//!
//! assert_eq!(validate_cvv("123").unwrap().length(), 3);
//! assert_eq!(validate_billing_email(" A@B.com ").unwrap(), "a@b.com");
//! assert_eq!(validate_name_on_card("Ana   Maria").unwrap(), "Ana Maria");
//! ```
//!
//! ## Deterministic Clocks
//!
//! Expiry freshness is judged against a [`Clock`](clock::Clock). Production
//! code reads UTC wall time; tests pin the reference date:
//!
//! ```rust
//! use payform_validator::clock::FixedClock;
//! use payform_validator::expiry::{validate_exp_date, ExpiryError};
//!
//! let june_2025 = FixedClock::new(2025, 6);
//!
//! // A card expiring in the current month is still valid
//! assert!(validate_exp_date("06/25", &june_2025).is_ok());
//! assert!(matches!(
//!     validate_exp_date("05/25", &june_2025),
//!     Err(ExpiryError::Expired { .. })
//! ));
//! ```
//!
//! ## Report Contract
//!
//! - `clean` carries `card`, `exp_date`, `name_on_card`, `billing_email`;
//!   an invalid field maps to an empty string, and `cvv` is never present.
//! - `errors` carries entries only for failed fields, keyed by
//!   `card_number`, `exp_date`, `cvv`, `name_on_card`, `billing_email`.
//! - The form is valid exactly when `errors` is empty.
//!
//! ## Security
//!
//! - Card digits live in fixed-size arrays zeroed on drop; `Debug` and
//!   `Display` output is always masked.
//! - The CVV is never retained: validation records only its length.
//! - [`mask_string`] produces log-safe renderings of raw input.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize` impl for [`ValidationReport`] |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
pub mod clock;
pub mod cvv;
pub mod email;
pub mod error;
pub mod expiry;
pub mod form;
pub mod luhn;
pub mod mask;
pub mod name;
pub mod normalize;
pub mod validate;

// Re-export main types at crate root
pub use card::{ValidatedCardNumber, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
pub use cvv::{validate_cvv, CvvCheck, CvvError};
pub use error::CardNumberError;
pub use form::{
    validate_payment_form, validate_payment_form_with_clock, FieldOutcome, ValidationReport,
};
pub use mask::mask_string;
pub use validate::{is_valid_card_number, passes_luhn, validate_card_number};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    #[test]
    fn test_crate_level_round_trip() {
        let clock = FixedClock::new(2025, 6);
        let report = validate_payment_form_with_clock(
            "4111-1111-1111-1111",
            "06/25",
            "123",
            "José O'Brien-Smith",
            "User@Example.com",
            &clock,
        );

        assert!(report.is_valid());
        assert_eq!(report.clean()["card"], "4111111111111111");
        assert_eq!(report.clean()["exp_date"], "06/25");
        assert_eq!(report.clean()["name_on_card"], "José O'Brien-Smith");
        assert_eq!(report.clean()["billing_email"], "user@example.com");
    }

    #[test]
    fn test_reexports_are_usable() {
        assert!(is_valid_card_number("4111111111111111"));
        assert!(passes_luhn("4111111111111111"));
        assert!(validate_cvv("123").is_ok());
        assert_eq!(mask_string("4111111111111111"), "****-****-****-1111");
    }

    #[test]
    fn test_public_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidatedCardNumber>();
        assert_send_sync::<CardNumberError>();
        assert_send_sync::<CvvCheck>();
        assert_send_sync::<ValidationReport>();
        assert_send_sync::<FieldOutcome>();
    }
}
