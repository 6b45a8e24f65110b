//! Payment form orchestration.
//!
//! [`validate_payment_form`] runs all five field validators independently
//! and merges their outcomes into a [`ValidationReport`]. A failure in one
//! field never prevents evaluation of another, so a user fixing a form
//! sees every problem at once.

use std::collections::BTreeMap;

use crate::clock::{Clock, SystemClock};
use crate::cvv::validate_cvv;
use crate::email::validate_billing_email;
use crate::expiry::validate_exp_date;
use crate::name::validate_name_on_card;
use crate::validate::validate_card_number;

/// Outcome of validating a single field.
///
/// An empty clean value would otherwise be ambiguous between "failed" and
/// "valid but withheld"; the variants keep those cases distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    /// The field is valid; carries the sanitized clean value.
    Valid(String),
    /// The field is valid but its value is withheld by policy (CVV).
    ValidRedacted,
    /// The field failed validation; carries the error message.
    Invalid(String),
}

impl FieldOutcome {
    /// Returns true unless the field failed validation.
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid(_))
    }

    /// Returns the clean value; empty for redacted or invalid fields.
    pub fn clean_value(&self) -> &str {
        match self {
            Self::Valid(value) => value,
            _ => "",
        }
    }

    /// Returns the error message, if the field failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Invalid(message) => Some(message),
            _ => None,
        }
    }
}

/// Aggregated result of validating a payment form.
///
/// `clean` always carries the keys `card`, `exp_date`, `name_on_card`, and
/// `billing_email`, with an empty string standing in for an invalid field.
/// A `cvv` key is never present. `errors` carries an entry only for fields
/// that failed, keyed by `card_number`, `exp_date`, `cvv`, `name_on_card`,
/// or `billing_email`.
///
/// Map storage is ordered so identical inputs (under a fixed clock)
/// produce byte-identical serialized reports.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationReport {
    clean: BTreeMap<&'static str, String>,
    errors: BTreeMap<&'static str, String>,
}

impl ValidationReport {
    /// Sanitized values safe for downstream use once
    /// [`is_valid`](Self::is_valid) holds.
    pub fn clean(&self) -> &BTreeMap<&'static str, String> {
        &self.clean
    }

    /// Error messages keyed by field name. A field absent here is valid.
    pub fn errors(&self) -> &BTreeMap<&'static str, String> {
        &self.errors
    }

    /// Returns true when no field produced an error.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Folds one field outcome into the report.
    ///
    /// `clean_key` is `None` for the CVV, which never lands in `clean`.
    fn record(
        &mut self,
        clean_key: Option<&'static str>,
        error_key: &'static str,
        outcome: FieldOutcome,
    ) {
        match outcome {
            FieldOutcome::Valid(value) => {
                if let Some(key) = clean_key {
                    self.clean.insert(key, value);
                }
            }
            FieldOutcome::ValidRedacted => {}
            FieldOutcome::Invalid(message) => {
                if let Some(key) = clean_key {
                    self.clean.insert(key, String::new());
                }
                self.errors.insert(error_key, message);
            }
        }
    }
}

/// Validates all five payment form fields against the system UTC clock.
///
/// See [`validate_payment_form_with_clock`] for the full contract; this
/// wrapper supplies [`SystemClock`].
///
/// # Example
///
/// ```
/// use payform_validator::validate_payment_form;
///
/// let report = validate_payment_form(
///     "4111-1111-1111-1111",
///     "12/30",
///     "123",
///     "José O'Brien-Smith",
///     "User@Example.com",
/// );
///
/// assert!(report.is_valid());
/// assert_eq!(report.clean()["card"], "4111111111111111");
/// assert_eq!(report.clean()["billing_email"], "user@example.com");
/// assert!(!report.clean().contains_key("cvv"));
/// ```
pub fn validate_payment_form(
    card_number: &str,
    exp_date: &str,
    cvv: &str,
    name_on_card: &str,
    billing_email: &str,
) -> ValidationReport {
    validate_payment_form_with_clock(
        card_number,
        exp_date,
        cvv,
        name_on_card,
        billing_email,
        &SystemClock,
    )
}

/// Validates all five payment form fields against the given clock.
///
/// Every validator runs unconditionally; the report collects each failure
/// under its field name rather than stopping at the first. Overall form
/// validity is [`ValidationReport::is_valid`].
///
/// A valid expiry is surfaced under `clean["exp_date"]` exactly as
/// submitted, without reformatting.
///
/// # Example
///
/// ```
/// use payform_validator::clock::FixedClock;
/// use payform_validator::validate_payment_form_with_clock;
///
/// let clock = FixedClock::new(2025, 6);
/// let report = validate_payment_form_with_clock(
///     "123",
///     "05/25",
///     "12345",
///     "John123",
///     "a@b@c.com",
///     &clock,
/// );
///
/// assert!(!report.is_valid());
/// assert_eq!(report.errors().len(), 5);
/// assert_eq!(report.clean()["card"], "");
/// ```
pub fn validate_payment_form_with_clock(
    card_number: &str,
    exp_date: &str,
    cvv: &str,
    name_on_card: &str,
    billing_email: &str,
    clock: &impl Clock,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    let outcome = match validate_card_number(card_number) {
        Ok(card) => FieldOutcome::Valid(card.digits()),
        Err(err) => FieldOutcome::Invalid(err.to_string()),
    };
    report.record(Some("card"), "card_number", outcome);

    // The caller gets back the exact spelling they submitted.
    let outcome = match validate_exp_date(exp_date, clock) {
        Ok(_) => FieldOutcome::Valid(exp_date.to_string()),
        Err(err) => FieldOutcome::Invalid(err.to_string()),
    };
    report.record(Some("exp_date"), "exp_date", outcome);

    let outcome = match validate_cvv(cvv) {
        Ok(_) => FieldOutcome::ValidRedacted,
        Err(err) => FieldOutcome::Invalid(err.to_string()),
    };
    report.record(None, "cvv", outcome);

    let outcome = match validate_name_on_card(name_on_card) {
        Ok(clean) => FieldOutcome::Valid(clean),
        Err(err) => FieldOutcome::Invalid(err.to_string()),
    };
    report.record(Some("name_on_card"), "name_on_card", outcome);

    let outcome = match validate_billing_email(billing_email) {
        Ok(clean) => FieldOutcome::Valid(clean),
        Err(err) => FieldOutcome::Invalid(err.to_string()),
    };
    report.record(Some("billing_email"), "billing_email", outcome);

    report
}
