//! Billing email validation.
//!
//! # Policy
//!
//! This is intake-form screening, not RFC 5322 grammar. The address is
//! normalized (NFKC, trim, lowercase), capped at 254 characters, required
//! to contain exactly one `@` with a non-empty local part, and required to
//! end in the literal suffix `.com`. The suffix rule is a deliberately
//! narrow policy for this form, not domain or TLD validation; relax it if
//! the accepted address space ever widens.

use std::fmt;

use crate::normalize::normalize_basic;

/// Longest accepted email, per the RFC 5321 path limit.
pub const MAX_EMAIL_CHARS: usize = 254;

/// Errors that can occur during billing email validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// The normalized address exceeds [`MAX_EMAIL_CHARS`].
    TooLong {
        /// Actual length in characters.
        length: usize,
    },
    /// No `@` present.
    MissingAt,
    /// More than one `@` present.
    MultipleAt,
    /// The `@` is the first character, leaving an empty local part.
    LeadingAt,
    /// The address does not end in `.com`.
    InvalidSuffix,
}

impl fmt::Display for EmailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong { length } => {
                write!(
                    f,
                    "email too long: got {} characters, maximum is {}",
                    length, MAX_EMAIL_CHARS
                )
            }
            Self::MissingAt => write!(f, "email must contain '@'"),
            Self::MultipleAt => write!(f, "email must contain exactly one '@'"),
            Self::LeadingAt => write!(f, "email is missing the part before '@'"),
            Self::InvalidSuffix => write!(f, "email must end in .com"),
        }
    }
}

impl std::error::Error for EmailError {}

/// Validates and normalizes a billing email address.
///
/// On success, returns the normalized (trimmed, lowercased) address. The
/// first failing condition in order — length, `@` placement, suffix — is
/// reported.
///
/// # Example
///
/// ```
/// use payform_validator::email::{validate_billing_email, EmailError};
///
/// assert_eq!(
///     validate_billing_email("User@Example.com").unwrap(),
///     "user@example.com"
/// );
///
/// assert_eq!(
///     validate_billing_email("a@b@c.com").unwrap_err(),
///     EmailError::MultipleAt
/// );
/// assert_eq!(
///     validate_billing_email("user@domain.org").unwrap_err(),
///     EmailError::InvalidSuffix
/// );
/// ```
pub fn validate_billing_email(input: &str) -> Result<String, EmailError> {
    let email = normalize_basic(input).to_lowercase();

    let length = email.chars().count();
    if length > MAX_EMAIL_CHARS {
        return Err(EmailError::TooLong { length });
    }

    match email.chars().filter(|c| *c == '@').count() {
        0 => return Err(EmailError::MissingAt),
        1 => {}
        _ => return Err(EmailError::MultipleAt),
    }

    if email.starts_with('@') {
        return Err(EmailError::LeadingAt);
    }

    if !email.ends_with(".com") {
        return Err(EmailError::InvalidSuffix);
    }

    Ok(email)
}

/// Quick boolean check for a billing email string.
#[inline]
pub fn is_valid_billing_email(input: &str) -> bool {
    validate_billing_email(input).is_ok()
}
