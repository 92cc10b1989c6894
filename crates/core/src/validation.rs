//! Input validation for the two argument kinds.
//!
//! Both functions are pure: each takes a raw argument string and either
//! returns the validated value or the fixed error for that argument kind.
//! Validation is all-or-nothing; nothing downstream runs on unvalidated
//! input.

use crate::error::{Error, Result};
use crate::pattern::{Pattern, Symbol};

/// Validates a raw pattern string.
///
/// Accepts only a non-empty string whose every character is `S` or `T`
/// (case-sensitive).
///
/// # Errors
///
/// Returns [`Error::InvalidPattern`] for an empty string or any character
/// outside the alphabet.
pub fn validate_pattern(raw: &str) -> Result<Pattern> {
    if raw.is_empty() {
        return Err(Error::InvalidPattern);
    }

    let symbols = raw
        .chars()
        .map(|c| Symbol::from_char(c).ok_or(Error::InvalidPattern))
        .collect::<Result<Vec<Symbol>>>()?;

    Ok(Pattern::new(symbols))
}

/// Validates a raw length argument.
///
/// Accepts only a base-10 integer literal with no sign, decimal point or
/// other non-digit characters, whose value is at least 1.
///
/// # Errors
///
/// Returns [`Error::InvalidLength`] for anything else, including values too
/// large to represent.
pub fn validate_length(raw: &str) -> Result<usize> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidLength);
    }

    let value: usize = raw.parse().map_err(|_| Error::InvalidLength)?;

    if value < 1 {
        return Err(Error::InvalidLength);
    }

    Ok(value)
}
