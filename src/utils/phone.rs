//! Phone number normalization for client contact data.

use thiserror::Error;

/// Errors produced while normalizing a phone number.
#[derive(Debug, Error)]
pub enum PhoneError {
    #[error("phone number is empty")]
    Empty,

    #[error("phone number contains invalid character '{0}'")]
    InvalidCharacter(char),

    #[error("phone number has {0} digits, expected 5-15")]
    BadLength(usize),
}

/// Normalizes a phone number to a canonical `[+]digits` form.
///
/// Accepted separators (spaces, dashes, dots, parentheses) are stripped; a
/// single leading `+` is preserved. Any other character is rejected.
pub fn normalize_phone(raw: &str) -> Result<String, PhoneError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PhoneError::Empty);
    }

    let mut normalized = String::with_capacity(trimmed.len());

    for (i, c) in trimmed.chars().enumerate() {
        match c {
            '+' if i == 0 => normalized.push('+'),
            '0'..='9' => normalized.push(c),
            ' ' | '-' | '.' | '(' | ')' => {}
            other => return Err(PhoneError::InvalidCharacter(other)),
        }
    }

    let digits = normalized.chars().filter(char::is_ascii_digit).count();
    if !(5..=15).contains(&digits) {
        return Err(PhoneError::BadLength(digits));
    }

    Ok(normalized)
}
