//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Basic email shape: something@something.something, no whitespace
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap()
});

/// Check if a string has non-whitespace content
pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check if a string length is within bounds
pub fn length_between(value: &str, min: usize, max: usize) -> bool {
    let len = value.len();
    len >= min && len <= max
}

/// Check if an email address is plausibly valid
///
/// Full address validation belongs to the server; this only catches the
/// obviously malformed input before a request is made.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
