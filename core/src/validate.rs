//! Pure input validators for form fields.
//!
//! Both validators operate on the raw text the user typed, before any
//! parsing. The id rule accepts decimal digits only; the name rule accepts
//! unaccented ASCII letters only. Whitespace anywhere fails — callers must
//! not trim on the user's behalf.

/// True iff `s` is non-empty and composed entirely of decimal digits.
pub fn is_valid_employee_id(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// True iff `s` is non-empty and composed entirely of ASCII letters.
///
/// Digits, spaces, hyphens, apostrophes, and accented letters all fail.
pub fn is_valid_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic())
}
