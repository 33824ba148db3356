//! Input validation shared by all staff constructors.
//!
//! Two checks guard the staff model: names must be non-empty after
//! trimming, and years of experience must be non-negative. Both are
//! pure predicates; the typed rejection they pair with is
//! [`ValidationError`].

use thiserror::Error;

/// Result of a validated staff operation.
pub type StaffResult<T> = Result<T, ValidationError>;

/// Rejection raised by staff construction or name assignment.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// The supplied name was empty or whitespace-only.
    #[error("name cannot be empty")]
    EmptyName,
    /// Years of experience below zero.
    #[error("years of experience cannot be negative (got {0})")]
    NegativeExperience(i64),
}

/// Whether `name` is non-empty after trimming whitespace.
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// Whether `value` is zero or positive.
pub fn is_non_negative(value: i64) -> bool {
    value >= 0
}
