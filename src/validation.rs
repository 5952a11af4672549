//! Input validation for workloads and simulation settings.
//!
//! Checks raw process records before they become a [`Workload`](crate::models::Workload).
//! Detects:
//! - Duplicate identities
//! - Identity 0 (identities are positive)
//! - Negative or non-finite arrival times
//! - Non-positive or non-finite burst times
//!
//! Identities do not have to be contiguous: processes are looked up
//! through an explicit identity map, never by position.
//!
//! All problems are collected, not just the first one.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::ProcessRecord;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Two processes share the same identity.
    DuplicateId,
    /// Identity is not a positive integer.
    InvalidId,
    /// Arrival time is negative or not finite.
    InvalidArrival,
    /// Burst time is zero, negative, or not finite.
    InvalidBurst,
    /// A simulation setting is out of range.
    InvalidSetting,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates raw process records.
///
/// Checks:
/// 1. No duplicate identities
/// 2. No identity 0
/// 3. Arrival times finite and non-negative
/// 4. Burst times finite and strictly positive
///
/// Emptiness is not checked here; an empty input is reported separately
/// by ingestion.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_records(records: &[ProcessRecord]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for r in records {
        if r.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidId,
                "Process ID must be positive, got 0",
            ));
        }

        if !seen.insert(r.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", r.id),
            ));
        }

        if !r.arrival.is_finite() || r.arrival < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrival,
                format!("Process {} has invalid arrival time {}", r.id, r.arrival),
            ));
        }

        if !r.burst.is_finite() || r.burst <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurst,
                format!("Process {} has invalid burst time {}", r.id, r.burst),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks that a time slice setting is finite and strictly positive.
pub(crate) fn check_positive(name: &str, value: f64, errors: &mut Vec<ValidationError>) {
    if !value.is_finite() || value <= 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidSetting,
            format!("{name} must be a positive finite number, got {value}"),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(triples: &[(u32, f64, f64)]) -> Vec<ProcessRecord> {
        triples.iter().map(|&t| ProcessRecord::from(t)).collect()
    }

    #[test]
    fn test_valid_input() {
        let rs = records(&[(1, 0.0, 5.0), (2, 1.0, 3.0), (7, 2.5, 0.5)]);
        assert!(validate_records(&rs).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let rs = records(&[(1, 0.0, 5.0), (1, 1.0, 3.0)]);
        let errors = validate_records(&rs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert!(errors[0].message.contains("1"));
    }

    #[test]
    fn test_zero_id() {
        let errors = validate_records(&records(&[(0, 0.0, 1.0)])).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::InvalidId));
    }

    #[test]
    fn test_invalid_arrival() {
        let rs = records(&[(1, -1.0, 5.0), (2, f64::NAN, 3.0)]);
        let errors = validate_records(&rs).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::InvalidArrival)
                .count(),
            2
        );
    }

    #[test]
    fn test_invalid_burst() {
        let rs = records(&[(1, 0.0, 0.0), (2, 0.0, -3.0), (3, 0.0, f64::INFINITY)]);
        let errors = validate_records(&rs).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::InvalidBurst));
    }

    #[test]
    fn test_multiple_errors() {
        let rs = records(&[(0, -1.0, 0.0), (4, 0.0, 1.0), (4, 0.0, 1.0)]);
        let errors = validate_records(&rs).unwrap_err();
        assert!(errors.len() >= 4);
    }

    #[test]
    fn test_check_positive() {
        let mut errors = Vec::new();
        check_positive("quantum", 2.0, &mut errors);
        assert!(errors.is_empty());
        check_positive("quantum", 0.0, &mut errors);
        check_positive("quantum", f64::NAN, &mut errors);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidSetting);
    }
}
