//! Input validation for layout calls.
//!
//! The layout engine itself never fails: it trusts its caller. These
//! checks let a host catch contract violations before layout. Detects:
//! - Duplicate item IDs (later frames would overwrite earlier ones)
//! - Minutes outside the day
//! - Negative or non-finite pixel options

use std::collections::HashSet;
use std::fmt;

use crate::layout::LayoutOptions;
use crate::models::{Timed, MINUTES_IN_DAY};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two items share the same ID.
    DuplicateId,
    /// A start or end minute lies outside `0..1440`.
    MinuteOutOfRange,
    /// A layout option is negative or not finite.
    InvalidOption,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
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

/// Validates the items of one layout call.
///
/// Checks:
/// 1. No duplicate IDs
/// 2. `from` and `to` within `0..1440`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_items<T: Timed>(items: &[T]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for item in items {
        if !ids.insert(item.id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate item ID: {}", item.id()),
            ));
        }

        for (label, minute) in [("start", item.from()), ("end", item.to())] {
            if !(0..MINUTES_IN_DAY).contains(&minute) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MinuteOutOfRange,
                    format!(
                        "Item {} has {label} minute {minute} outside 0..{MINUTES_IN_DAY}",
                        item.id()
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates layout options.
///
/// Every pixel value must be finite and non-negative.
pub fn validate_options(options: &LayoutOptions) -> ValidationResult {
    let values = [
        ("columns.gutterPx", options.columns.gutter_px),
        ("columns.padLeftPx", options.columns.pad_left_px),
        ("columns.padRightPx", options.columns.pad_right_px),
        ("stacked.indentPx", options.stacked.indent_px),
        ("stacked.rightPadPx", options.stacked.right_pad_px),
        ("stacked.minWidthPx", options.stacked.min_width_px),
    ];

    let errors: Vec<ValidationError> = values
        .iter()
        .filter(|(_, v)| !v.is_finite() || *v < 0.0)
        .map(|(name, v)| {
            ValidationError::new(
                ValidationErrorKind::InvalidOption,
                format!("Option '{name}' must be a finite, non-negative pixel value (got {v})"),
            )
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
