//! Input integrity checks for queue data.
//!
//! Advisory checks hosts can run on freshly ingested order and
//! duration data before feeding it to the engine. Detects:
//! - Duplicate order IDs
//! - Empty order IDs
//! - A duration table without a `"Default"` entry
//! - Non-positive duration entries
//!
//! The engine itself stays total and does not require validation to
//! have run; an unmapped or non-positive duration still resolves via
//! the fallback chain.

use std::collections::HashSet;

use crate::models::{DurationTable, WorkOrder, DEFAULT_KEY};

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
    /// Two orders share the same ID.
    DuplicateId,
    /// An order has an empty ID.
    EmptyId,
    /// The duration table lacks a `"Default"` entry.
    MissingDefaultDuration,
    /// A duration entry is zero or negative.
    NonPositiveDuration,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates ingested orders and the duration table.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(orders: &[WorkOrder], table: &DurationTable) -> ValidationResult {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for order in orders {
        if order.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Work order with empty ID",
            ));
        } else if !seen.insert(order.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate work order ID: {}", order.id),
            ));
        }
    }

    if !table.has_default() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingDefaultDuration,
            format!("Duration table has no '{DEFAULT_KEY}' entry"),
        ));
    }

    for (product_type, minutes) in table.iter() {
        if minutes <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                format!("Duration for '{product_type}' must be positive, got {minutes}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_orders() -> Vec<WorkOrder> {
        vec![
            WorkOrder::new("WO-1").with_product_type("A"),
            WorkOrder::new("WO-2").with_product_type("B"),
        ]
    }

    fn sample_table() -> DurationTable {
        DurationTable::new()
            .with_entry("A", 60)
            .with_entry("B", 30)
            .with_default(10)
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_orders(), &sample_table()).is_ok());
    }

    #[test]
    fn test_duplicate_order_id() {
        let orders = vec![WorkOrder::new("WO-1"), WorkOrder::new("WO-1")];
        let errors = validate_input(&orders, &sample_table()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_empty_order_id() {
        let orders = vec![WorkOrder::new("")];
        let errors = validate_input(&orders, &sample_table()).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::EmptyId));
    }

    #[test]
    fn test_missing_default_duration() {
        let table = DurationTable::new().with_entry("A", 60);
        let errors = validate_input(&sample_orders(), &table).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingDefaultDuration));
    }

    #[test]
    fn test_non_positive_duration() {
        let table = sample_table().with_entry("Broken", 0);
        let errors = validate_input(&sample_orders(), &table).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveDuration
                && e.message.contains("Broken")));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let orders = vec![WorkOrder::new(""), WorkOrder::new("X"), WorkOrder::new("X")];
        let table = DurationTable::new().with_entry("A", -5);
        let errors = validate_input(&orders, &table).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
