//! Request validation.
//!
//! Checks a simulation request before any computation. Every violation
//! is collected — validation never stops at the first problem, so the
//! caller always sees the complete list of offending fields.
//!
//! Checks are positivity and finiteness only. Per-field range caps
//! (maximum order quantities, maximum hours per unit) belong to the
//! request boundary that owns the input form; the core accepts any
//! positive finite value, and the timing model clamps capacity counts
//! that exceed the representable range.

use crate::simulator::SimulationRequest;

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
    /// The request contains no orders.
    EmptyOrderList,
    /// An order's quantity is zero.
    NonPositiveQuantity,
    /// An order's theoretical time is zero, negative, or not finite.
    NonPositiveTime,
    /// The working-hours-per-day parameter is out of domain.
    NonPositiveWorkingHours,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a simulation request.
///
/// Checks:
/// 1. The order list is non-empty
/// 2. Every quantity is positive
/// 3. Every theoretical time is positive and finite
/// 4. Working hours per day is positive and finite
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &SimulationRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if request.orders.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyOrderList,
            "the request contains no product orders",
        ));
    }

    for order in &request.orders {
        if order.quantity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveQuantity,
                format!("quantity for '{}' must be greater than 0", order.product),
            ));
        }

        if !(order.theoretical_time > 0.0) || !order.theoretical_time.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveTime,
                format!(
                    "theoretical time for '{}' must be a positive number, got {}",
                    order.product, order.theoretical_time
                ),
            ));
        }
    }

    if !(request.working_hours_per_day > 0.0) || !request.working_hours_per_day.is_finite() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveWorkingHours,
            format!(
                "working hours per day must be a positive number, got {}",
                request.working_hours_per_day
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
