//! Input validation
//!
//! Checks applied before anything reaches the store.

use thiserror::Error;

/// Smallest serving multiplier that can be logged
pub const MIN_SERVINGS: f64 = 0.5;

/// Servings move in half-serving steps
pub const SERVING_STEP: f64 = 0.5;

/// Rejected user input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("servings must be at least {min}, got {value}")]
    ServingsBelowMinimum { value: f64, min: f64 },

    #[error("servings must be a multiple of {step}, got {value}")]
    ServingsOffStep { value: f64, step: f64 },

    #[error("{field} must be a positive number, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} cannot be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("no {entity} with id {id}")]
    UnknownEntry { entity: &'static str, id: u64 },
}

/// Validate a logged quantity of servings (at least [`MIN_SERVINGS`])
pub fn validate_quantity(value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() || value < MIN_SERVINGS {
        return Err(ValidationError::ServingsBelowMinimum {
            value,
            min: MIN_SERVINGS,
        });
    }
    Ok(value)
}

/// Validate a serving multiplier chosen with the +/- stepper
pub fn validate_servings(value: f64) -> Result<f64, ValidationError> {
    let value = validate_quantity(value)?;
    let steps = value / SERVING_STEP;
    if (steps - steps.round()).abs() > 1e-9 {
        return Err(ValidationError::ServingsOffStep {
            value,
            step: SERVING_STEP,
        });
    }
    Ok(value)
}

/// Validate a strictly positive measurement such as a weight or height
pub fn validate_positive(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::NotPositive { field, value });
    }
    Ok(value)
}

/// Validate a measurement that may be zero, such as a bodyweight set
pub fn validate_non_negative(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(value)
}

/// Validate a required, non-blank text field and return it trimmed
pub fn validate_required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed)
}
