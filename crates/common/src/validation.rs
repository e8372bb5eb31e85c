//! Field validators shared by the domain input types

use validator::ValidationError;

use crate::error::{Error, Result};

/// Physical quantities and money: finite and not negative.
pub fn non_negative_amount(value: f64) -> std::result::Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new("not_finite").with_message("must be a finite number".into()));
    }
    if value < 0.0 {
        return Err(ValidationError::new("negative").with_message("must not be negative".into()));
    }
    Ok(())
}

/// Strictly positive, finite quantities such as diameter and density.
pub fn positive_amount(value: f64) -> std::result::Result<(), ValidationError> {
    non_negative_amount(value)?;
    if value == 0.0 {
        return Err(ValidationError::new("zero").with_message("must be greater than zero".into()));
    }
    Ok(())
}

/// Validate a single scalar argument outside of a derived input type.
pub fn ensure_non_negative(field: &str, value: f64) -> Result<()> {
    non_negative_amount(value).map_err(|e| {
        Error::Validation(format!(
            "{} {}",
            field,
            e.message.unwrap_or_else(|| e.code.clone())
        ))
    })
}
