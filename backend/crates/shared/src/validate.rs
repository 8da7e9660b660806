//! Field validation shared by request inputs
//!
//! Lengths are counted in Unicode scalar values, not bytes.

use crate::error::app_error::{AppError, AppResult};

/// `value` must have between `min` and `max` characters (inclusive)
pub fn length(field: &str, value: &str, min: usize, max: Option<usize>) -> AppResult<()> {
    let count = value.chars().count();

    if count < min {
        let message = if min == 1 {
            format!("{field} must not be empty")
        } else {
            format!("{field} must be at least {min} characters")
        };
        return Err(AppError::bad_request(message));
    }

    if let Some(max) = max {
        if count > max {
            return Err(AppError::bad_request(format!(
                "{field} must be at most {max} characters"
            )));
        }
    }

    Ok(())
}

/// Optional variant of [`length`]; `None` always passes
pub fn optional_length(
    field: &str,
    value: Option<&str>,
    min: usize,
    max: Option<usize>,
) -> AppResult<()> {
    match value {
        Some(value) => length(field, value, min, max),
        None => Ok(()),
    }
}

/// Lists that must carry at least `min` entries
pub fn min_items<T>(field: &str, items: &[T], min: usize) -> AppResult<()> {
    if items.len() < min {
        return Err(AppError::bad_request(format!(
            "{field} must contain at least {min} item(s)"
        )));
    }
    Ok(())
}
