//! Validation of the `list` field.

use crate::error::AppError;

/// Upper bound on the raw (untrimmed) byte length of `list`.
pub const MAX_LIST_LEN: usize = 200;

/// Trimmed value must be non-empty; the untrimmed value must be at most [`MAX_LIST_LEN`] bytes.
pub fn validate_list_field(input: &str) -> Result<(), AppError> {
    if input.trim().is_empty() {
        return Err(AppError::Validation("List field is required".into()));
    }
    if input.len() > MAX_LIST_LEN {
        return Err(AppError::Validation(format!(
            "List field exceeds maximum length of {}",
            MAX_LIST_LEN
        )));
    }
    Ok(())
}
