use crate::utils::error::{GradeError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(GradeError::config(format!(
            "{} cannot be null or empty.",
            field_name
        )));
    }

    if path.contains('\0') {
        return Err(GradeError::config(format!(
            "{} contains null bytes.",
            field_name
        )));
    }

    Ok(())
}

/// Returns true when `value` has at least one non-whitespace character.
pub fn is_non_empty_string(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn validate_range<T: PartialOrd + Copy>(value: T, min: T, max: T) -> bool {
    value >= min && value <= max
}
