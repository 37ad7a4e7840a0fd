use crate::utils::error::{CombinerError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(CombinerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list(field_name: &str, items: &[String]) -> Result<()> {
    if items.is_empty() {
        return Err(CombinerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "List cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// Parses a single-character setting such as the anchor letter.
pub fn validate_single_char(field_name: &str, value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(CombinerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be exactly one character".to_string(),
        }),
    }
}

pub fn validate_ordered(
    min_field: &str,
    min: usize,
    max_field: &str,
    max: usize,
) -> Result<()> {
    if min > max {
        return Err(CombinerError::InvalidConfigValueError {
            field: min_field.to_string(),
            value: min.to_string(),
            reason: format!("Value must not exceed {} ({})", max_field, max),
        });
    }
    Ok(())
}
