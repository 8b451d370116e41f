use crate::utils::error::{ParityError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_ordered(start_field: &str, start: i64, end_field: &str, end: i64) -> Result<()> {
    if end < start {
        return Err(ParityError::InvalidConfigValueError {
            field: end_field.to_string(),
            value: end.to_string(),
            reason: format!("Value must not be less than {} ({})", start_field, start),
        });
    }
    Ok(())
}

/// Number of rows in `start..=end`, or `None` when it does not fit in a `u64`.
pub fn span_len(start: i64, end: i64) -> Option<u64> {
    if end < start {
        return Some(0);
    }
    let diff = (end as i128) - (start as i128) + 1;
    u64::try_from(diff).ok()
}

pub fn validate_max_span(field_name: &str, start: i64, end: i64, max_rows: u64) -> Result<()> {
    match span_len(start, end) {
        Some(len) if len <= max_rows => Ok(()),
        _ => Err(ParityError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}..={}", start, end),
            reason: format!("Range must cover at most {} numbers", max_rows),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(ParityError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ParityError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ordered() {
        assert!(validate_ordered("start", 0, "end", 99).is_ok());
        assert!(validate_ordered("start", 5, "end", 5).is_ok());
        assert!(validate_ordered("start", 10, "end", 9).is_err());
    }

    #[test]
    fn test_span_len() {
        assert_eq!(span_len(0, 99), Some(100));
        assert_eq!(span_len(-5, 5), Some(11));
        assert_eq!(span_len(3, 2), Some(0));
        assert_eq!(span_len(i64::MIN, i64::MAX), None);
    }

    #[test]
    fn test_validate_max_span() {
        assert!(validate_max_span("range", 0, 99, 100).is_ok());
        assert!(validate_max_span("range", 0, 100, 100).is_err());
        assert!(validate_max_span("range", i64::MIN, i64::MAX, u64::MAX).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "parity.toml").is_ok());
        assert!(validate_path("config", "  ").is_err());
        assert!(validate_path("config", "bad\0path").is_err());
    }
}
