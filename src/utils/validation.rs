use crate::utils::error::{DemoError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("app.version", "1.0.0").is_ok());
        assert!(validate_non_empty_string("app.version", "").is_err());
        assert!(validate_non_empty_string("app.version", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("factorial.n", 5, 0, 1000).is_ok());
        assert!(validate_range("factorial.n", 0, 0, 1000).is_ok());
        assert!(validate_range("factorial.n", 1000, 0, 1000).is_ok());
        assert!(validate_range("factorial.n", -1, 0, 1000).is_err());

        match validate_range("factorial.n", 1001, 0, 1000) {
            Err(DemoError::InvalidConfigValueError { field, value, .. }) => {
                assert_eq!(field, "factorial.n");
                assert_eq!(value, "1001");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
