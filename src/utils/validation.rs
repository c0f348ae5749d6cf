use crate::utils::error::{CalcError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn parse_integer(field_name: &str, raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| CalcError::InvalidInteger {
            field: field_name.to_string(),
            input: trimmed.to_string(),
        })
}

pub fn validate_non_negative(field_name: &str, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| CalcError::NegativeInput {
        field: field_name.to_string(),
        value,
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CalcError::ConfigError {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("n", "42").unwrap(), 42);
        assert_eq!(parse_integer("n", "  -3 ").unwrap(), -3);
        assert!(parse_integer("n", "abc").is_err());
        assert!(parse_integer("n", "").is_err());
        assert!(parse_integer("n", "3.5").is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert_eq!(validate_non_negative("n", 0).unwrap(), 0);
        assert_eq!(validate_non_negative("n", 7).unwrap(), 7);
        assert!(validate_non_negative("n", -1).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("log_filter", "small_calc=debug").is_ok());
        assert!(validate_non_empty_string("log_filter", "   ").is_err());
    }
}
