use super::ApiError;

pub fn validate_platforms(platforms: &[String]) -> Result<(), ApiError> {
    if platforms.is_empty() {
        return Err(ApiError::validation(
            "At least one platform must be specified",
        ));
    }
    Ok(())
}

pub fn validate_required<'a>(field: &str, value: &'a str) -> Result<&'a str, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation(format!("{field} cannot be empty")));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_platforms() {
        assert!(validate_platforms(&["linkedin".to_string()]).is_ok());
        assert!(validate_platforms(&[]).is_err());
    }

    #[test]
    fn test_validate_required() {
        assert_eq!(validate_required("name", "Acme").unwrap(), "Acme");
        assert_eq!(validate_required("name", "  Acme  ").unwrap(), "Acme");
        assert!(validate_required("name", "").is_err());
        assert!(validate_required("name", "   ").is_err());
    }
}
