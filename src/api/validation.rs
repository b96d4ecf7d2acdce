use crate::aggregators::config::CategoryLevel;
use crate::api::error::ApiError;

/// Category level from a request, 1 when absent
pub fn validate_category_level(level: Option<u8>) -> Result<CategoryLevel, ApiError> {
    match level {
        None => Ok(CategoryLevel::default()),
        Some(value) => CategoryLevel::try_from(value).map_err(ApiError::bad_request),
    }
}

pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::bad_request(format!("{} cannot be empty", field_name)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_level_bounds() {
        assert_eq!(validate_category_level(None).unwrap(), CategoryLevel::TopLevel);
        assert_eq!(validate_category_level(Some(3)).unwrap(), CategoryLevel::Detailed);
        assert!(matches!(validate_category_level(Some(0)), Err(ApiError::BadRequest(_))));
        assert!(matches!(validate_category_level(Some(4)), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_not_empty() {
        assert!(validate_not_empty("abc", "id").is_ok());
        assert!(validate_not_empty("  ", "id").is_err());
    }
}
