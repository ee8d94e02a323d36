use crate::api::errors::ApiError;

pub(crate) const MAX_LIMIT: i64 = 100;

pub(crate) const fn default_limit() -> i64 {
    50
}

/// Out-of-range pagination is rejected, never silently clamped.
pub(crate) fn validate(limit: i64, offset: i64) -> Result<(), ApiError> {
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(ApiError::BadRequest(format!(
            "limit must be between 1 and {MAX_LIMIT}, got {limit}"
        )));
    }
    if offset < 0 {
        return Err(ApiError::BadRequest(format!("offset must be non-negative, got {offset}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate;

    #[test]
    fn accepts_bounds() {
        assert!(validate(1, 0).is_ok());
        assert!(validate(100, 0).is_ok());
        assert!(validate(50, 1000).is_ok());
    }

    #[test]
    fn rejects_limit_out_of_range() {
        assert!(validate(0, 0).is_err());
        assert!(validate(101, 0).is_err());
        assert!(validate(-5, 0).is_err());
    }

    #[test]
    fn rejects_negative_offset() {
        assert!(validate(50, -1).is_err());
    }
}
