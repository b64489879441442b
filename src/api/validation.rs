use super::ApiError;

/// Checks page parameters before they reach the store. Both must be
/// non-negative; the widening to `u64` feeds straight into the query.
#[allow(clippy::cast_sign_loss)]
pub fn validate_page(limit: i64, offset: i64) -> Result<(u64, u64), ApiError> {
    if limit < 0 {
        return Err(ApiError::validation(format!(
            "Invalid limit: {limit}. Limit must be non-negative"
        )));
    }

    if offset < 0 {
        return Err(ApiError::validation(format!(
            "Invalid offset: {offset}. Offset must be non-negative"
        )));
    }

    Ok((limit as u64, offset as u64))
}
