use crate::app::grocery_service::ServiceError;
use serde_json::Value as JsonValue;

/// Parses an `{id}` path segment. Anything that is not a positive integer cannot name
/// a stored item, so it is reported as not found rather than as a bad request.
pub fn parse_item_id(raw: &str) -> Result<u64, ServiceError> {
    match raw.trim().parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ServiceError::NotFound),
    }
}

/// Accepts a JSON integer, a whole-valued float, or a string holding an integer
/// (e.g. `"3"` from a form field).
pub fn coerce_quantity(v: &JsonValue) -> Result<i64, ServiceError> {
    if let Some(n) = v.as_i64() {
        return Ok(n);
    }
    // Whole-valued floats such as `2.0` pass; fractional ones fall through to the error.
    if let Some(f) = v.as_f64() {
        if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
            return Ok(f as i64);
        }
    }
    if let Some(s) = v.as_str() {
        return s
            .trim()
            .parse::<i64>()
            .map_err(|_| ServiceError::validation(format!("quantity must be an integer, got '{}'", s)));
    }
    Err(ServiceError::validation(format!(
        "quantity must be an integer, got {}",
        v
    )))
}
