use super::{ExpressionAttribute, ValidationError};

/// Parses the expression-attributes input payload.
///
/// The payload is a JSON array of `{Name, Value}` objects. A blank payload
/// means no substitutions. Malformed JSON is a validation failure, so the
/// operation aborts before any request is issued rather than proceeding with
/// a partially-built substitution set.
pub fn parse_expression_attributes(
    raw: &str,
) -> Result<Vec<ExpressionAttribute>, ValidationError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(raw).map_err(|e| ValidationError::InvalidAttributes {
        reason: e.to_string(),
    })
}
