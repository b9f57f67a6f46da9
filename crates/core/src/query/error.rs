use thiserror::Error;

/// Errors that can occur while validating query inputs.
///
/// These are configuration mistakes on the caller's side and always abort
/// the operation before a request is issued.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required input: {field}")]
    MissingField { field: &'static str },
    #[error("Invalid expression attributes: {reason}")]
    InvalidAttributes { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let error = ValidationError::MissingField {
            field: "table name",
        };
        assert_eq!(error.to_string(), "Missing required input: table name");
    }

    #[test]
    fn test_invalid_attributes_display() {
        let error = ValidationError::InvalidAttributes {
            reason: "expected value at line 1 column 2".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid expression attributes: expected value at line 1 column 2"
        );
    }
}
