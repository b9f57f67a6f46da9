use std::env;

/// Activity configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct ActivityConfig {
    /// Propagate store failures to the caller instead of completing with
    /// unset outputs (default: false).
    pub strict_errors: bool,
    /// Custom DynamoDB endpoint URL, e.g. a local instance (default: none).
    pub endpoint_url: Option<String>,
}

impl ActivityConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNOQUERY_STRICT_ERRORS` - `1`/`true` to propagate store failures (default: off)
    /// - `DYNAMODB_ENDPOINT_URL` - custom endpoint URL, e.g. local DynamoDB (default: none)
    pub fn from_env() -> Self {
        Self {
            strict_errors: env::var("DYNOQUERY_STRICT_ERRORS")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            endpoint_url: env::var("DYNAMODB_ENDPOINT_URL").ok(),
        }
    }
}
