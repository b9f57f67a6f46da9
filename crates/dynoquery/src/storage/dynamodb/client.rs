//! AWS SDK client setup.

use aws_sdk_dynamodb::config::Credentials;
use aws_sdk_dynamodb::Client;

use dynoquery_core::query::ValidationError;

/// Connection material for the DynamoDB client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    access_key_id: String,
    secret_access_key: String,
    region: String,
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
}

impl ConnectionSettings {
    /// Creates connection settings, validating that the credential material
    /// and region are non-blank.
    pub fn new(
        access_key_id: &str,
        secret_access_key: &str,
        region: &str,
    ) -> Result<Self, ValidationError> {
        if access_key_id.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: "access key id",
            });
        }
        if secret_access_key.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: "secret access key",
            });
        }
        if region.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: "default region",
            });
        }

        Ok(Self {
            access_key_id: access_key_id.to_string(),
            secret_access_key: secret_access_key.to_string(),
            region: region.to_string(),
            endpoint_url: None,
        })
    }

    /// Sets a custom endpoint, e.g. a local DynamoDB instance.
    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// The region hosting the table.
    pub fn region(&self) -> &str {
        &self.region
    }
}

/// Creates a DynamoDB client with the given settings.
pub async fn create_client(settings: &ConnectionSettings) -> Client {
    let credentials = Credentials::new(
        settings.access_key_id.clone(),
        settings.secret_access_key.clone(),
        None,
        None,
        "dynoquery",
    );

    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .credentials_provider(credentials)
        .region(aws_config::Region::new(settings.region.clone()));

    if let Some(endpoint) = &settings.endpoint_url {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    let sdk_config = sdk_config_loader.load().await;
    Client::new(&sdk_config)
}
