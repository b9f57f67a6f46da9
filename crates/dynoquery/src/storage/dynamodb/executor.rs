//! DynamoDB query executor.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use dynoquery_core::query::TableQuery;
use dynoquery_core::storage::{QueryExecutor, QueryResult, Result};

use super::client::{create_client, ConnectionSettings};
use super::conversions::{items_to_records, to_query_input};
use super::error::map_query_error;

/// DynamoDB-backed query executor.
///
/// Holds one client and performs one round trip per call. No retries, no
/// pagination, and no state shared between invocations.
pub struct DynamoDbExecutor {
    client: Client,
}

impl DynamoDbExecutor {
    /// Creates an executor with the given DynamoDB client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates an executor from connection settings.
    pub async fn connect(settings: &ConnectionSettings) -> Result<Self> {
        let client = create_client(settings).await;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl QueryExecutor for DynamoDbExecutor {
    async fn execute(&self, query: &TableQuery) -> Result<QueryResult> {
        let input = to_query_input(query)?;

        let output = self
            .client
            .query()
            .set_table_name(input.table_name)
            .set_key_condition_expression(input.key_condition_expression)
            .set_expression_attribute_values(input.expression_attribute_values)
            .set_filter_expression(input.filter_expression)
            .send()
            .await
            .map_err(map_query_error)?;

        let items = output.items.unwrap_or_default();

        // TODO: copy the response's ConsumedCapacity into the reserved slot
        Ok(QueryResult {
            records: items_to_records(&items),
            scanned_count: i64::from(output.scanned_count),
            consumed_capacity: None,
        })
    }
}
