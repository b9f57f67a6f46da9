//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StorageError` from `dynoquery_core::storage`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::query::QueryError;

use dynoquery_core::storage::StorageError;

/// Map a Query SDK error to StorageError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> StorageError {
    match err.into_service_error() {
        QueryError::ResourceNotFoundException(_) => {
            StorageError::QueryFailed("Table not found".to_string())
        }
        QueryError::ProvisionedThroughputExceededException(_) => {
            StorageError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        QueryError::RequestLimitExceeded(_) => {
            StorageError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        QueryError::InternalServerError(_) => {
            StorageError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => StorageError::QueryFailed(format!("Query failed: {:?}", err)),
    }
}
