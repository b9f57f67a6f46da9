use async_trait::async_trait;

use crate::query::TableQuery;

use super::{QueryResult, Result};

/// Executor for single table queries.
///
/// One call performs at most one round trip against the store and returns
/// either the normalized result or the reason the query failed. The executor
/// never retries and never swallows a failure; whether a failure is fatal to
/// the caller is a policy decision made one layer up.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Executes the query and returns the normalized result.
    async fn execute(&self, query: &TableQuery) -> Result<QueryResult>;
}
