//! Store backend implementations.
//!
//! The query-executor seam is defined in `dynoquery_core::storage`; this
//! module provides the DynamoDB implementation built on `aws-sdk-dynamodb`.

pub mod dynamodb;

pub use dynamodb::{ConnectionSettings, DynamoDbExecutor};
