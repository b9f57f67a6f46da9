//! DynamoDB attribute conversion functions.
//!
//! Pure functions for building the query request and reducing returned items
//! to JSON-safe records. These are testable in isolation without DynamoDB
//! access.

use std::collections::HashMap;

use aws_sdk_dynamodb::operation::query::QueryInput;
use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::Value;

use dynoquery_core::query::{ExpressionAttribute, TableQuery};
use dynoquery_core::storage::{QueryRecord, StorageError};

/// Builds the placeholder substitution map.
///
/// Each pair becomes a String-kind attribute value keyed by its placeholder
/// token. Duplicate names resolve to the last occurrence, matching
/// map-assignment semantics.
pub fn expression_attribute_values(
    attributes: &[ExpressionAttribute],
) -> HashMap<String, AttributeValue> {
    let mut map = HashMap::with_capacity(attributes.len());
    for attribute in attributes {
        map.insert(
            attribute.name.clone(),
            AttributeValue::S(attribute.value.clone()),
        );
    }
    map
}

/// Assembles the query request.
///
/// A query without a filter leaves `FilterExpression` out of the request
/// entirely; the store rejects an empty-string filter as a malformed request.
pub fn to_query_input(query: &TableQuery) -> Result<QueryInput, StorageError> {
    QueryInput::builder()
        .table_name(query.table_name())
        .key_condition_expression(query.key_condition_expression())
        .set_expression_attribute_values(Some(expression_attribute_values(query.attributes())))
        .set_filter_expression(query.filter_expression().map(ToOwned::to_owned))
        .build()
        .map_err(|e| StorageError::InvalidRequest(e.to_string()))
}

/// Reduces returned items to JSON-safe records, preserving item order.
///
/// Number values are copied in their string-encoded form, never parsed to a
/// float, so values beyond double precision survive bit-for-bit. String
/// values are copied as-is. Every other attribute kind (boolean, binary,
/// list, map, set, null) is dropped from the record.
pub fn items_to_records(items: &[HashMap<String, AttributeValue>]) -> Vec<QueryRecord> {
    let mut records = Vec::with_capacity(items.len());
    for item in items {
        let mut record = QueryRecord::new();
        for (key, value) in item {
            match value {
                AttributeValue::N(number) => {
                    record.insert(key.clone(), Value::String(number.clone()));
                }
                AttributeValue::S(string) => {
                    record.insert(key.clone(), Value::String(string.clone()));
                }
                _ => {}
            }
        }
        records.push(record);
    }
    records
}
