//! The query activity: typed inputs, output mapping, and error policy.
//!
//! The host supplies a flat set of named string/JSON values; they are
//! validated once here, at the boundary, so every downstream stage works
//! with typed fields.

use serde::Serialize;
use serde_json::Value;

use dynoquery_core::query::{parse_expression_attributes, TableQuery, ValidationError};
use dynoquery_core::storage::{QueryExecutor, Result as StorageResult};

use crate::config::ActivityConfig;
use crate::storage::ConnectionSettings;

/// Raw activity inputs, one field per named input the host supplies.
#[derive(Debug, Clone, Default)]
pub struct ActivityInputs {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
    pub table_name: String,
    pub key_condition_expression: String,
    /// JSON array of `{Name, Value}` substitution pairs; blank means none.
    pub expression_attributes: String,
    /// Post-key filter; blank means no filter is applied.
    pub filter_expression: String,
}

impl ActivityInputs {
    /// Validates the inputs once at the boundary.
    ///
    /// Returns the connection settings for the store client and the query to
    /// execute. A blank required field or a malformed attribute payload is
    /// reported here, before a client is built or a request is issued.
    pub fn parse(&self) -> Result<(ConnectionSettings, TableQuery), ValidationError> {
        let settings = ConnectionSettings::new(
            &self.access_key_id,
            &self.secret_access_key,
            &self.region,
        )?;

        let attributes = parse_expression_attributes(&self.expression_attributes)?;
        let query = TableQuery::new(
            self.table_name.as_str(),
            self.key_condition_expression.as_str(),
            self.filter_expression.as_str(),
            attributes,
        )?;

        Ok((settings, query))
    }
}

/// Outputs written back to the host.
///
/// Unset outputs are omitted entirely, so "output present" is the actual
/// success signal rather than the activity's completion status.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActivityOutputs {
    /// `{"results": [...]}`; only set on a successful query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Records the store examined; only set on a successful query.
    #[serde(rename = "scannedCount", skip_serializing_if = "Option::is_none")]
    pub scanned_count: Option<i64>,
    /// Reserved output slot; never populated.
    #[serde(rename = "consumedCapacity", skip_serializing_if = "Option::is_none")]
    pub consumed_capacity: Option<Value>,
}

/// A single query step against the store.
pub struct QueryActivity<E> {
    executor: E,
    config: ActivityConfig,
}

impl<E: QueryExecutor> QueryActivity<E> {
    /// Creates an activity around the given executor.
    pub fn new(executor: E, config: ActivityConfig) -> Self {
        Self { executor, config }
    }

    /// Runs the query and maps the outcome onto the host outputs.
    ///
    /// A store failure does not fail the step by default: the error is
    /// logged and both outputs stay unset while the step completes normally.
    /// With `strict_errors` set, the failure propagates to the caller
    /// instead.
    pub async fn run(&self, query: &TableQuery) -> StorageResult<ActivityOutputs> {
        match self.executor.execute(query).await {
            Ok(result) => Ok(ActivityOutputs {
                result: Some(result.result_value()),
                scanned_count: Some(result.scanned_count),
                consumed_capacity: result.consumed_capacity,
            }),
            Err(err) if self.config.strict_errors => Err(err),
            Err(err) => {
                tracing::error!(
                    table = %query.table_name(),
                    error = %err,
                    "Error while executing query; outputs left unset"
                );
                Ok(ActivityOutputs::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dynoquery_core::query::ExpressionAttribute;
    use dynoquery_core::storage::{QueryRecord, QueryResult, StorageError};
    use serde_json::json;

    struct FixedExecutor {
        outcome: StorageResult<QueryResult>,
    }

    #[async_trait]
    impl QueryExecutor for FixedExecutor {
        async fn execute(&self, _query: &TableQuery) -> StorageResult<QueryResult> {
            self.outcome.clone()
        }
    }

    fn sample_inputs() -> ActivityInputs {
        ActivityInputs {
            access_key_id: "AKIA123".to_string(),
            secret_access_key: "secret".to_string(),
            region: "us-east-1".to_string(),
            table_name: "Users".to_string(),
            key_condition_expression: "pk = :pk".to_string(),
            expression_attributes: r#"[{"Name":":pk","Value":"u1"}]"#.to_string(),
            filter_expression: String::new(),
        }
    }

    fn sample_query() -> TableQuery {
        TableQuery::new(
            "Users",
            "pk = :pk",
            "",
            vec![ExpressionAttribute::new(":pk", "u1")],
        )
        .unwrap()
    }

    fn record(fields: &[(&str, &str)]) -> QueryRecord {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), json!(v)))
            .collect()
    }

    #[test]
    fn test_parse_yields_settings_and_query() {
        let (settings, query) = sample_inputs().parse().unwrap();

        assert_eq!(settings.region(), "us-east-1");
        assert_eq!(query.table_name(), "Users");
        assert_eq!(query.filter_expression(), None);
        assert_eq!(
            query.attributes(),
            &[ExpressionAttribute::new(":pk", "u1")]
        );
    }

    #[test]
    fn test_parse_rejects_blank_table_name() {
        let inputs = ActivityInputs {
            table_name: String::new(),
            ..sample_inputs()
        };

        assert_eq!(
            inputs.parse(),
            Err(ValidationError::MissingField {
                field: "table name"
            })
        );
    }

    #[test]
    fn test_parse_rejects_blank_credentials() {
        let inputs = ActivityInputs {
            secret_access_key: String::new(),
            ..sample_inputs()
        };

        assert_eq!(
            inputs.parse(),
            Err(ValidationError::MissingField {
                field: "secret access key"
            })
        );
    }

    #[test]
    fn test_parse_rejects_malformed_attributes_before_any_request() {
        let inputs = ActivityInputs {
            expression_attributes: r#"[{"Name":":pk""#.to_string(),
            ..sample_inputs()
        };

        assert!(matches!(
            inputs.parse(),
            Err(ValidationError::InvalidAttributes { .. })
        ));
    }

    #[tokio::test]
    async fn test_success_populates_outputs() {
        let activity = QueryActivity::new(
            FixedExecutor {
                outcome: Ok(QueryResult {
                    records: vec![record(&[("pk", "u1"), ("age", "30")])],
                    scanned_count: 1,
                    consumed_capacity: None,
                }),
            },
            ActivityConfig::default(),
        );

        let outputs = activity.run(&sample_query()).await.unwrap();

        assert_eq!(
            outputs.result,
            Some(json!({ "results": [{ "pk": "u1", "age": "30" }] }))
        );
        assert_eq!(outputs.scanned_count, Some(1));
        assert_eq!(outputs.consumed_capacity, None);
    }

    #[tokio::test]
    async fn test_store_failure_leaves_outputs_unset_but_completes() {
        let activity = QueryActivity::new(
            FixedExecutor {
                outcome: Err(StorageError::QueryFailed("boom".to_string())),
            },
            ActivityConfig::default(),
        );

        let outputs = activity.run(&sample_query()).await.unwrap();

        assert_eq!(outputs, ActivityOutputs::default());
    }

    #[tokio::test]
    async fn test_strict_mode_propagates_store_failure() {
        let activity = QueryActivity::new(
            FixedExecutor {
                outcome: Err(StorageError::QueryFailed("boom".to_string())),
            },
            ActivityConfig {
                strict_errors: true,
                ..ActivityConfig::default()
            },
        );

        let result = activity.run(&sample_query()).await;

        assert_eq!(result, Err(StorageError::QueryFailed("boom".to_string())));
    }

    #[test]
    fn test_outputs_serialize_with_host_names() {
        let outputs = ActivityOutputs {
            result: Some(json!({ "results": [] })),
            scanned_count: Some(2),
            consumed_capacity: None,
        };

        assert_eq!(
            serde_json::to_value(&outputs).unwrap(),
            json!({ "result": { "results": [] }, "scannedCount": 2 })
        );
    }

    #[test]
    fn test_unset_outputs_are_omitted() {
        assert_eq!(
            serde_json::to_value(ActivityOutputs::default()).unwrap(),
            json!({})
        );
    }
}
