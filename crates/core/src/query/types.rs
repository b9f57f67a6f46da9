use serde::{Deserialize, Serialize};

use super::ValidationError;

/// One placeholder substitution for a query expression.
///
/// The wire form is a JSON object with `Name`/`Value` keys; lower-case keys
/// are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionAttribute {
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
    #[serde(rename = "Value", alias = "value")]
    pub value: String,
}

impl ExpressionAttribute {
    /// Creates a new substitution pair.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Validated parameters for a single table query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    table_name: String,
    key_condition_expression: String,
    filter_expression: Option<String>,
    attributes: Vec<ExpressionAttribute>,
}

impl TableQuery {
    /// Creates a new query, validating required fields once at the boundary.
    ///
    /// An empty filter expression means "no filter": it is stored as `None`
    /// so the built request omits the field entirely. Sending an empty
    /// string instead is a different, invalid request shape.
    pub fn new(
        table_name: impl Into<String>,
        key_condition_expression: impl Into<String>,
        filter_expression: impl Into<String>,
        attributes: Vec<ExpressionAttribute>,
    ) -> Result<Self, ValidationError> {
        let table_name = table_name.into();
        if table_name.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: "table name",
            });
        }

        let key_condition_expression = key_condition_expression.into();
        if key_condition_expression.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: "key condition expression",
            });
        }

        let filter_expression = filter_expression.into();
        let filter_expression = if filter_expression.is_empty() {
            None
        } else {
            Some(filter_expression)
        };

        Ok(Self {
            table_name,
            key_condition_expression,
            filter_expression,
            attributes,
        })
    }

    /// The table to query.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// The key condition expression with placeholder tokens.
    pub fn key_condition_expression(&self) -> &str {
        &self.key_condition_expression
    }

    /// The post-key filter, if one applies.
    pub fn filter_expression(&self) -> Option<&str> {
        self.filter_expression.as_deref()
    }

    /// The placeholder substitutions, in input order.
    pub fn attributes(&self) -> &[ExpressionAttribute] {
        &self.attributes
    }
}
