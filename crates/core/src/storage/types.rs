use serde_json::{Map, Value};

/// One matched record, reduced to its JSON-safe scalar attributes.
pub type QueryRecord = Map<String, Value>;

/// Normalized outcome of a table query.
///
/// Records keep the store-returned order, which reflects the table's
/// key/sort order. Number attributes are carried as text so values beyond
/// double precision survive unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    /// Matched records, in store-returned order.
    pub records: Vec<QueryRecord>,
    /// Number of records the store examined. Filters reduce post-scan, so
    /// this can exceed the number of records returned.
    pub scanned_count: i64,
    /// Read capacity consumed by the query. Reserved: not populated yet.
    pub consumed_capacity: Option<Value>,
}

impl QueryResult {
    /// Wraps the records as the `{"results": [...]}` output object.
    pub fn result_value(&self) -> Value {
        let results = self.records.iter().cloned().map(Value::Object).collect();
        let mut output = Map::new();
        output.insert("results".to_string(), Value::Array(results));
        Value::Object(output)
    }
}
