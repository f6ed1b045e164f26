use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct QueryEnvelope {
    pub query: &'static str,
    pub variables: Map<String, Value>,
    pub operation_name: &'static str,
}

impl QueryEnvelope {
    pub fn new(operation_name: &'static str, query: &'static str) -> Self {
        Self {
            query,
            variables: Map::new(),
            operation_name,
        }
    }

    pub fn variable(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.variables.insert(name.to_owned(), value.into());
        self
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct GraphQLError {
    pub message: Option<String>,
    pub locations: Option<Vec<Location>>,
    pub path: Option<Vec<Value>>,
    pub extensions: Option<Value>,
}

impl GraphQLError {
    /// Reads one entry of an `errors` list, keeping entries of unexpected
    /// shape as their raw JSON text.
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_else(|_| Self {
            message: Some(value.to_string()),
            locations: None,
            path: None,
            extensions: None,
        })
    }
}

/// Reads the `errors` member of a response envelope. `None` when it is absent,
/// null or an empty list; anything else counts as an upstream failure.
pub fn errors(envelope: &Value) -> Option<Vec<GraphQLError>> {
    match envelope.get("errors")? {
        Value::Null => None,
        Value::Array(errors) if errors.is_empty() => None,
        Value::Array(errors) => Some(errors.iter().map(GraphQLError::from_value).collect()),
        other => Some(vec![GraphQLError::from_value(other)]),
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}
