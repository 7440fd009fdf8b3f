use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use value::{ConstValue, Variables};

use crate::{query::operation_name, OperationError, Query};

const REQUEST_FIELDS: &[&str] = &["query", "operationName", "variables", "extensions", "context"];

/// A raw request as supplied by the caller, before it becomes an
/// [`Operation`](crate::Operation).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Request {
    pub query: Query,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub operation_name: Option<String>,

    #[serde(skip_serializing_if = "variables_is_empty", default)]
    pub variables: Variables,

    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub extensions: HashMap<String, ConstValue>,

    #[serde(skip_serializing, default)]
    pub context: HashMap<String, ConstValue>,
}

impl Request {
    pub fn new(query: impl Into<Query>) -> Self {
        Self {
            query: query.into(),
            operation_name: None,
            variables: Default::default(),
            extensions: Default::default(),
            context: Default::default(),
        }
    }

    pub fn operation(self, operation: impl Into<String>) -> Self {
        Self {
            operation_name: Some(operation.into()),
            ..self
        }
    }

    pub fn variables(self, variables: Variables) -> Self {
        Self { variables, ..self }
    }

    pub fn extensions(self, extensions: HashMap<String, ConstValue>) -> Self {
        Self { extensions, ..self }
    }

    pub fn context(self, context: HashMap<String, ConstValue>) -> Self {
        Self { context, ..self }
    }

    /// Builds a request from an untyped JSON body.
    ///
    /// This is the only path on which unrecognized fields are representable;
    /// they are rejected before deserialization so the offending field can
    /// be named in the error.
    pub fn from_value(value: serde_json::Value) -> Result<Self, OperationError> {
        let object = match value.as_object() {
            Some(object) => object,
            None => return Err(OperationError::MissingQuery),
        };
        if !object.contains_key("query") {
            return Err(OperationError::MissingQuery);
        }
        for field in object.keys() {
            if !REQUEST_FIELDS.contains(&field.as_str()) {
                return Err(OperationError::IllegalField {
                    name: field.clone(),
                });
            }
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Pure check: the query must be present and non-empty.
    pub fn validate(&self) -> Result<(), OperationError> {
        if self.query.is_empty() {
            return Err(OperationError::MissingQuery);
        }
        Ok(())
    }

    /// Fills the best-effort operation name for already-parsed queries.
    ///
    /// Raw text keeps `None`; deriving a name from unparsed text belongs to
    /// the parser, not this layer.
    pub fn normalize(mut self) -> Self {
        if self.operation_name.is_none() {
            if let Some(document) = self.query.as_document() {
                self.operation_name = operation_name(document).map(|name| name.to_string());
            }
        }
        self
    }
}

#[inline]
fn variables_is_empty(variables: &Variables) -> bool {
    variables.is_empty()
}
