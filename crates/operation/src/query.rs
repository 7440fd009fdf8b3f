use parser::types::{DocumentOperations, ExecutableDocument};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use value::Name;

use crate::{printer::print, OperationError};

/// A query that is either still raw text or already parsed.
#[derive(Debug, Clone)]
pub enum Query {
    Text(String),
    Document(ExecutableDocument),
}

impl Query {
    pub fn is_empty(&self) -> bool {
        match self {
            Query::Text(text) => text.trim().is_empty(),
            Query::Document(_) => false,
        }
    }

    /// Converts raw text into a parsed document; parsed queries pass through.
    pub fn parse(self) -> Result<ExecutableDocument, OperationError> {
        match self {
            Query::Text(text) => Ok(parser::parse_query(text)?),
            Query::Document(document) => Ok(document),
        }
    }

    pub fn as_document(&self) -> Option<&ExecutableDocument> {
        match self {
            Query::Text(_) => None,
            Query::Document(document) => Some(document),
        }
    }
}

impl From<&str> for Query {
    fn from(text: &str) -> Self {
        Query::Text(text.to_string())
    }
}

impl From<String> for Query {
    fn from(text: String) -> Self {
        Query::Text(text)
    }
}

impl From<ExecutableDocument> for Query {
    fn from(document: ExecutableDocument) -> Self {
        Query::Document(document)
    }
}

impl Serialize for Query {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Query::Text(text) => serializer.serialize_str(text),
            Query::Document(document) => serializer.serialize_str(&print(document)),
        }
    }
}

impl<'de> Deserialize<'de> for Query {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Query::Text(String::deserialize(deserializer)?))
    }
}

/// Best-effort name of the document's primary operation: the name of its
/// sole named operation, `None` for anonymous or ambiguous documents.
pub fn operation_name(document: &ExecutableDocument) -> Option<&Name> {
    match &document.operations {
        DocumentOperations::Single(_) => None,
        DocumentOperations::Multiple(operations) if operations.len() == 1 => {
            operations.keys().next()
        }
        DocumentOperations::Multiple(_) => None,
    }
}
