use std::collections::HashMap;

use parser::types::ExecutableDocument;
use serde::{Serialize, Serializer};
use value::{ConstValue, Variables};

use crate::{printer::print, query::operation_name, Context, OperationError, Query, Request};

/// A validated, normalized request whose query is guaranteed parsed, plus a
/// mutable [`Context`] cell that lives outside the serialized identity.
#[derive(Debug, Clone)]
pub struct Operation {
    pub query: ExecutableDocument,
    pub operation_name: Option<String>,
    pub variables: Variables,
    pub extensions: HashMap<String, ConstValue>,
    context: Context,
}

impl Operation {
    /// Runs the full pipeline: validate, parse, normalize, assemble.
    ///
    /// Validation runs first so an absent query surfaces as
    /// [`OperationError::MissingQuery`] rather than a syntax error.
    pub fn new(request: Request) -> Result<Self, OperationError> {
        request.validate()?;

        let Request {
            query,
            operation_name,
            variables,
            extensions,
            context,
        } = request;
        let document = query.parse()?;
        let operation_name =
            operation_name.or_else(|| operation_name_of(&document));

        Ok(Self {
            query: document,
            operation_name,
            variables,
            extensions,
            context: Context::new(context),
        })
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    /// Cache-style fingerprint: printed query text, JSON-serialized
    /// variables and operation name, joined with `|`.
    ///
    /// Known limitation: key stability assumes variables serialize with a
    /// consistent key order for equal logical values. `Variables` keeps
    /// insertion order, so logically equal maps built in different orders
    /// produce different keys.
    pub fn to_key(&self) -> String {
        format!(
            "{}|{}|{}",
            print(&self.query),
            serde_json::to_string(&self.variables).unwrap(),
            self.operation_name.as_deref().unwrap_or_default(),
        )
    }

    /// Structural view of the operation as a plain request.
    pub fn to_request(&self) -> Request {
        Request {
            query: Query::Document(self.query.clone()),
            operation_name: self.operation_name.clone(),
            variables: self.variables.clone(),
            extensions: self.extensions.clone(),
            context: self.context.snapshot(),
        }
    }
}

impl Serialize for Operation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_request().serialize(serializer)
    }
}

fn operation_name_of(document: &ExecutableDocument) -> Option<String> {
    operation_name(document).map(|name| name.to_string())
}
