#![forbid(unsafe_code)]

mod context;
mod error;
mod operation;
mod printer;
mod query;
mod request;

pub use context::Context;
pub use error::OperationError;
pub use operation::Operation;
pub use printer::print;
pub use query::{operation_name, Query};
pub use request::Request;
