#![forbid(unsafe_code)]

//! Adapts a pluggable GraphQL transport (a "link" that executes one
//! operation and yields a result stream) into the two callback shapes a
//! remote-schema consumer expects: a single-result [`Fetcher`] and a
//! multi-result [`Observer`].
//!
//! ```no_run
//! use graphlink::{Fetcher, LinkFetcher, Request};
//! # use graphlink::{Link, Operation, ResponseStream};
//! # struct HttpLink;
//! # impl Link for HttpLink {
//! #     fn request(&self, _operation: Operation) -> ResponseStream {
//! #         unimplemented!()
//! #     }
//! # }
//!
//! # async fn run() -> anyhow::Result<()> {
//! let fetcher = LinkFetcher::new(HttpLink);
//! let response = fetcher.fetch(Request::new("query Foo { bar }")).await?;
//! # Ok(())
//! # }
//! ```

pub use graphlink_bridge::{
    Fetcher, Link, LinkFetcher, LinkObserver, Observer, Response, ResponseStream, ServerError,
};
pub use graphlink_operation::{
    operation_name, print, Context, Operation, OperationError, Query, Request,
};
