use std::sync::Arc;

use anyhow::Result;
use futures_util::stream::BoxStream;
use graphlink_operation::Operation;

use crate::Response;

/// Results of one executed operation: zero or more responses, an `Err` item
/// as the terminal error signal, stream end as completion.
pub type ResponseStream = BoxStream<'static, Result<Response>>;

/// Pluggable transport that executes one operation at a time.
///
/// Work starts when the returned stream is polled; dropping the stream is
/// the unsubscription path and stops further delivery, though transport-side
/// work already in flight may still run to completion.
pub trait Link: Send + Sync {
    fn request(&self, operation: Operation) -> ResponseStream;
}

impl<L: Link + ?Sized> Link for Arc<L> {
    fn request(&self, operation: Operation) -> ResponseStream {
        (**self).request(operation)
    }
}

impl<L: Link + ?Sized> Link for Box<L> {
    fn request(&self, operation: Operation) -> ResponseStream {
        (**self).request(operation)
    }
}
