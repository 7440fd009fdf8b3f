use anyhow::Result;
use graphlink_operation::{Operation, Request};

use crate::{Link, ResponseStream};

/// Multi-result shape consumed by remote-schema components.
pub trait Observer: Send + Sync {
    fn observe(&self, request: Request) -> Result<ResponseStream>;
}

/// Adapts a [`Link`] to multi-result semantics: the transport stream is
/// returned untouched, so subscribers see every value in emission order
/// followed by the stream's own completion or error signal.
pub struct LinkObserver<L> {
    link: L,
}

impl<L> LinkObserver<L> {
    pub fn new(link: L) -> Self {
        Self { link }
    }
}

impl<L: Link> Observer for LinkObserver<L> {
    fn observe(&self, request: Request) -> Result<ResponseStream> {
        let operation = Operation::new(request)?;
        tracing::debug!(
            operation = operation.operation_name.as_deref().unwrap_or(""),
            "subscribe operation"
        );
        Ok(self.link.request(operation))
    }
}
