use anyhow::Result;
use futures_util::StreamExt;
use graphlink_operation::{Operation, Request};

use crate::{Link, Response, ResponseStream};

/// Single-result shape consumed by remote-schema components.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, request: Request) -> Result<Response>;
}

/// Adapts a [`Link`] to single-result semantics: `fetch` resolves with the
/// first result the transport emits.
///
/// The transport behind a fetcher is expected to be single-result; rather
/// than failing, extra results are drained on a background Tokio task and
/// logged. Multi-result transports belong on the observer path. A transport
/// stream that never emits and never ends leaves the returned future
/// pending; timeouts are the caller's concern.
pub struct LinkFetcher<L> {
    link: L,
}

impl<L> LinkFetcher<L> {
    pub fn new(link: L) -> Self {
        Self { link }
    }
}

#[async_trait::async_trait]
impl<L: Link> Fetcher for LinkFetcher<L> {
    async fn fetch(&self, request: Request) -> Result<Response> {
        let operation = Operation::new(request)?;
        tracing::debug!(
            operation = operation.operation_name.as_deref().unwrap_or(""),
            "submit operation"
        );

        let mut stream = self.link.request(operation);
        match stream.next().await {
            Some(Ok(response)) => {
                tokio::spawn(drain(stream));
                Ok(response)
            }
            Some(Err(err)) => Err(err),
            None => Err(anyhow::anyhow!(
                "transport stream completed without a result"
            )),
        }
    }
}

async fn drain(mut stream: ResponseStream) {
    while let Some(result) = stream.next().await {
        match result {
            Ok(_) => {
                tracing::warn!("single-result fetch received an extra result; discarded")
            }
            Err(err) => tracing::debug!(error = %err, "transport error after first result"),
        }
    }
}
