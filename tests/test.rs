use std::sync::{Arc, Mutex};

use futures_util::StreamExt;
use graphlink::{
    Fetcher, Link, LinkFetcher, LinkObserver, Observer, Operation, Request, Response,
    ResponseStream,
};
use serde_json::json;

/// Emits the responses of a fixed script and records every submitted
/// operation.
struct ScriptedLink {
    script: Vec<Result<serde_json::Value, String>>,
    operations: Mutex<Vec<Operation>>,
}

impl ScriptedLink {
    fn new(script: Vec<Result<serde_json::Value, String>>) -> Arc<Self> {
        Arc::new(Self {
            script,
            operations: Mutex::new(Vec::new()),
        })
    }

    fn submitted(&self) -> Vec<Operation> {
        self.operations.lock().unwrap().clone()
    }
}

impl Link for ScriptedLink {
    fn request(&self, operation: Operation) -> ResponseStream {
        self.operations.lock().unwrap().push(operation);
        let script = self.script.clone();
        Box::pin(async_stream::stream! {
            for item in script {
                match item {
                    Ok(data) => yield Ok(Response::new(value::to_value(data).unwrap())),
                    Err(message) => yield Err(anyhow::anyhow!(message)),
                }
            }
        })
    }
}

#[tokio::test]
async fn fetch_resolves_with_the_first_emitted_result() {
    let link = ScriptedLink::new(vec![Ok(json!({ "bar": 1 }))]);
    let fetcher = LinkFetcher::new(link.clone());

    let response = fetcher
        .fetch(Request::new("query Foo { bar }"))
        .await
        .unwrap();
    assert_eq!(response.data, value::to_value(json!({ "bar": 1 })).unwrap());

    let submitted = link.submitted();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].operation_name.as_deref(), Some("Foo"));
    assert!(submitted[0].variables.is_empty());
    assert!(submitted[0].extensions.is_empty());
}

#[tokio::test]
async fn fetch_ignores_results_after_the_first() {
    let link = ScriptedLink::new(vec![Ok(json!({ "bar": 1 })), Ok(json!({ "bar": 2 }))]);
    let fetcher = LinkFetcher::new(link.clone());

    let response = fetcher
        .fetch(Request::new("query Foo { bar }"))
        .await
        .unwrap();
    assert_eq!(response.data, value::to_value(json!({ "bar": 1 })).unwrap());
    assert_eq!(link.submitted().len(), 1);
}

#[tokio::test]
async fn transport_error_reaches_both_adapters() {
    let link = ScriptedLink::new(vec![Err("NetworkError".to_string())]);

    let err = LinkFetcher::new(link.clone())
        .fetch(Request::new("query Foo { bar }"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "NetworkError");

    let mut stream = LinkObserver::new(link)
        .observe(Request::new("query Foo { bar }"))
        .unwrap();
    let err = stream.next().await.unwrap().unwrap_err();
    assert_eq!(err.to_string(), "NetworkError");
}

#[tokio::test]
async fn observe_passes_the_stream_through() {
    let link = ScriptedLink::new(vec![Ok(json!({ "n": 1 })), Ok(json!({ "n": 2 }))]);
    let observer = LinkObserver::new(link);

    let stream = observer
        .observe(Request::new("subscription { n }"))
        .unwrap();
    let results = stream
        .map(|item| item.unwrap().data)
        .collect::<Vec<_>>()
        .await;
    assert_eq!(
        results,
        vec![
            value::to_value(json!({ "n": 1 })).unwrap(),
            value::to_value(json!({ "n": 2 })).unwrap(),
        ]
    );
}

#[tokio::test]
async fn untyped_request_bodies_go_through_the_same_pipeline() {
    let link = ScriptedLink::new(vec![Ok(json!({ "bar": 1 }))]);
    let fetcher = LinkFetcher::new(link.clone());

    let request = Request::from_value(json!({
        "query": "query Foo { bar }",
        "variables": { "id": 7 },
    }))
    .unwrap();
    fetcher.fetch(request).await.unwrap();

    let submitted = link.submitted();
    assert_eq!(submitted[0].operation_name.as_deref(), Some("Foo"));
    assert_eq!(
        serde_json::to_string(&submitted[0].variables).unwrap(),
        r#"{"id":7}"#
    );
}

#[tokio::test]
async fn identical_calls_share_a_fingerprint() {
    let link = ScriptedLink::new(vec![Ok(json!({ "bar": 1 }))]);
    let fetcher = LinkFetcher::new(link.clone());

    for _ in 0..2 {
        fetcher
            .fetch(Request::new("query Foo { bar }"))
            .await
            .unwrap();
    }

    let submitted = link.submitted();
    assert_eq!(submitted[0].to_key(), submitted[1].to_key());
    assert_eq!(submitted[0].to_key(), "query Foo { bar }|{}|Foo");
}
