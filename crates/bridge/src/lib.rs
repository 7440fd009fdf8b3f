#![forbid(unsafe_code)]

mod fetcher;
mod link;
mod observer;
mod response;

pub use fetcher::{Fetcher, LinkFetcher};
pub use link::{Link, ResponseStream};
pub use observer::{LinkObserver, Observer};
pub use response::{Response, ServerError};
