//! Producer side of the screen: fetches items and reports outcomes.

pub mod error;
pub mod http;
pub mod record;
pub mod worker;

use async_trait::async_trait;

use crate::model::Item;

pub use error::{FailureKind, FetchError};
pub use http::HttpSource;
pub use worker::FetchWorker;

/// Something that can produce the full item list.
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// Fetch every item, in display order.
    async fn fetch(&self) -> Result<Vec<Item>, FetchError>;
}
