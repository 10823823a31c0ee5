//! Retrieval of user records.
//!
//! [`UserSource`] decouples the report pipeline from the transport, so the
//! pipeline can be driven by canned records in tests and by
//! [`http::HttpUserSource`] in production.

pub mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::UserRecord;

pub use http::HttpUserSource;

/// Why a fetch produced no records.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The server answered with a 4xx or 5xx status.
    #[error("server returned HTTP status {0}")]
    HttpStatus(u16),

    /// The request never completed: connect, DNS, TLS, timeout or body read.
    #[error("network failure: {0}")]
    Network(String),

    /// The body was not a JSON array of objects.
    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

/// Something that can produce the full list of user records in one call.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Where the records come from, for display.
    fn describe(&self) -> &str;

    /// Fetch every record. No retries.
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError>;
}

/// Decode a response body into records.
pub fn decode_users(body: &[u8]) -> Result<Vec<UserRecord>, FetchError> {
    serde_json::from_slice(body).map_err(|e| FetchError::MalformedBody(e.to_string()))
}
