//! reqwest-backed [`UserSource`].

use std::error::Error as _;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use super::{FetchError, UserSource, decode_users};
use crate::constants::{REQUEST_TIMEOUT, user_agent};
use crate::models::UserRecord;

/// Issues a single GET against a users endpoint.
pub struct HttpUserSource {
    http: Client,
    url: String,
    timeout: Duration,
}

impl HttpUserSource {
    /// Source for `url` with the standard request timeout.
    pub fn new(url: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_timeout(url, REQUEST_TIMEOUT)
    }

    /// Source for `url` with a custom timeout covering connect through body.
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent())
            .build()
            .map_err(|e| FetchError::Network(describe_error(&e)))?;

        Ok(Self {
            http,
            url: url.into(),
            timeout,
        })
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    fn describe(&self) -> &str {
        &self.url
    }

    async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError> {
        debug!(url = %self.url, timeout = ?self.timeout, "sending request");

        let response = self.http.get(&self.url).send().await.map_err(|e| {
            debug!(url = %self.url, timed_out = e.is_timeout(), "request failed");
            FetchError::Network(describe_error(&e))
        })?;

        let status = response.status();
        debug!(status = status.as_u16(), "received response");

        if status.is_client_error() || status.is_server_error() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(describe_error(&e)))?;

        let users = decode_users(&body)?;
        info!(count = users.len(), "decoded user records");
        Ok(users)
    }
}

/// Flatten a reqwest error and its sources into one line.
///
/// reqwest's own message is only "error sending request for url (...)"; the
/// actual cause (refused, DNS, timeout) lives further down the chain.
fn describe_error(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
