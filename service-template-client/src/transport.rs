//! Transport abstraction for performing calls.

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::TransportError;
use crate::request::RequestInit;

/// A fully buffered HTTP response.
pub type Response = http::Response<Bytes>;

/// Sends a request and receives a response.
///
/// This is the only I/O seam of the crate. Implementations must be usable
/// from concurrent calls; the [`Service`](crate::Service) shares one
/// transport between every callable it creates and never mutates it.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use service_template_client::{RequestInit, Response, Transport, TransportError};
///
/// struct Echo;
///
/// #[async_trait]
/// impl Transport for Echo {
///     async fn send(&self, url: &str, _init: RequestInit) -> Result<Response, TransportError> {
///         Ok(http::Response::builder()
///             .header("content-type", "text/plain")
///             .body(bytes::Bytes::from(url.to_string()))?)
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs one call.
    ///
    /// # Arguments
    ///
    /// * `url` - The resolved request URL
    /// * `init` - Method, headers and body
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the call could not be completed. HTTP error
    /// statuses are responses, not errors.
    async fn send(&self, url: &str, init: RequestInit) -> Result<Response, TransportError>;
}

/// Transport backed by a shared `reqwest::Client`.
#[cfg(feature = "reqwest")]
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(feature = "reqwest")]
impl ReqwestTransport {
    /// Creates a transport with a default client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport from a configured client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "reqwest")]
#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, url: &str, init: RequestInit) -> Result<Response, TransportError> {
        let (method, headers, body) = init.into_parts();

        let mut request = self.client.request(method, url).headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let version = response.version();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        let mut converted = http::Response::builder()
            .status(status)
            .version(version)
            .body(body)?;
        *converted.headers_mut() = headers;
        Ok(converted)
    }
}
