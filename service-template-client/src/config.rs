//! Configuration for a [`Service`](crate::Service).

use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::Method;
use url::Url;

/// Settings shared by every callable a service creates.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL that relative request URLs are joined onto.
    ///
    /// When unset, relative URLs are handed to the transport unchanged.
    /// Default: None
    pub base_url: Option<Url>,

    /// Method used when a spec has no request init.
    ///
    /// Default: `GET`
    pub default_method: Method,

    /// Headers added to every request that does not already set them.
    ///
    /// Default: empty
    pub default_headers: HeaderMap,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            default_method: Method::GET,
            default_headers: HeaderMap::new(),
        }
    }
}

impl ServiceConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the default method.
    #[must_use]
    pub fn with_default_method(mut self, method: Method) -> Self {
        self.default_method = method;
        self
    }

    /// Adds a default header.
    #[must_use]
    pub fn with_default_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.default_headers.append(name, value);
        self
    }
}
