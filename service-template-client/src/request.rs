//! Request initialization options.

use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use http::Method;
use serde::Serialize;

use crate::error::ServiceError;

/// Method, headers and body of a request.
///
/// Defaults to a `GET` with no headers and no body.
///
/// # Examples
///
/// ```
/// use http::Method;
/// use service_template_client::RequestInit;
///
/// let init = RequestInit::new()
///     .with_method(Method::POST)
///     .with_json(&serde_json::json!({ "name": "Ferris" }))
///     .unwrap();
/// assert_eq!(init.method(), &Method::POST);
/// assert_eq!(init.headers()["content-type"], "application/json");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestInit {
    method: Method,
    headers: HeaderMap,
    body: Option<Bytes>,
}

impl RequestInit {
    /// Creates a `GET` request init.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the method.
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Appends a header.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Replaces all headers.
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Sets a raw body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets a JSON body and the `content-type: application/json` header.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::InvalidBody` if the value cannot be serialized.
    pub fn with_json<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self, ServiceError> {
        let body = serde_json::to_vec(value).map_err(|e| ServiceError::InvalidBody {
            reason: e.to_string(),
        })?;
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.body = Some(Bytes::from(body));
        Ok(self)
    }

    /// Returns the method.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the headers.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Adds every header from `defaults` whose name is not already set.
    pub(crate) fn merge_default_headers(&mut self, defaults: &HeaderMap) {
        for name in defaults.keys() {
            if !self.headers.contains_key(name) {
                for value in defaults.get_all(name) {
                    self.headers.append(name.clone(), value.clone());
                }
            }
        }
    }

    /// Splits into method, headers and body.
    #[must_use]
    pub fn into_parts(self) -> (Method, HeaderMap, Option<Bytes>) {
        (self.method, self.headers, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::{ACCEPT, AUTHORIZATION};

    #[test]
    fn defaults_to_get() {
        let init = RequestInit::new();
        assert_eq!(init.method(), &Method::GET);
        assert!(init.headers().is_empty());
        assert!(init.body().is_none());
    }

    #[test]
    fn json_sets_body_and_content_type() {
        let init = RequestInit::new()
            .with_method(Method::POST)
            .with_json(&serde_json::json!({ "age": 30 }))
            .unwrap();
        assert_eq!(init.body().unwrap().as_ref(), br#"{"age":30}"#);
        assert_eq!(init.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn merge_keeps_explicit_headers() {
        let mut defaults = HeaderMap::new();
        defaults.insert(ACCEPT, HeaderValue::from_static("text/plain"));
        defaults.insert(AUTHORIZATION, HeaderValue::from_static("Bearer t"));

        let mut init =
            RequestInit::new().with_header(ACCEPT, HeaderValue::from_static("application/json"));
        init.merge_default_headers(&defaults);

        assert_eq!(init.headers()[ACCEPT], "application/json");
        assert_eq!(init.headers()[AUTHORIZATION], "Bearer t");
    }
}
