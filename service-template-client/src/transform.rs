//! Response transforms.

use std::sync::Arc;

use bytes::Bytes;
use futures::future::{self, BoxFuture, FutureExt};
use http::header::{CONTENT_TYPE, HeaderMap};
use serde::de::DeserializeOwned;

use crate::error::ServiceError;
use crate::transport::Response;

/// A function turning a response into the caller's result type.
pub type Transform<Res> =
    Arc<dyn Fn(Response) -> BoxFuture<'static, Result<Res, ServiceError>> + Send + Sync>;

/// MIME type prefixes decoded as binary.
const BINARY_MIME_PREFIXES: [&str; 3] = ["image/", "audio/", "video/"];

/// A response body decoded according to its content type.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// `application/json` body
    Json(serde_json::Value),
    /// `image/*`, `audio/*` or `video/*` body
    Blob {
        /// The MIME type of the body
        mime: String,
        /// The raw bytes
        data: Bytes,
    },
    /// Any other body, decoded as UTF-8 (invalid sequences replaced)
    Text(String),
}

impl Decoded {
    /// Returns the JSON value, if this is a JSON body.
    #[must_use]
    pub const fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the text, if this is a text body.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the bytes, if this is a binary body.
    #[must_use]
    pub const fn as_blob(&self) -> Option<&Bytes> {
        match self {
            Self::Blob { data, .. } => Some(data),
            _ => None,
        }
    }
}

/// Extracts the MIME type from the `content-type` header.
///
/// Parameters after `;` are dropped and the result is trimmed and
/// lowercased. Returns `None` if the header is absent, not valid text, or
/// empty.
///
/// # Examples
///
/// ```
/// use http::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
/// use service_template_client::extract_mime_type;
///
/// let mut headers = HeaderMap::new();
/// headers.insert(CONTENT_TYPE, HeaderValue::from_static("Application/JSON; charset=utf-8"));
/// assert_eq!(extract_mime_type(&headers).as_deref(), Some("application/json"));
/// ```
#[must_use]
pub fn extract_mime_type(headers: &HeaderMap) -> Option<String> {
    let content_type = headers.get(CONTENT_TYPE)?.to_str().ok()?;
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    if mime.is_empty() { None } else { Some(mime) }
}

/// Decodes a response according to its MIME type.
///
/// # Errors
///
/// Returns `ServiceError::MissingContentType` if the response declares no
/// content type, or `ServiceError::Decode` if a JSON body is invalid.
pub fn default_transform(response: Response) -> Result<Decoded, ServiceError> {
    let Some(mime) = extract_mime_type(response.headers()) else {
        return Err(ServiceError::MissingContentType);
    };
    let body = response.into_body();

    if mime == "application/json" {
        return serde_json::from_slice(&body)
            .map(Decoded::Json)
            .map_err(|e| ServiceError::Decode {
                content_type: Some(mime),
                reason: e.to_string(),
            });
    }

    if BINARY_MIME_PREFIXES
        .iter()
        .any(|prefix| mime.starts_with(prefix))
    {
        return Ok(Decoded::Blob { mime, data: body });
    }

    Ok(Decoded::Text(String::from_utf8_lossy(&body).into_owned()))
}

/// Deserializes a response body as JSON, ignoring its content type.
///
/// # Errors
///
/// Returns `ServiceError::Decode` if the body is not valid JSON for `T`.
pub fn json_transform<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    serde_json::from_slice(response.body()).map_err(|e| ServiceError::Decode {
        content_type: extract_mime_type(response.headers()),
        reason: e.to_string(),
    })
}

pub(crate) fn boxed_default() -> Transform<Decoded> {
    Arc::new(|response| future::ready(default_transform(response)).boxed())
}

pub(crate) fn boxed_json<T>() -> Transform<T>
where
    T: DeserializeOwned + Send + 'static,
{
    Arc::new(|response| future::ready(json_transform(response)).boxed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::HeaderValue;

    fn response(content_type: Option<&'static str>, body: &'static [u8]) -> Response {
        let mut builder = http::Response::builder();
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        builder.body(Bytes::from_static(body)).unwrap()
    }

    #[test]
    fn mime_strips_parameters() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/html; charset=utf-8"));
        assert_eq!(extract_mime_type(&headers).as_deref(), Some("text/html"));
    }

    #[test]
    fn mime_absent() {
        assert!(extract_mime_type(&HeaderMap::new()).is_none());
    }

    #[test]
    fn decodes_json() {
        let decoded = default_transform(response(Some("application/json"), br#"{"a":1}"#)).unwrap();
        assert_eq!(decoded, Decoded::Json(serde_json::json!({ "a": 1 })));
    }

    #[test]
    fn decodes_blob() {
        let decoded = default_transform(response(Some("image/png"), b"\x89PNG")).unwrap();
        assert_eq!(decoded.as_blob().map(Bytes::len), Some(4));
        assert!(matches!(decoded, Decoded::Blob { ref mime, .. } if mime == "image/png"));
    }

    #[test]
    fn decodes_other_as_text() {
        let decoded = default_transform(response(Some("text/plain"), b"hello")).unwrap();
        assert_eq!(decoded.as_text(), Some("hello"));

        let decoded = default_transform(response(Some("application/xml"), b"<a/>")).unwrap();
        assert_eq!(decoded.as_text(), Some("<a/>"));
    }

    #[test]
    fn missing_content_type_fails() {
        let result = default_transform(response(None, b"{}"));
        assert!(matches!(result, Err(ServiceError::MissingContentType)));
    }

    #[test]
    fn invalid_json_fails() {
        let result = default_transform(response(Some("application/json"), b"{"));
        assert!(matches!(result, Err(ServiceError::Decode { .. })));
    }

    #[test]
    fn json_transform_ignores_content_type() {
        #[derive(serde::Deserialize)]
        struct User {
            login: String,
        }

        let user: User = json_transform(response(None, br#"{"login":"ferris"}"#)).unwrap();
        assert_eq!(user.login, "ferris");
    }
}
