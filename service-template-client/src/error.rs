//! Error types for service calls.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use service_template::{ExpandError, ParseError};

/// Error returned by a [`Transport`](crate::Transport).
pub type TransportError = Box<dyn Error + Send + Sync>;

/// Errors that can occur while building or invoking a service.
#[derive(Debug, Clone)]
pub enum ServiceError {
    /// The URL template given to a spec could not be parsed.
    InvalidTemplate(ParseError),
    /// A resolved URL could not be parsed.
    InvalidUrl(ParseError),
    /// A template placeholder had no value in the request payload.
    Expand(ExpandError),
    /// The request payload cannot supply template variables.
    InvalidPayload {
        /// Reason the payload was rejected
        reason: String,
    },
    /// A relative URL could not be joined onto the configured base URL.
    InvalidBaseUrl {
        /// The URL that failed to join
        url: String,
        /// Reason for the failure
        reason: String,
    },
    /// A request body could not be encoded.
    InvalidBody {
        /// Reason for the failure
        reason: String,
    },
    /// The transport failed to perform the call.
    Transport(Arc<dyn Error + Send + Sync>),
    /// The response has no content type and no custom transform was given.
    MissingContentType,
    /// The response body could not be decoded.
    Decode {
        /// Content type of the response, if any
        content_type: Option<String>,
        /// Reason decoding failed
        reason: String,
    },
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTemplate(e) => write!(f, "invalid URL template: {e}"),
            Self::InvalidUrl(e) => write!(f, "invalid request URL: {e}"),
            Self::Expand(e) => write!(f, "cannot expand URL template: {e}"),
            Self::InvalidPayload { reason } => {
                write!(f, "request payload cannot fill URL template: {reason}")
            }
            Self::InvalidBaseUrl { url, reason } => {
                write!(f, "cannot resolve '{url}' against the base URL: {reason}")
            }
            Self::InvalidBody { reason } => write!(f, "cannot encode request body: {reason}"),
            Self::Transport(e) => write!(f, "transport failed: {e}"),
            Self::MissingContentType => write!(
                f,
                "cannot determine the MIME type of the response; supply a custom transform"
            ),
            Self::Decode {
                content_type,
                reason,
            } => match content_type {
                Some(ct) => write!(f, "cannot decode '{ct}' response body: {reason}"),
                None => write!(f, "cannot decode response body: {reason}"),
            },
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidTemplate(e) | Self::InvalidUrl(e) => Some(e),
            Self::Expand(e) => Some(e),
            Self::Transport(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<ExpandError> for ServiceError {
    fn from(e: ExpandError) -> Self {
        Self::Expand(e)
    }
}

impl From<TransportError> for ServiceError {
    fn from(e: TransportError) -> Self {
        Self::Transport(Arc::from(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use service_template::parse_url_template;

    #[test]
    fn missing_content_type_message() {
        let msg = ServiceError::MissingContentType.to_string();
        assert!(msg.contains("custom transform"));
    }

    #[test]
    fn parse_error_is_source() {
        let err = parse_url_template("http://").unwrap_err();
        let service_err = ServiceError::InvalidUrl(err);
        assert!(service_err.source().is_some());
    }

    #[test]
    fn transport_error_converts() {
        let boxed: TransportError = "connection refused".into();
        let err = ServiceError::from(boxed);
        assert!(matches!(err, ServiceError::Transport(_)));
        assert_eq!(err.to_string(), "transport failed: connection refused");
    }
}
