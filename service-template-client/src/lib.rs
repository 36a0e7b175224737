//! Typed remote calls over colon-placeholder URL templates.
//!
//! A [`ServiceSpec`] describes a call: how to obtain its URL, how to build
//! the request, and how to turn the response into a result. A [`Service`]
//! turns specs into [`CallableService`]s that perform the call through an
//! injected [`Transport`].
//!
//! URLs can be literal, computed from the request payload, produced
//! asynchronously, or parsed from a template such as
//! `https://api.example.com/users/:userId?page=:page` and filled from the
//! payload's fields.
//!
//! # Quick Start
//!
//! ```
//! use async_trait::async_trait;
//! use serde::{Deserialize, Serialize};
//! use service_template_client::{
//!     RequestInit, Response, Service, ServiceSpec, Transport, TransportError,
//! };
//!
//! struct Canned;
//!
//! #[async_trait]
//! impl Transport for Canned {
//!     async fn send(&self, _url: &str, _init: RequestInit) -> Result<Response, TransportError> {
//!         Ok(http::Response::builder()
//!             .header("content-type", "application/json")
//!             .body(bytes::Bytes::from_static(br#"{"login":"ferris"}"#))?)
//!     }
//! }
//!
//! #[derive(Serialize)]
//! struct GetUser {
//!     name: String,
//! }
//!
//! #[derive(Deserialize)]
//! struct User {
//!     login: String,
//! }
//!
//! let service = Service::with_transport(Canned);
//! let get_user = service.create(
//!     ServiceSpec::<GetUser>::from_template("https://api.github.com/users/:name")
//!         .unwrap()
//!         .with_json::<User>(),
//! );
//!
//! let user = futures::executor::block_on(get_user.call(GetUser {
//!     name: "ferris".to_string(),
//! }))
//! .unwrap();
//! assert_eq!(user.login, "ferris");
//! ```
//!
//! # Features
//!
//! - `reqwest` (default): [`ReqwestTransport`] and [`Service::new`]

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod config;
mod error;
mod initializer;
mod request;
mod service;
mod spec;
mod transform;
mod transport;

pub use config::ServiceConfig;
pub use error::{ServiceError, TransportError};
pub use initializer::Initializer;
pub use request::RequestInit;
pub use service::{CallableService, Service};
pub use spec::ServiceSpec;
pub use transform::{Decoded, Transform, default_transform, extract_mime_type, json_transform};
#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;
pub use transport::{Response, Transport};

pub use service_template::{UrlComponents, parse_url_template};
