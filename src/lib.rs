//! Parser for colon-placeholder URL templates.
//!
//! This crate decomposes URL templates such as
//! `https://api.example.com:8080/users/:userId?page=:page&sort=desc` into a
//! structured description of their scheme, host, port, path template, path
//! variables, query template and query parameters. It is the parsing core
//! used by `service-template-client` to build typed remote-call functions.
//!
//! # Overview
//!
//! Templates are either absolute or relative:
//!
//! ```text
//! <scheme>://<host>[:<port>][/<path>][?<query>]
//! <path>[?<query>]
//! ```
//!
//! - A path segment `:name` declares the path variable `name`.
//! - A query pair `key=:name` declares the dynamic query parameter `key`.
//! - A query pair `key=value` declares a static query parameter.
//!
//! # Quick Start
//!
//! ```rust
//! use service_template::{parse_url_template, UrlKind};
//!
//! let c = parse_url_template("/api/users/:userId?page=:page&sort=desc").unwrap();
//!
//! assert_eq!(c.kind(), UrlKind::Relative);
//! assert_eq!(c.path_template(), "/api/users/:userId");
//! assert_eq!(c.path_variables().names().collect::<Vec<_>>(), vec!["userId"]);
//! assert_eq!(c.query_params().get("page"), Some(""));
//! assert_eq!(c.query_params().get("sort"), Some("desc"));
//!
//! // Fill the placeholders in
//! let url = c.expand_with(&[("userId", "42"), ("page", "1")]).unwrap();
//! assert_eq!(url, "/api/users/42?page=1&sort=desc");
//! ```
//!
//! # Leniency
//!
//! The parser does not validate hosts, ports or values. An authority that is
//! neither `host[:port]` nor `[ipv6][:port]` is kept verbatim as the host.
//! The only rejected input is an absolute template with an empty authority.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod components;
mod constants;
mod error;
mod expand;
mod host;
mod params;
mod path;
pub mod prelude;
mod query;
mod scanner;

pub use components::{UrlComponents, UrlKind, parse_url_template};
pub use constants::{
    PATH_SEPARATOR, PLACEHOLDER_PREFIX, QUERY_ASSIGNMENT, QUERY_MARKER, QUERY_PAIR_SEPARATOR,
    SCHEME_SEPARATOR,
};
pub use error::{ExpandError, ParseError, ParseErrorKind, VariableLocation};
pub use host::HostPort;
pub use params::TemplateParams;
