//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use service_template::prelude::*;
//!
//! let c = parse_url_template("/users/:id").unwrap();
//! assert_eq!(c.kind(), UrlKind::Relative);
//! ```

pub use crate::{
    // Core types
    HostPort, TemplateParams, UrlComponents, UrlKind, parse_url_template,
    // Errors
    ExpandError, ParseError, ParseErrorKind, VariableLocation,
};
