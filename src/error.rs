//! Error types for URL template parsing and expansion.

use std::fmt;

/// Errors that can occur when parsing a URL template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The template that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The template starts with `<scheme>://` but does not follow the
    /// `scheme://authority[/path][?query]` grammar.
    MalformedAbsoluteUrl {
        /// Why the template was rejected
        reason: &'static str,
    },
}

impl ParseError {
    pub(crate) fn new(input: &str, kind: ParseErrorKind) -> Self {
        Self {
            input: input.to_string(),
            kind,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse URL template '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::MalformedAbsoluteUrl { reason } => {
                write!(f, "malformed absolute URL: {reason}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Where a placeholder sits in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableLocation {
    /// A `:name` path segment
    Path,
    /// A `key=:placeholder` query assignment
    Query,
}

impl fmt::Display for VariableLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path => write!(f, "path"),
            Self::Query => write!(f, "query"),
        }
    }
}

/// Errors that can occur when expanding a parsed template into a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    /// No value was supplied for a placeholder.
    MissingVariable {
        /// The variable name (path segment name or query key)
        name: String,
        /// Where the placeholder appears
        location: VariableLocation,
    },
}

impl fmt::Display for ExpandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingVariable { name, location } => {
                write!(
                    f,
                    "no value supplied for {location} variable '{name}'; every placeholder must be given a value"
                )
            }
        }
    }
}

impl std::error::Error for ExpandError {}
