//! Parsed URL template descriptor.

use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, ParseErrorKind};
use crate::host::HostPort;
use crate::params::TemplateParams;
use crate::path::extract_path_variables;
use crate::query::extract_query_variables;
use crate::scanner::{self, ScannedTemplate};

/// Whether a template carries its own scheme and authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlKind {
    /// The template starts with `<scheme>://`.
    Absolute,
    /// Path and optional query only.
    Relative,
}

impl UrlKind {
    /// Returns the lowercase name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::Relative => "relative",
        }
    }
}

impl fmt::Display for UrlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The structured description of a URL template.
///
/// Produced by [`parse_url_template`]. Values are immutable; parsing the
/// same template twice yields equal descriptors.
///
/// # Structure
///
/// ```text
/// <scheme>://<host>[:<port>]/<path-template>[?<query-template>]
/// <path-template>[?<query-template>]
/// ```
///
/// Path segments of the form `:name` declare path variables. Query values of
/// the form `:name` declare dynamic query parameters; other values are static.
///
/// # Examples
///
/// ```
/// use service_template::{UrlComponents, UrlKind};
///
/// let c = UrlComponents::parse(
///     "https://api.example.com:8080/api/users/:userId?page=:page&sort=desc",
/// )
/// .unwrap();
/// assert_eq!(c.kind(), UrlKind::Absolute);
/// assert_eq!(c.scheme(), Some("https"));
/// assert_eq!(c.host(), Some("api.example.com"));
/// assert_eq!(c.port(), Some(8080));
/// assert_eq!(c.path_template(), "api/users/:userId");
/// assert_eq!(c.query_template(), Some("page=:page&sort=desc"));
/// assert!(c.has_path_variables());
/// assert!(c.has_query_params());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrlComponents {
    template: String,
    kind: UrlKind,
    scheme: Option<String>,
    authority: Option<String>,
    host: Option<String>,
    port: Option<u64>,
    path_template: String,
    path_variables: TemplateParams,
    query_template: Option<String>,
    query_params: TemplateParams,
}

/// Parses a URL template into its components.
///
/// # Errors
///
/// Returns `ParseError` with [`ParseErrorKind::MalformedAbsoluteUrl`] if the
/// template starts with `<scheme>://` but has an empty authority. Relative
/// templates never fail.
///
/// # Examples
///
/// ```
/// use service_template::parse_url_template;
///
/// let c = parse_url_template("/api/users/:userId?page=:page&sort=desc").unwrap();
/// assert_eq!(c.path_variables().names().collect::<Vec<_>>(), vec!["userId"]);
/// assert_eq!(c.query_params().get("sort"), Some("desc"));
///
/// assert!(parse_url_template("http://").is_err());
/// ```
pub fn parse_url_template(template: &str) -> Result<UrlComponents, ParseError> {
    UrlComponents::parse(template)
}

impl UrlComponents {
    /// Parses a URL template into its components.
    ///
    /// # Errors
    ///
    /// See [`parse_url_template`].
    pub fn parse(template: &str) -> Result<Self, ParseError> {
        tracing::trace!(template, "parsing URL template");

        let scanned = scanner::scan(template).map_err(|kind| {
            tracing::debug!(template, ?kind, "rejected URL template");
            ParseError::new(template, kind)
        })?;

        let host_port = scanned
            .prefix
            .map(|prefix| HostPort::split(prefix.authority));
        let path_variables = extract_path_variables(scanned.path);
        let query_params = extract_query_variables(scanned.query);

        Ok(Self::assemble(
            template,
            &scanned,
            host_port,
            path_variables,
            query_params,
        ))
    }

    fn assemble(
        template: &str,
        scanned: &ScannedTemplate<'_>,
        host_port: Option<HostPort>,
        path_variables: TemplateParams,
        query_params: TemplateParams,
    ) -> Self {
        let kind = if scanned.is_absolute() {
            UrlKind::Absolute
        } else {
            UrlKind::Relative
        };
        let (host, port) = match host_port.map(HostPort::into_parts) {
            Some((host, port)) => (Some(host), port),
            None => (None, None),
        };
        let query_template = if scanned.query.is_empty() {
            None
        } else {
            Some(scanned.query.to_string())
        };

        Self {
            template: template.to_string(),
            kind,
            scheme: scanned.prefix.map(|prefix| prefix.scheme.to_string()),
            authority: scanned.prefix.map(|prefix| prefix.authority.to_string()),
            host,
            port,
            path_template: scanned.path.to_string(),
            path_variables,
            query_template,
            query_params,
        }
    }

    /// Returns whether the template is absolute or relative.
    #[must_use]
    pub const fn kind(&self) -> UrlKind {
        self.kind
    }

    /// Returns true for absolute templates.
    #[must_use]
    pub const fn is_absolute(&self) -> bool {
        matches!(self.kind, UrlKind::Absolute)
    }

    /// Returns the scheme of an absolute template.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Returns the raw authority of an absolute template, exactly as written.
    #[must_use]
    pub fn authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    /// Returns the host of an absolute template, without any port.
    ///
    /// Bracketed IPv6 literals keep their brackets.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Returns the port, if the authority carried one.
    #[must_use]
    pub const fn port(&self) -> Option<u64> {
        self.port
    }

    /// Returns the raw path template.
    ///
    /// For absolute templates this excludes the slash that ends the
    /// authority. May be empty.
    #[must_use]
    pub fn path_template(&self) -> &str {
        &self.path_template
    }

    /// Returns the path variables in order of first appearance.
    #[must_use]
    pub const fn path_variables(&self) -> &TemplateParams {
        &self.path_variables
    }

    /// Returns the raw query template, if non-empty.
    #[must_use]
    pub fn query_template(&self) -> Option<&str> {
        self.query_template.as_deref()
    }

    /// Returns the query parameters in order of first appearance.
    ///
    /// Dynamic and valueless parameters map to `""`; static ones map to
    /// their literal value.
    #[must_use]
    pub const fn query_params(&self) -> &TemplateParams {
        &self.query_params
    }

    /// Returns true if the path declares at least one variable.
    #[must_use]
    pub fn has_path_variables(&self) -> bool {
        !self.path_variables.is_empty()
    }

    /// Returns true if the template has a non-empty query, whether or not
    /// any of its values are dynamic.
    #[must_use]
    pub const fn has_query_params(&self) -> bool {
        self.query_template.is_some()
    }

    /// Returns the original template text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.template
    }
}

impl fmt::Display for UrlComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

impl FromStr for UrlComponents {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for UrlComponents {
    fn as_ref(&self) -> &str {
        &self.template
    }
}

impl TryFrom<&str> for UrlComponents {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UrlComponents {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.template)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UrlComponents {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UrlKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_relative_template() {
        let c = parse_url_template("/api/users/:userId?page=:page&sort=desc").unwrap();

        assert_eq!(c.kind(), UrlKind::Relative);
        assert!(c.scheme().is_none());
        assert!(c.host().is_none());
        assert!(c.port().is_none());
        assert_eq!(c.path_template(), "/api/users/:userId");
        assert_eq!(c.path_variables().iter().collect::<Vec<_>>(), vec![("userId", "")]);
        assert_eq!(c.query_template(), Some("page=:page&sort=desc"));
        assert_eq!(
            c.query_params().iter().collect::<Vec<_>>(),
            vec![("page", ""), ("sort", "desc")]
        );
        assert!(c.has_path_variables());
        assert!(c.has_query_params());
    }

    #[test]
    fn parse_absolute_template() {
        let c = parse_url_template(
            "https://api.example.com:8080/api/users/:userId?page=:page&sort=desc",
        )
        .unwrap();

        assert_eq!(c.kind(), UrlKind::Absolute);
        assert_eq!(c.scheme(), Some("https"));
        assert_eq!(c.host(), Some("api.example.com"));
        assert_eq!(c.port(), Some(8080));
        assert_eq!(c.path_template(), "api/users/:userId");
        assert_eq!(c.path_variables().names().collect::<Vec<_>>(), vec!["userId"]);
        assert_eq!(c.query_template(), Some("page=:page&sort=desc"));
        assert_eq!(c.query_params().get("sort"), Some("desc"));
    }

    #[test]
    fn parse_ipv6_template() {
        let c = parse_url_template("https://[2001:db8::1]:8080/api/users/:userId").unwrap();

        assert_eq!(c.host(), Some("[2001:db8::1]"));
        assert_eq!(c.port(), Some(8080));
        assert!(c.query_template().is_none());
        assert!(!c.has_query_params());
    }

    #[test]
    fn parse_empty_template() {
        let c = parse_url_template("").unwrap();

        assert_eq!(c.kind(), UrlKind::Relative);
        assert_eq!(c.path_template(), "");
        assert!(c.path_variables().is_empty());
        assert!(!c.has_path_variables());
        assert!(c.query_template().is_none());
        assert!(!c.has_query_params());
    }

    #[test]
    fn parse_empty_authority_fails() {
        let result = parse_url_template("http://");
        assert!(matches!(
            result,
            Err(ParseError {
                kind: ParseErrorKind::MalformedAbsoluteUrl { .. },
                ..
            })
        ));
    }

    #[test]
    fn large_port_is_split_from_host() {
        let c = parse_url_template("http://host:99999999999/a").unwrap();
        assert_eq!(c.host(), Some("host"));
        assert_eq!(c.port(), Some(99_999_999_999));
        assert_eq!(c.authority(), Some("host:99999999999"));
    }

    #[test]
    fn components_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UrlComponents>();
        assert_send_sync::<TemplateParams>();
        assert_send_sync::<UrlKind>();
    }

    #[test]
    fn absolute_without_port_has_no_port() {
        let c = parse_url_template("http://example.com/a").unwrap();
        assert!(c.port().is_none());
    }

    #[test]
    fn static_only_query_still_has_query_params() {
        let c = parse_url_template("/list?sort=desc").unwrap();
        assert!(c.has_query_params());
        assert_eq!(c.query_params().get("sort"), Some("desc"));
    }

    #[test]
    fn empty_query_is_absent() {
        let c = parse_url_template("/list?").unwrap();
        assert!(c.query_template().is_none());
        assert!(!c.has_query_params());
    }

    #[test]
    fn parse_is_idempotent() {
        let template = "https://[::1]:80/a/:b?c=:c&d=e";
        assert_eq!(
            parse_url_template(template).unwrap(),
            parse_url_template(template).unwrap()
        );
    }

    #[test]
    fn display_roundtrip() {
        let template = "https://api.example.com/users/:id?x=1";
        let c: UrlComponents = template.parse().unwrap();
        assert_eq!(c.to_string(), template);
        assert_eq!(c.as_str(), template);
    }

    #[test]
    fn kind_display() {
        assert_eq!(UrlKind::Absolute.to_string(), "absolute");
        assert_eq!(UrlKind::Relative.to_string(), "relative");
    }
}
