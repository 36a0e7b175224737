//! Host and port splitting for template authorities.
//!
//! # Grammar
//!
//! ```text
//! authority    = ip-literal [ ":" port ] / reg-host [ ":" port ]
//! ip-literal   = "[" 1*( any char except "]" ) "]"
//! reg-host     = 1*( any char except ":" )
//! port         = 1*DIGIT
//! ```
//!
//! An authority matching neither form is kept verbatim as the host.

use std::fmt;

/// A host with its optional port, split from an authority.
///
/// Bracketed IPv6 literals keep their brackets. The port is only present
/// when the authority carried a trailing `:<digits>`.
///
/// # Examples
///
/// ```
/// use service_template::HostPort;
///
/// let hp = HostPort::split("[2001:db8::1]:8080");
/// assert_eq!(hp.host(), "[2001:db8::1]");
/// assert_eq!(hp.port(), Some(8080));
///
/// let hp = HostPort::split("api.example.com");
/// assert_eq!(hp.host(), "api.example.com");
/// assert_eq!(hp.port(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostPort {
    host: String,
    port: Option<u64>,
}

impl HostPort {
    /// Splits an authority into host and port.
    ///
    /// Never fails: an authority that does not follow the grammar is returned
    /// unchanged as the host, without a port.
    #[must_use]
    pub fn split(authority: &str) -> Self {
        let parsed = if authority.starts_with('[') {
            Self::split_ip_literal(authority)
        } else {
            Self::split_reg_host(authority)
        };

        parsed.unwrap_or_else(|| Self {
            host: authority.to_string(),
            port: None,
        })
    }

    /// Returns the host, including brackets for IPv6 literals.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port, if the authority carried one.
    #[must_use]
    pub const fn port(&self) -> Option<u64> {
        self.port
    }

    pub(crate) fn into_parts(self) -> (String, Option<u64>) {
        (self.host, self.port)
    }

    fn split_ip_literal(authority: &str) -> Option<Self> {
        let inner_and_rest = &authority[1..];
        let closing_bracket = inner_and_rest.find(']')?;
        if closing_bracket == 0 {
            return None;
        }

        let port = Self::parse_port_suffix(&inner_and_rest[closing_bracket + 1..])?;
        // Includes both brackets.
        let host = &authority[..closing_bracket + 2];

        Some(Self {
            host: host.to_string(),
            port,
        })
    }

    fn split_reg_host(authority: &str) -> Option<Self> {
        let (host, suffix) = match authority.find(':') {
            Some(colon_idx) => (&authority[..colon_idx], &authority[colon_idx..]),
            None => (authority, ""),
        };
        if host.is_empty() {
            return None;
        }

        let port = Self::parse_port_suffix(suffix)?;

        Some(Self {
            host: host.to_string(),
            port,
        })
    }

    /// Parses `""` or `":<digits>"`. Returns `None` when the suffix does not
    /// match, `Some(None)` when there is no port.
    fn parse_port_suffix(suffix: &str) -> Option<Option<u64>> {
        if suffix.is_empty() {
            return Some(None);
        }

        let digits = suffix.strip_prefix(':')?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        // Digit runs past `u64::MAX` saturate.
        Some(Some(digits.parse::<u64>().unwrap_or(u64::MAX)))
    }
}

impl fmt::Display for HostPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}:{port}", self.host),
            None => write!(f, "{}", self.host),
        }
    }
}
