//! Splits a raw template into scheme, authority, path and query substrings.
//!
//! # Grammar
//!
//! ```text
//! absolute = scheme "://" authority [ "/" path ] [ "?" query ]
//! scheme   = 1*ALPHA
//! authority = 1*( any char except "/" )
//! path     = *( any char except "?" )
//! query    = *( any char )
//!
//! relative = path [ "?" query ]
//! ```
//!
//! The authority runs up to the first `/`, so a `?` that appears before any
//! slash stays part of the authority.

use crate::constants::{PATH_SEPARATOR, QUERY_MARKER, SCHEME_SEPARATOR};
use crate::error::ParseErrorKind;

/// Scheme and authority of an absolute template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AbsolutePrefix<'a> {
    pub(crate) scheme: &'a str,
    pub(crate) authority: &'a str,
}

/// The substrings of a template, borrowed from the input.
///
/// `path` and `query` are empty when the template has no such part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScannedTemplate<'a> {
    pub(crate) prefix: Option<AbsolutePrefix<'a>>,
    pub(crate) path: &'a str,
    pub(crate) query: &'a str,
}

impl ScannedTemplate<'_> {
    pub(crate) const fn is_absolute(&self) -> bool {
        self.prefix.is_some()
    }
}

/// Scans a template.
///
/// Relative templates always scan successfully. An absolute template with an
/// empty authority is rejected.
pub(crate) fn scan(template: &str) -> Result<ScannedTemplate<'_>, ParseErrorKind> {
    let Some((scheme, rest)) = split_scheme(template) else {
        let (path, query) = split_query(template);
        return Ok(ScannedTemplate {
            prefix: None,
            path,
            query,
        });
    };

    let (authority, path_and_query) = match rest.find(PATH_SEPARATOR) {
        Some(slash_idx) => (&rest[..slash_idx], Some(&rest[slash_idx + 1..])),
        None => (rest, None),
    };

    if authority.is_empty() {
        return Err(ParseErrorKind::MalformedAbsoluteUrl {
            reason: "authority after '://' is empty",
        });
    }

    let (path, query) = path_and_query.map_or(("", ""), split_query);

    Ok(ScannedTemplate {
        prefix: Some(AbsolutePrefix { scheme, authority }),
        path,
        query,
    })
}

/// Returns `(scheme, rest)` when the template starts with `<letters>://`.
fn split_scheme(template: &str) -> Option<(&str, &str)> {
    let letters = template
        .bytes()
        .take_while(u8::is_ascii_alphabetic)
        .count();
    if letters == 0 {
        return None;
    }
    template[letters..]
        .strip_prefix(SCHEME_SEPARATOR)
        .map(|rest| (&template[..letters], rest))
}

fn split_query(input: &str) -> (&str, &str) {
    input.split_once(QUERY_MARKER).unwrap_or((input, ""))
}
