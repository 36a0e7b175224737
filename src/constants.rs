//! Delimiters of the URL template grammar.

/// Separator between the scheme and the authority of an absolute template.
pub const SCHEME_SEPARATOR: &str = "://";

/// Prefix marking a path segment or query value as a placeholder.
pub const PLACEHOLDER_PREFIX: char = ':';

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '/';

/// Marker introducing the query part of a template.
pub const QUERY_MARKER: char = '?';

/// Separator between query pairs.
pub const QUERY_PAIR_SEPARATOR: char = '&';

/// Separator between a query key and its value.
pub const QUERY_ASSIGNMENT: char = '=';
