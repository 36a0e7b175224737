//! Query variable extraction.

use crate::constants::{PLACEHOLDER_PREFIX, QUERY_ASSIGNMENT, QUERY_PAIR_SEPARATOR};
use crate::params::TemplateParams;

/// Classifies the `key=value` pairs of a query template.
///
/// A colon-prefixed value is dynamic and recorded as `""`. A missing or empty
/// value is recorded as `""` too, so `key=` and `key=:key` cannot be told
/// apart afterwards. Any other value is static and kept verbatim. Parts with
/// an empty key are skipped.
pub(crate) fn extract_query_variables(query: &str) -> TemplateParams {
    let mut params = TemplateParams::new();
    if query.is_empty() {
        return params;
    }

    for part in query.split(QUERY_PAIR_SEPARATOR) {
        let (key, value) = split_pair(part);
        if key.is_empty() {
            continue;
        }

        match value {
            Some(v) if !v.is_empty() && !v.starts_with(PLACEHOLDER_PREFIX) => {
                params.insert(key, v);
            }
            _ => params.insert(key, ""),
        }
    }

    params
}

/// Splits a query part into key and value.
///
/// The value stops at a second `=`, if any.
pub(crate) fn split_pair(part: &str) -> (&str, Option<&str>) {
    let mut pieces = part.split(QUERY_ASSIGNMENT);
    let key = pieces.next().unwrap_or_default();
    (key, pieces.next())
}

/// Returns true when a query value is a `:placeholder`.
pub(crate) fn is_placeholder(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.starts_with(PLACEHOLDER_PREFIX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty() {
        assert!(extract_query_variables("").is_empty());
    }

    #[test]
    fn classifies_dynamic_and_static() {
        let params = extract_query_variables("page=:page&sort=desc");
        let items: Vec<_> = params.iter().collect();
        assert_eq!(items, vec![("page", ""), ("sort", "desc")]);
    }

    #[test]
    fn key_without_value_is_placeholder() {
        let params = extract_query_variables("flag");
        assert_eq!(params.get("flag"), Some(""));
    }

    #[test]
    fn empty_value_matches_dynamic() {
        let explicit = extract_query_variables("key=");
        let dynamic = extract_query_variables("key=:key");
        assert_eq!(explicit, dynamic);
    }

    #[test]
    fn empty_key_is_skipped() {
        let params = extract_query_variables("=value&a=1");
        let items: Vec<_> = params.iter().collect();
        assert_eq!(items, vec![("a", "1")]);
    }

    #[test]
    fn empty_parts_are_skipped() {
        let params = extract_query_variables("a=1&&b=2&");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn duplicate_key_last_value_wins_in_place() {
        let params = extract_query_variables("a=1&b=:b&a=2");
        let items: Vec<_> = params.iter().collect();
        assert_eq!(items, vec![("a", "2"), ("b", "")]);
    }

    #[test]
    fn value_stops_at_second_assignment() {
        let params = extract_query_variables("filter=a=b");
        assert_eq!(params.get("filter"), Some("a"));
    }

    #[test]
    fn values_are_not_decoded() {
        let params = extract_query_variables("q=hello%20world");
        assert_eq!(params.get("q"), Some("hello%20world"));
    }

    #[test]
    fn split_pair_without_assignment() {
        assert_eq!(split_pair("flag"), ("flag", None));
        assert_eq!(split_pair("a=1"), ("a", Some("1")));
    }
}
