//! Ordered name/value map for template variables.

use std::fmt;

/// Variables declared by a template, in order of first appearance.
///
/// Placeholders (dynamic values) are stored as empty strings. Static query
/// values keep their literal text. Inserting an existing name replaces its
/// value but keeps its original position.
///
/// # Examples
///
/// ```
/// use service_template::parse_url_template;
///
/// let components = parse_url_template("/items?page=:page&sort=desc").unwrap();
/// let params = components.query_params();
/// assert_eq!(params.get("page"), Some(""));
/// assert_eq!(params.get("sort"), Some("desc"));
/// assert_eq!(params.names().collect::<Vec<_>>(), vec!["page", "sort"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TemplateParams {
    entries: Vec<(String, String)>,
}

impl TemplateParams {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, overwriting in place if the name already exists.
    pub(crate) fn insert(&mut self, name: &str, value: &str) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => {
                existing.clear();
                existing.push_str(value);
            }
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }

    /// Returns the value for a name, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the name is declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns true if no variables are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of declared variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns an iterator over `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Returns an iterator over the names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

impl fmt::Display for TemplateParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value:?}")?;
        }
        f.write_str("}")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TemplateParams {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_preserves_order() {
        let mut params = TemplateParams::new();
        params.insert("b", "");
        params.insert("a", "1");
        assert_eq!(params.names().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn duplicate_overwrites_in_place() {
        let mut params = TemplateParams::new();
        params.insert("a", "1");
        params.insert("b", "2");
        params.insert("a", "3");
        let items: Vec<_> = params.iter().collect();
        assert_eq!(items, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn get_missing_returns_none() {
        let params = TemplateParams::new();
        assert!(params.get("x").is_none());
        assert!(!params.contains("x"));
        assert!(params.is_empty());
    }

    #[test]
    fn display_lists_entries() {
        let mut params = TemplateParams::new();
        params.insert("page", "");
        params.insert("sort", "desc");
        assert_eq!(params.to_string(), r#"{page: "", sort: "desc"}"#);
    }
}
