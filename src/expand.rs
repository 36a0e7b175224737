//! Rendering a parsed template into a concrete URL.

use crate::components::UrlComponents;
use crate::constants::{
    PATH_SEPARATOR, PLACEHOLDER_PREFIX, QUERY_ASSIGNMENT, QUERY_MARKER, QUERY_PAIR_SEPARATOR,
    SCHEME_SEPARATOR,
};
use crate::error::{ExpandError, VariableLocation};
use crate::query::{is_placeholder, split_pair};

impl UrlComponents {
    /// Renders the template, asking `lookup` for each placeholder's value.
    ///
    /// Path placeholders are looked up by segment name, query placeholders
    /// by their query key. Values are inserted as given, without encoding.
    /// Static query values and literal segments are copied verbatim.
    ///
    /// # Errors
    ///
    /// Returns `ExpandError::MissingVariable` for the first placeholder whose
    /// lookup yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use service_template::parse_url_template;
    ///
    /// let c = parse_url_template("/api/users/:userId?page=:page&sort=desc").unwrap();
    /// let url = c
    ///     .expand(|name| match name {
    ///         "userId" => Some("42".to_string()),
    ///         "page" => Some("3".to_string()),
    ///         _ => None,
    ///     })
    ///     .unwrap();
    /// assert_eq!(url, "/api/users/42?page=3&sort=desc");
    /// ```
    pub fn expand<F>(&self, lookup: F) -> Result<String, ExpandError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut url = String::with_capacity(self.as_str().len());

        if let (Some(scheme), Some(authority)) = (self.scheme(), self.authority()) {
            url.push_str(scheme);
            url.push_str(SCHEME_SEPARATOR);
            url.push_str(authority);
            // The authority ends at the first '/', so anything left is that slash.
            let prefix_len = scheme.len() + SCHEME_SEPARATOR.len() + authority.len();
            if self.as_str().len() > prefix_len {
                url.push(PATH_SEPARATOR);
            }
        }

        for (i, segment) in self.path_template().split(PATH_SEPARATOR).enumerate() {
            if i > 0 {
                url.push(PATH_SEPARATOR);
            }
            match segment.strip_prefix(PLACEHOLDER_PREFIX) {
                Some(name) => url.push_str(&resolve(&lookup, name, VariableLocation::Path)?),
                None => url.push_str(segment),
            }
        }

        if let Some(query) = self.query_template() {
            url.push(QUERY_MARKER);
            for (i, part) in query.split(QUERY_PAIR_SEPARATOR).enumerate() {
                if i > 0 {
                    url.push(QUERY_PAIR_SEPARATOR);
                }
                let (key, value) = split_pair(part);
                if key.is_empty() || !is_placeholder(value) {
                    url.push_str(part);
                    continue;
                }
                url.push_str(key);
                url.push(QUERY_ASSIGNMENT);
                url.push_str(&resolve(&lookup, key, VariableLocation::Query)?);
            }
        }

        Ok(url)
    }

    /// Renders the template from a slice of `(name, value)` pairs.
    ///
    /// # Errors
    ///
    /// See [`UrlComponents::expand`].
    ///
    /// # Examples
    ///
    /// ```
    /// use service_template::parse_url_template;
    ///
    /// let c = parse_url_template("https://[::1]:8080/items/:id").unwrap();
    /// assert_eq!(c.expand_with(&[("id", "7")]).unwrap(), "https://[::1]:8080/items/7");
    /// ```
    pub fn expand_with(&self, values: &[(&str, &str)]) -> Result<String, ExpandError> {
        self.expand(|name| {
            values
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| (*v).to_string())
        })
    }
}

fn resolve<F>(lookup: &F, name: &str, location: VariableLocation) -> Result<String, ExpandError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).ok_or_else(|| ExpandError::MissingVariable {
        name: name.to_string(),
        location,
    })
}
