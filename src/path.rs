//! Path variable extraction.

use crate::constants::{PATH_SEPARATOR, PLACEHOLDER_PREFIX};
use crate::params::TemplateParams;

/// Collects the names of `:name` segments in a path template.
///
/// Literal segments are skipped. A bare `:` segment declares a variable with
/// an empty name.
pub(crate) fn extract_path_variables(path: &str) -> TemplateParams {
    let mut variables = TemplateParams::new();

    for segment in path.split(PATH_SEPARATOR) {
        if let Some(name) = segment.strip_prefix(PLACEHOLDER_PREFIX) {
            variables.insert(name, "");
        }
    }

    variables
}
