//! Alias coverage: every light-mode color token needs an alias.

use crate::alias::AliasMap;
use crate::finding::{ErrorCode, ValidationError};
use crate::mode::Mode;
use crate::tree::{TokenNode, mode_keys};

/// One [`ErrorCode::AliasValueMissing`] per color category that has
/// light-mode tokens without an alias of the same name. Missing names are
/// listed in source order.
#[must_use]
pub fn check_alias_coverage(
    root: &TokenNode,
    aliases: &AliasMap,
    categories: &[String],
) -> Vec<ValidationError> {
    let errors: Vec<_> = categories
        .iter()
        .filter_map(|category| {
            let aliased = aliases.color.get(category);
            let missing: Vec<&str> = mode_keys(root, category, Mode::Light.as_str())
                .into_iter()
                .filter(|key| !aliased.is_some_and(|tokens| tokens.contains_key(*key)))
                .collect();
            if missing.is_empty() {
                return None;
            }

            let missing = missing.join(", ");
            Some(ValidationError::new(
                ErrorCode::AliasValueMissing,
                format!("Color category \"{category}\" has tokens without an alias: {missing}"),
                format!("Add alias entries under color.{category} for: {missing}"),
            ))
        })
        .collect();

    tracing::debug!(findings = errors.len(), "alias coverage checked");
    errors
}
