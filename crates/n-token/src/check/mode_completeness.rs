//! Light/dark symmetry of color categories.

use std::collections::BTreeSet;

use crate::check::list_or_none;
use crate::finding::{ErrorCode, ValidationError};
use crate::mode::Mode;
use crate::tree::{TokenNode, mode_keys};

/// One [`ErrorCode::ModeMissing`] per color category whose `light` and
/// `dark` key sets differ, however many keys differ.
///
/// Missing or non-group mode nodes count as empty. Output follows
/// `categories` order; the key lists in each suggestion are sorted.
#[must_use]
pub fn check_mode_completeness(root: &TokenNode, categories: &[String]) -> Vec<ValidationError> {
    let errors: Vec<_> = categories
        .iter()
        .filter_map(|category| {
            let light: BTreeSet<&str> = mode_keys(root, category, Mode::Light.as_str()).into_iter().collect();
            let dark: BTreeSet<&str> = mode_keys(root, category, Mode::Dark.as_str()).into_iter().collect();

            let missing_in_dark: Vec<&str> = light.difference(&dark).copied().collect();
            let missing_in_light: Vec<&str> = dark.difference(&light).copied().collect();
            if missing_in_dark.is_empty() && missing_in_light.is_empty() {
                return None;
            }

            Some(ValidationError::new(
                ErrorCode::ModeMissing,
                format!("Color category \"{category}\" does not define the same tokens in light and dark mode"),
                format!(
                    "Add the missing tokens under color.{category}. Missing in dark: {}. Missing in light: {}.",
                    list_or_none(&missing_in_dark),
                    list_or_none(&missing_in_light),
                ),
            ))
        })
        .collect();

    tracing::debug!(findings = errors.len(), "mode completeness checked");
    errors
}
