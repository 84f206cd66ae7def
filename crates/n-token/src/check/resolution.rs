//! Alias resolution: every alias must land on a real token.

use crate::alias::{AliasMap, AliasRef};
use crate::config::TYPOGRAPHY_CATEGORY;
use crate::finding::{ErrorCode, ValidationError};
use crate::tree::{TokenNode, is_token_group, resolve_path};

/// Check every alias in the map against the token tree.
///
/// The alias map drives iteration, so findings come out in authored order:
///
/// 1. Color aliases (`category`, then token, then mode). A literal is
///    always [`ErrorCode::AliasRawValue`]; a path must resolve to a leaf
///    with a value, else [`ErrorCode::AliasMissing`].
/// 2. Aliases of `other_categories`, in that order. Paths must resolve to
///    a leaf with a value; a `type` path may also land on a token group.
///    Literals are left to [`super::check_literal_allow_list`].
#[must_use]
pub fn check_alias_resolution(
    root: &TokenNode,
    aliases: &AliasMap,
    other_categories: &[String],
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (category, tokens) in &aliases.color {
        for (token, modes) in tokens {
            for (mode, target) in modes {
                let name = format!("{category}.{token}.{mode}");
                match target {
                    AliasRef::Value { value } => errors.push(raw_color_value(&name, category, mode, value)),
                    AliasRef::Path { path } => {
                        if !resolves_to_value(root, path) {
                            errors.push(missing_target(&name, path));
                        }
                    }
                }
            }
        }
    }

    for category in other_categories {
        let Some(tokens) = aliases.category(category) else {
            continue;
        };
        for (token, target) in tokens {
            let AliasRef::Path { path } = target else {
                continue;
            };
            let accepted = resolves_to_value(root, path)
                || (category == TYPOGRAPHY_CATEGORY && resolve_path(root, path).is_some_and(is_token_group));
            if !accepted {
                errors.push(missing_target(&format!("{category}.{token}"), path));
            }
        }
    }

    tracing::debug!(findings = errors.len(), "alias resolution checked");
    errors
}

/// A leaf counts even when its `value` is `null`; only an absent key is missing.
fn resolves_to_value(root: &TokenNode, path: &str) -> bool {
    resolve_path(root, path).and_then(TokenNode::as_leaf).is_some()
}

fn raw_color_value(name: &str, category: &str, mode: &str, value: &str) -> ValidationError {
    ValidationError::new(
        ErrorCode::AliasRawValue,
        format!("Alias \"{name}\" uses the raw value \"{value}\" instead of a token path"),
        format!("Point the alias at a token under color.{category}.{mode} with {{ \"path\": ... }}; color aliases never accept literals."),
    )
}

fn missing_target(name: &str, path: &str) -> ValidationError {
    ValidationError::new(
        ErrorCode::AliasMissing,
        format!("Alias \"{name}\" points to \"{path}\", which is not a token with a value"),
        format!("Add \"{path}\" to the token source or point the alias at an existing token."),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
