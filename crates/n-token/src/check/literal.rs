//! Literal approval for non-color aliases.

use crate::alias::{AliasMap, AliasRef};
use crate::check::list_or_none;
use crate::config::LiteralAllowList;
use crate::finding::{ErrorCode, ValidationError};

/// One [`ErrorCode::AliasLiteralUnapproved`] per non-color literal alias
/// whose value is not on its category's allow-list.
///
/// Path aliases are ignored here. Color literals are reported by
/// [`super::check_alias_resolution`] and are not looked at either.
#[must_use]
pub fn check_literal_allow_list(
    aliases: &AliasMap,
    allow_list: &LiteralAllowList,
    other_categories: &[String],
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for category in other_categories {
        let Some(tokens) = aliases.category(category) else {
            continue;
        };
        for (token, target) in tokens {
            let AliasRef::Value { value } = target else {
                continue;
            };
            if allow_list.allows(category, value) {
                continue;
            }
            let approved = list_or_none(&allow_list.approved(category).collect::<Vec<_>>());
            errors.push(ValidationError::new(
                ErrorCode::AliasLiteralUnapproved,
                format!("Alias \"{category}.{token}\" uses the literal \"{value}\", which is not approved for {category}"),
                format!(
                    "Point the alias at a {category} token with {{ \"path\": ... }}, or add the literal to the {category} allow-list. Approved: {approved}."
                ),
            ));
        }
    }

    tracing::debug!(findings = errors.len(), "literal allow-list checked");
    errors
}
