//! The validation entry points.
//!
//! ```text
//! SourceLocation ──load──▶ TokenNode ─┐
//!                                      ├─▶ mode completeness
//!             AliasMap ───────────────┤   alias resolution
//!                                      │   literal allow-list
//!      ValidatorConfig ───────────────┤   alias coverage
//!                                      └─▶ contrast ──▶ ValidationReport
//! ```
//!
//! Checks always run in that order and their findings are concatenated
//! unchanged, so two runs over the same inputs produce identical reports.

use crate::alias::AliasMap;
use crate::check::{
    check_alias_coverage, check_alias_resolution, check_contrast, check_literal_allow_list,
    check_mode_completeness,
};
use crate::config::ValidatorConfig;
use crate::error::LoadError;
use crate::report::ValidationReport;
use crate::source::{SourceLocation, load_token_tree};
use crate::tree::TokenNode;

/// Load the token source and validate it against `aliases`.
///
/// The token source is read fresh on every call. Failing to load it is an
/// error; problems in its content are findings in the report.
///
/// # Errors
///
/// Any [`LoadError`] from resolving or loading the token source.
pub fn validate_tokens(
    source: &SourceLocation,
    aliases: &AliasMap,
    config: &ValidatorConfig,
) -> Result<ValidationReport, LoadError> {
    let path = source.resolve()?;
    let root = load_token_tree(&path)?;
    let _span = tracing::info_span!("validate", source = %path.display()).entered();
    Ok(validate_tree(&root, aliases, config))
}

/// Validate an already-loaded token tree.
#[must_use]
pub fn validate_tree(root: &TokenNode, aliases: &AliasMap, config: &ValidatorConfig) -> ValidationReport {
    let mut errors = check_mode_completeness(root, &config.color_categories);
    errors.extend(check_alias_resolution(root, aliases, &config.other_categories));
    errors.extend(check_literal_allow_list(
        aliases,
        &config.allow_list,
        &config.other_categories,
    ));
    errors.extend(check_alias_coverage(root, aliases, &config.color_categories));
    errors.extend(check_contrast(root, aliases, &config.contrast_pairs));

    tracing::info!(findings = errors.len(), "validation finished");
    ValidationReport::new(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::{AliasId, AliasRef};
    use crate::config::{ContrastPair, LiteralAllowList};
    use crate::finding::ErrorCode;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn findings_are_grouped_in_check_order() {
        let root = TokenNode::from_json(json!({
            "color": {
                "background": {
                    "light": { "primary": {"value": "#ffffff"}, "secondary": {"value": "#fafafa"} },
                    "dark": { "primary": {"value": "#000000"} }
                },
                "text": {
                    "light": { "primary": {"value": "#fefefe"} },
                    "dark": { "primary": {"value": "#ffffff"} }
                }
            }
        }));
        let aliases = AliasMap::new()
            .with_color("background", "primary", "light", AliasRef::path("color.background.light.primary"))
            .with_color("background", "primary", "dark", AliasRef::path("color.background.dark.primary"))
            .with_color("background", "ghost", "light", AliasRef::path("color.background.light.ghost"))
            .with_color("text", "primary", "light", AliasRef::path("color.text.light.primary"))
            .with_color("text", "primary", "dark", AliasRef::path("color.text.dark.primary"))
            .with_alias("space", "odd", AliasRef::value("13px"));

        let report = validate_tree(&root, &aliases, &ValidatorConfig::default());
        let codes: Vec<ErrorCode> = report.errors.iter().map(|e| e.code).collect();
        assert_eq!(
            codes,
            vec![
                ErrorCode::ModeMissing,
                ErrorCode::AliasMissing,
                ErrorCode::AliasLiteralUnapproved,
                ErrorCode::AliasValueMissing,
                ErrorCode::ContrastFail,
            ]
        );
    }

    #[test]
    fn custom_allow_list_and_contrast_rules_replace_builtins() {
        let root = TokenNode::from_json(json!({
            "color": {
                "background": {
                    "light": { "primary": {"value": "#ffffff"} },
                    "dark": { "primary": {"value": "#000000"} }
                },
                "text": {
                    "light": { "muted": {"value": "#767676"} },
                    "dark": { "muted": {"value": "#ffffff"} }
                }
            }
        }));
        let aliases = AliasMap::new()
            .with_color("background", "primary", "light", AliasRef::path("color.background.light.primary"))
            .with_color("background", "primary", "dark", AliasRef::path("color.background.dark.primary"))
            .with_color("text", "muted", "light", AliasRef::path("color.text.light.muted"))
            .with_color("text", "muted", "dark", AliasRef::path("color.text.dark.muted"))
            .with_alias("space", "odd", AliasRef::value("13px"));

        let builtin = validate_tree(&root, &aliases, &ValidatorConfig::default());
        let codes: Vec<ErrorCode> = builtin.errors.iter().map(|e| e.code).collect();
        assert_eq!(codes, vec![ErrorCode::AliasLiteralUnapproved]);

        let config = ValidatorConfig::default()
            .with_allow_list(LiteralAllowList::new().with("space", ["13px"]))
            .with_contrast_pairs(vec![ContrastPair::new(
                AliasId::new("background", "primary"),
                AliasId::new("text", "muted"),
                7.0,
            )]);
        let report = validate_tree(&root, &aliases, &config);
        assert_eq!(report.errors.len(), 1, "{report}");
        assert_eq!(report.errors[0].code, ErrorCode::ContrastFail);
        assert!(report.errors[0].message.contains("in light mode"));
        assert!(report.errors[0].message.contains("below 7:1"));
    }

    #[test]
    fn empty_inputs_are_clean() {
        let report = validate_tree(&TokenNode::group(), &AliasMap::new(), &ValidatorConfig::default());
        assert!(report.is_clean());
    }

    #[test]
    fn missing_source_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = SourceLocation::File(dir.path().join("missing.json"));
        let result = validate_tokens(&source, &AliasMap::new(), &ValidatorConfig::default());
        assert!(matches!(result, Err(LoadError::NotFound { .. })));
    }
}
