//! Contrast rules, evaluated through the alias chain.

use n_color::contrast_ratio;

use crate::alias::{AliasId, AliasMap, AliasRef};
use crate::config::ContrastPair;
use crate::finding::{ErrorCode, ValidationError};
use crate::mode::Mode;
use crate::tree::{TokenLeaf, TokenNode, resolve_path};

/// The color string an alias yields in `mode`, if any.
///
/// A literal yields itself; a path yields the string value of the leaf it
/// resolves to. Anything else (no alias, dangling path, non-string value)
/// yields `None`.
#[must_use]
pub fn resolve_alias_color<'a>(
    root: &'a TokenNode,
    aliases: &'a AliasMap,
    id: &AliasId,
    mode: Mode,
) -> Option<&'a str> {
    match aliases.color_ref(&id.category, &id.token, mode.as_str())? {
        AliasRef::Value { value } => Some(value),
        AliasRef::Path { path } => resolve_path(root, path)
            .and_then(TokenNode::as_leaf)
            .and_then(TokenLeaf::value_str),
    }
}

/// Evaluate every pair in both modes, in `pairs` order then light, dark.
///
/// A pair whose ends do not both resolve is skipped without a finding;
/// resolution problems are already reported by the resolution check.
/// Values that are not `#RRGGBB` colors are skipped the same way.
#[must_use]
pub fn check_contrast(root: &TokenNode, aliases: &AliasMap, pairs: &[ContrastPair]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for pair in pairs {
        for mode in Mode::ALL {
            let Some(background) = resolve_alias_color(root, aliases, &pair.background, mode) else {
                tracing::trace!(alias = %pair.background, %mode, "contrast pair skipped");
                continue;
            };
            let Some(text) = resolve_alias_color(root, aliases, &pair.text, mode) else {
                tracing::trace!(alias = %pair.text, %mode, "contrast pair skipped");
                continue;
            };
            let Some(ratio) = contrast_ratio(text, background) else {
                continue;
            };
            if pair.is_violated_by(ratio) {
                errors.push(contrast_fail(pair, mode, ratio));
            }
        }
    }

    tracing::debug!(findings = errors.len(), "contrast checked");
    errors
}

fn contrast_fail(pair: &ContrastPair, mode: Mode, ratio: f64) -> ValidationError {
    let ContrastPair { background, text, min } = pair;
    ValidationError::new(
        ErrorCode::ContrastFail,
        format!("Contrast ratio {ratio:.2}:1 between {text} and {background} in {mode} mode is below {min}:1"),
        format!("Darken or lighten {text} or {background} in {mode} mode until the ratio reaches at least {min}:1."),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
