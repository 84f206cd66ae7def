//! The alias map: semantic names pointing into the token source.
//!
//! Color aliases are mode-qualified,
//! `color.<category>.<token>.<mode> -> AliasRef`; every other category is
//! flat, `<category>.<token> -> AliasRef`. In JSON:
//!
//! ```json
//! {
//!   "color": {
//!     "background": {
//!       "primary": {
//!         "light": { "path": "color.background.light.primary" },
//!         "dark":  { "path": "color.background.dark.primary" }
//!       }
//!     }
//!   },
//!   "space": { "gutter": { "path": "space.md" } },
//!   "radius": { "pill": { "value": "9999px" } }
//! }
//! ```
//!
//! Iteration order is the order the map was authored in; every check that
//! walks the alias map reports in that order.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Where an alias points: a dotted path into the token source, or a literal.
///
/// Exactly one of `path` / `value` must be present; anything else fails to
/// deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum AliasRef {
    Path { path: String },
    Value { value: String },
}

impl AliasRef {
    #[must_use]
    pub fn path(path: impl Into<String>) -> Self {
        Self::Path { path: path.into() }
    }

    #[must_use]
    pub fn value(value: impl Into<String>) -> Self {
        Self::Value {
            value: value.into(),
        }
    }
}

/// `mode -> ref` for one color alias.
pub type ModeAliases = IndexMap<String, AliasRef>;

/// `token -> mode -> ref` for one color category.
pub type ColorCategoryAliases = IndexMap<String, ModeAliases>;

/// `token -> ref` for one non-color category.
pub type CategoryAliases = IndexMap<String, AliasRef>;

/// The complete alias map under test.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasMap {
    #[serde(default)]
    pub color: IndexMap<String, ColorCategoryAliases>,
    #[serde(flatten)]
    pub categories: IndexMap<String, CategoryAliases>,
}

impl AliasMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The mode-qualified ref for `color.<category>.<token>.<mode>`.
    #[must_use]
    pub fn color_ref(&self, category: &str, token: &str, mode: &str) -> Option<&AliasRef> {
        self.color.get(category)?.get(token)?.get(mode)
    }

    /// All aliases of a non-color category.
    #[must_use]
    pub fn category(&self, category: &str) -> Option<&CategoryAliases> {
        self.categories.get(category)
    }

    /// Add a color alias, builder style.
    #[must_use]
    pub fn with_color(
        mut self,
        category: impl Into<String>,
        token: impl Into<String>,
        mode: impl Into<String>,
        target: AliasRef,
    ) -> Self {
        self.color
            .entry(category.into())
            .or_default()
            .entry(token.into())
            .or_default()
            .insert(mode.into(), target);
        self
    }

    /// Add a non-color alias, builder style.
    #[must_use]
    pub fn with_alias(
        mut self,
        category: impl Into<String>,
        token: impl Into<String>,
        target: AliasRef,
    ) -> Self {
        self.categories
            .entry(category.into())
            .or_default()
            .insert(token.into(), target);
        self
    }

    /// Remove a whole color alias (all modes). Returns whether it existed.
    pub fn remove_color(&mut self, category: &str, token: &str) -> bool {
        self.color
            .get_mut(category)
            .and_then(|tokens| tokens.shift_remove(token))
            .is_some()
    }
}

// ─── AliasId ─────────────────────────────────────────────────────────────────

/// A `<category>.<token>` alias name, as used by contrast rules.
///
/// Parsed from a string at the first `.`; the token part may itself
/// contain dots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AliasId {
    pub category: String,
    pub token: String,
}

impl AliasId {
    #[must_use]
    pub fn new(category: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            token: token.into(),
        }
    }
}

impl TryFrom<String> for AliasId {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.split_once('.') {
            Some((category, token)) if !category.is_empty() && !token.is_empty() => {
                Ok(Self::new(category, token))
            }
            _ => Err(format!(
                "alias name {s:?} must have the form <category>.<token>"
            )),
        }
    }
}

impl std::str::FromStr for AliasId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

impl From<AliasId> for String {
    fn from(id: AliasId) -> Self {
        id.to_string()
    }
}

impl fmt::Display for AliasId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.category, self.token)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_both_shapes() {
        let map: AliasMap = serde_json::from_str(
            r##"{
                "color": {
                    "background": {
                        "primary": {
                            "light": { "path": "color.background.light.primary" },
                            "dark": { "value": "#000000" }
                        }
                    }
                },
                "space": { "gutter": { "path": "space.md" } },
                "radius": { "pill": { "value": "9999px" } }
            }"##,
        )
        .unwrap();

        let expected = AliasMap::new()
            .with_color("background", "primary", "light", AliasRef::path("color.background.light.primary"))
            .with_color("background", "primary", "dark", AliasRef::value("#000000"))
            .with_alias("space", "gutter", AliasRef::path("space.md"))
            .with_alias("radius", "pill", AliasRef::value("9999px"));
        assert_eq!(map, expected);
    }

    #[test]
    fn color_section_is_optional() {
        let map: AliasMap = serde_json::from_str(r#"{ "space": {} }"#).unwrap();
        assert!(map.color.is_empty());
        assert!(map.category("space").is_some());
    }

    #[test]
    fn ref_with_both_keys_is_rejected() {
        let err = serde_json::from_str::<AliasRef>(r#"{ "path": "a.b", "value": "x" }"#);
        assert!(err.is_err());
    }

    #[test]
    fn ref_with_neither_key_is_rejected() {
        assert!(serde_json::from_str::<AliasRef>(r#"{ "ref": "a.b" }"#).is_err());
        assert!(serde_json::from_str::<AliasRef>(r"{}").is_err());
    }

    #[test]
    fn authored_order_is_kept() {
        let map: AliasMap = serde_json::from_str(
            r#"{ "color": { "text": { "z": {}, "a": {}, "m": {} } } }"#,
        )
        .unwrap();
        let tokens: Vec<&str> = map.color["text"].keys().map(String::as_str).collect();
        assert_eq!(tokens, vec!["z", "a", "m"]);
    }

    #[test]
    fn color_ref_lookup() {
        let map = AliasMap::new().with_color("text", "primary", "dark", AliasRef::path("color.text.dark.primary"));
        assert_eq!(
            map.color_ref("text", "primary", "dark"),
            Some(&AliasRef::path("color.text.dark.primary"))
        );
        assert_eq!(map.color_ref("text", "primary", "light"), None);
        assert_eq!(map.color_ref("icon", "primary", "dark"), None);
    }

    #[test]
    fn remove_color_drops_all_modes() {
        let mut map = AliasMap::new()
            .with_color("text", "primary", "light", AliasRef::path("a"))
            .with_color("text", "primary", "dark", AliasRef::path("b"));
        assert!(map.remove_color("text", "primary"));
        assert!(!map.remove_color("text", "primary"));
        assert_eq!(map.color_ref("text", "primary", "light"), None);
    }

    // ── AliasId ─────────────────────────────────────────────────────

    #[test]
    fn alias_id_parses_at_first_dot() {
        let id: AliasId = "background.primary.hover".parse().unwrap();
        assert_eq!(id, AliasId::new("background", "primary.hover"));
        assert_eq!(id.to_string(), "background.primary.hover");
    }

    #[test]
    fn alias_id_requires_both_parts() {
        for bad in ["background", ".primary", "background.", ""] {
            assert!(bad.parse::<AliasId>().is_err(), "{bad:?} should be rejected");
        }
    }
}
