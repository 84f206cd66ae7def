//! Validator configuration: categories, contrast rules, literal allow-list.
//!
//! Everything here is static, immutable input to a run. The built-in
//! configuration ([`ValidatorConfig::default`]) covers the standard
//! category set; a TOML file can replace any part of it:
//!
//! ```toml
//! color_categories = ["background", "text"]
//!
//! [[contrast]]
//! background = "background.primary"
//! text = "text.primary"
//! min = 4.5
//!
//! [allow_list]
//! radius = ["9999px"]
//! ```
//!
//! Fields absent from the file keep their built-in value. A field that is
//! present replaces the built-in value wholesale; allow-lists are not
//! merged.

use std::collections::BTreeSet;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::alias::AliasId;
use crate::error::LoadError;

/// Color categories checked for mode symmetry, coverage and resolution.
pub const COLOR_CATEGORIES: [&str; 6] =
    ["background", "text", "icon", "border", "accent", "interactive"];

/// Unmoded categories checked for resolution and literal approval.
pub const OTHER_CATEGORIES: [&str; 5] = ["space", "radius", "shadow", "size", "type"];

/// The category whose aliases may point at a whole token group.
pub const TYPOGRAPHY_CATEGORY: &str = "type";

/// WCAG AA minimum for normal-size text.
pub const WCAG_AA_NORMAL: f64 = 4.5;

// ─── ContrastPair ────────────────────────────────────────────────────────────

/// A background/text alias pair and the minimum ratio between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastPair {
    pub background: AliasId,
    pub text: AliasId,
    pub min: f64,
}

impl ContrastPair {
    #[must_use]
    pub const fn new(background: AliasId, text: AliasId, min: f64) -> Self {
        Self {
            background,
            text,
            min,
        }
    }

    /// Whether `ratio` falls short of this pair's minimum.
    #[must_use]
    pub fn is_violated_by(&self, ratio: f64) -> bool {
        ratio < self.min
    }
}

fn builtin_contrast_pairs() -> Vec<ContrastPair> {
    [
        ("background", "primary", "text", "primary"),
        ("background", "primary", "text", "secondary"),
        ("background", "secondary", "text", "primary"),
        ("interactive", "primary", "text", "inverse"),
    ]
    .into_iter()
    .map(|(bg_cat, bg, text_cat, text)| {
        ContrastPair::new(
            AliasId::new(bg_cat, bg),
            AliasId::new(text_cat, text),
            WCAG_AA_NORMAL,
        )
    })
    .collect()
}

// ─── LiteralAllowList ────────────────────────────────────────────────────────

/// Pre-approved literal values for non-color aliases, per category.
///
/// Color categories never accept literals, so entries for them have no
/// effect. A category with no entry approves nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LiteralAllowList(IndexMap<String, BTreeSet<String>>);

impl LiteralAllowList {
    /// An allow-list that approves nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Approve `literals` for `category`, builder style.
    #[must_use]
    pub fn with<I, S>(mut self, category: impl Into<String>, literals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0
            .entry(category.into())
            .or_default()
            .extend(literals.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn allows(&self, category: &str, literal: &str) -> bool {
        self.0.get(category).is_some_and(|set| set.contains(literal))
    }

    /// The approved literals for `category`, sorted.
    pub fn approved(&self, category: &str) -> impl Iterator<Item = &str> {
        self.0
            .get(category)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// The built-in allow-list: reset values and keyword sizes that have no
    /// token of their own.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new()
            .with("space", ["0"])
            .with("radius", ["0", "50%", "9999px"])
            .with("shadow", ["none"])
            .with("size", ["auto", "100%"])
            .with("type", ["inherit"])
    }
}

// ─── ValidatorConfig ─────────────────────────────────────────────────────────

/// Static configuration for one validation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    pub color_categories: Vec<String>,
    pub other_categories: Vec<String>,
    #[serde(rename = "contrast")]
    pub contrast_pairs: Vec<ContrastPair>,
    pub allow_list: LiteralAllowList,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            color_categories: COLOR_CATEGORIES.map(String::from).to_vec(),
            other_categories: OTHER_CATEGORIES.map(String::from).to_vec(),
            contrast_pairs: builtin_contrast_pairs(),
            allow_list: LiteralAllowList::builtin(),
        }
    }
}

impl ValidatorConfig {
    /// Parse a TOML document. `origin` is only used for error messages.
    ///
    /// # Errors
    ///
    /// [`LoadError::Config`] for invalid TOML, unknown keys, or malformed
    /// alias names in contrast rules.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self, LoadError> {
        toml::from_str(text).map_err(|source| LoadError::Config {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Read and parse a TOML config file.
    ///
    /// # Errors
    ///
    /// [`LoadError::NotFound`] or [`LoadError::Io`] if the file cannot be
    /// read, otherwise as [`Self::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        let config = Self::from_toml_str(&text, path)?;
        tracing::info!(
            path = %path.display(),
            contrast_pairs = config.contrast_pairs.len(),
            "loaded validator config"
        );
        Ok(config)
    }

    /// Replace the literal allow-list, builder style.
    #[must_use]
    pub fn with_allow_list(mut self, allow_list: LiteralAllowList) -> Self {
        self.allow_list = allow_list;
        self
    }

    /// Replace the contrast rules, builder style.
    #[must_use]
    pub fn with_contrast_pairs(mut self, pairs: Vec<ContrastPair>) -> Self {
        self.contrast_pairs = pairs;
        self
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
