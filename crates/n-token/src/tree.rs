//! The token source tree.
//!
//! A token source is a nested JSON document. Every JSON object is either
//! a **leaf** (it carries a `value` key, plus any metadata such as `type`
//! or `description`) or a **group** (a namespace of further nodes). Any
//! non-object entry (`"$description": "..."`) is kept as a [`TokenNode::Scalar`]
//! so that paths pointing at it resolve to something that is neither.
//!
//! The leaf/group decision is made once, while deserializing, so the rest
//! of the engine matches on [`TokenNode`] instead of sniffing shapes.
//!
//! ```text
//! color
//! └── background
//!     ├── light
//!     │   └── primary  { "value": "#ffffff" }   ← Leaf
//!     └── dark
//!         └── primary  { "value": "#101014" }   ← Leaf
//! type
//! └── body                                      ← Group (token group)
//!     ├── size        { "value": "16px" }
//!     └── lineHeight  { "value": "1.5" }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The key that marks a JSON object as a leaf token.
pub const VALUE_KEY: &str = "value";

// ─── TokenLeaf ───────────────────────────────────────────────────────────────

/// A concrete token: a `value` plus whatever metadata the source carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenLeaf {
    pub value: Value,
    #[serde(flatten)]
    pub metadata: IndexMap<String, Value>,
}

impl TokenLeaf {
    /// A leaf with a string value and no metadata.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Value::String(value.into()),
            metadata: IndexMap::new(),
        }
    }

    /// The value as a string, if it is one.
    #[must_use]
    pub fn value_str(&self) -> Option<&str> {
        self.value.as_str()
    }
}

// ─── TokenNode ───────────────────────────────────────────────────────────────

/// One node of the token source tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TokenNode {
    Leaf(TokenLeaf),
    Group(IndexMap<String, TokenNode>),
    Scalar(Value),
}

impl TokenNode {
    /// Classify a JSON value, recursively.
    #[must_use]
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(mut map) => {
                if let Some(value) = map.shift_remove(VALUE_KEY) {
                    Self::Leaf(TokenLeaf {
                        value,
                        metadata: map.into_iter().collect(),
                    })
                } else {
                    Self::Group(
                        map.into_iter()
                            .map(|(key, child)| (key, Self::from_json(child)))
                            .collect(),
                    )
                }
            }
            other => Self::Scalar(other),
        }
    }

    /// An empty group.
    #[must_use]
    pub fn group() -> Self {
        Self::Group(IndexMap::new())
    }

    /// Add a child to a group, builder style. Non-group nodes are returned
    /// unchanged.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, child: Self) -> Self {
        if let Self::Group(children) = &mut self {
            children.insert(key.into(), child);
        }
        self
    }

    /// Shorthand for a string leaf.
    #[must_use]
    pub fn leaf(value: impl Into<String>) -> Self {
        Self::Leaf(TokenLeaf::new(value))
    }

    #[must_use]
    pub const fn as_leaf(&self) -> Option<&TokenLeaf> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_group(&self) -> Option<&IndexMap<String, Self>> {
        match self {
            Self::Group(children) => Some(children),
            _ => None,
        }
    }

    /// Direct child of a group.
    #[must_use]
    pub fn child(&self, key: &str) -> Option<&Self> {
        self.as_group()?.get(key)
    }

    /// Number of leaves at or below this node.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Group(children) => children.values().map(Self::leaf_count).sum(),
            Self::Scalar(_) => 0,
        }
    }
}

impl<'de> Deserialize<'de> for TokenNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_json)
    }
}

// ─── Path resolution ─────────────────────────────────────────────────────────

/// Walk a dotted path (`color.background.light.primary`) from `root`.
///
/// Each segment is looked up in the current group. Resolution stops with
/// `None` as soon as the current node is not a group or the key is absent.
/// Empty segments (`a..b`, a trailing dot) are ordinary lookups of the
/// empty-string key.
#[must_use]
pub fn resolve_path<'a>(root: &'a TokenNode, path: &str) -> Option<&'a TokenNode> {
    resolve_segments(root, path.split('.'))
}

/// Like [`resolve_path`], with the segments already split.
pub fn resolve_segments<'a, 's>(
    root: &'a TokenNode,
    segments: impl IntoIterator<Item = &'s str>,
) -> Option<&'a TokenNode> {
    segments
        .into_iter()
        .try_fold(root, |node, segment| node.child(segment))
}

/// Whether `node` is a group whose direct children include at least one
/// leaf, such as a typography group.
///
/// Empty groups, leaves and scalars are not token groups.
#[must_use]
pub fn is_token_group(node: &TokenNode) -> bool {
    node.as_group()
        .is_some_and(|children| children.values().any(|child| child.as_leaf().is_some()))
}

/// Keys of `color.<category>.<mode>` in source order.
///
/// A missing or non-group node yields no keys.
#[must_use]
pub fn mode_keys<'a>(root: &'a TokenNode, category: &str, mode: &str) -> Vec<&'a str> {
    resolve_segments(root, ["color", category, mode])
        .and_then(TokenNode::as_group)
        .map(|children| children.keys().map(String::as_str).collect())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
