//! # n-token: Design token validation engine
//!
//! Checks a design-token source tree against a hand-authored alias map
//! before either reaches a stylesheet or platform export.
//!
//! - **[`tree`]**: `TokenNode` (leaf / group / scalar), path resolution
//! - **[`alias`]**: `AliasMap`, `AliasRef`, `AliasId`
//! - **[`check`]**: the individual checks, each returning findings
//! - **[`config`]**: categories, contrast rules, literal allow-list
//! - **[`source`]**: locating and loading the JSON inputs
//! - **[`validate`]**: the entry points that run every check in order
//! - **[`report`]**: `ValidationReport` and its text/JSON renderings
//!
//! Findings are values ([`ValidationError`]); only failing to load an
//! input is an `Err` ([`LoadError`]).
//!
//! ```
//! use n_token::{AliasMap, AliasRef, TokenNode, ValidatorConfig, validate_tree};
//!
//! let root = TokenNode::group().with(
//!     "space",
//!     TokenNode::group().with("md", TokenNode::leaf("16px")),
//! );
//! let aliases = AliasMap::new().with_alias("space", "gutter", AliasRef::path("space.md"));
//!
//! let report = validate_tree(&root, &aliases, &ValidatorConfig::default());
//! assert!(report.is_clean());
//! ```

pub mod alias;
pub mod check;
pub mod config;
pub mod error;
pub mod finding;
pub mod mode;
pub mod report;
pub mod source;
pub mod tree;
pub mod validate;

pub use alias::{AliasId, AliasMap, AliasRef};
pub use config::{ContrastPair, LiteralAllowList, ValidatorConfig};
pub use error::LoadError;
pub use finding::{ErrorCode, ValidationError};
pub use mode::Mode;
pub use report::ValidationReport;
pub use source::{SourceLocation, load_alias_map, load_token_tree};
pub use tree::{TokenLeaf, TokenNode, is_token_group, resolve_path};
pub use validate::{validate_tokens, validate_tree};
