//! Locating and loading the token source and the alias map.
//!
//! Both are UTF-8 JSON. A file that is missing or does not parse is a
//! [`LoadError`]; there is no partial load.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::alias::AliasMap;
use crate::error::LoadError;
use crate::tree::TokenNode;

/// Where the token source lives, relative to a project directory.
pub const DEFAULT_TOKEN_SOURCE: &str = "src/tokens/index.dtcg.json";

/// Where to read the token source from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SourceLocation {
    /// An explicit file.
    File(PathBuf),
    /// [`DEFAULT_TOKEN_SOURCE`] next to this crate's manifest if present,
    /// otherwise under the current working directory.
    #[default]
    Discover,
}

impl SourceLocation {
    /// The file this location refers to.
    ///
    /// # Errors
    ///
    /// [`LoadError::Io`] if discovery cannot read the working directory.
    pub fn resolve(&self) -> Result<PathBuf, LoadError> {
        match self {
            Self::File(path) => Ok(path.clone()),
            Self::Discover => {
                let cwd = env::current_dir().map_err(|e| LoadError::io(".", e))?;
                Ok(discover(Path::new(env!("CARGO_MANIFEST_DIR")), &cwd))
            }
        }
    }
}

/// Pick the module-relative token source if it exists as a file, else the
/// working-directory one (which may not exist; loading reports that).
#[must_use]
pub fn discover(module_dir: &Path, cwd: &Path) -> PathBuf {
    let module_relative = module_dir.join(DEFAULT_TOKEN_SOURCE);
    if module_relative.is_file() {
        return module_relative;
    }
    let fallback = cwd.join(DEFAULT_TOKEN_SOURCE);
    tracing::warn!(
        missing = %module_relative.display(),
        fallback = %fallback.display(),
        "module-relative token source not found, using working directory"
    );
    fallback
}

/// Read and classify a token source file. The root must be a JSON object.
///
/// # Errors
///
/// [`LoadError::NotFound`], [`LoadError::Io`] or [`LoadError::Json`] when
/// the file cannot be read or parsed, [`LoadError::NotATree`] when its root
/// is not a group.
pub fn load_token_tree(path: &Path) -> Result<TokenNode, LoadError> {
    let root: TokenNode = read_json(path)?;
    if root.as_group().is_none() {
        return Err(LoadError::NotATree {
            path: path.to_path_buf(),
        });
    }
    tracing::info!(path = %path.display(), leaves = root.leaf_count(), "loaded token source");
    Ok(root)
}

/// Read an alias map file.
///
/// # Errors
///
/// [`LoadError::NotFound`] or [`LoadError::Io`] when the file cannot be
/// read, [`LoadError::Json`] when it is not a valid alias map.
pub fn load_alias_map(path: &Path) -> Result<AliasMap, LoadError> {
    let aliases: AliasMap = read_json(path)?;
    tracing::info!(
        path = %path.display(),
        color_categories = aliases.color.len(),
        other_categories = aliases.categories.len(),
        "loaded alias map"
    );
    Ok(aliases)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let text = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    serde_json::from_str(&text).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
