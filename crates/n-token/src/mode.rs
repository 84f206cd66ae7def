//! Color modes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A color mode. Color tokens live under `color.<category>.<mode>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    /// Every mode, in the order checks visit them.
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    /// The key used for this mode in the token source and the alias map.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
