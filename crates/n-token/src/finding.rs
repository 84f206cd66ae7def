//! Validation findings.
//!
//! A finding is plain data: a stable [`ErrorCode`] that tooling can match
//! on, a human-readable `message`, and a `suggestion` for fixing it.
//! Checks return them in a `Vec`; nothing here is ever raised as an error.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable finding codes. The string forms are part of the public contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorCode {
    /// A color category's light and dark sets have different keys.
    #[serde(rename = "TOKEN_MODE_MISSING")]
    ModeMissing,
    /// A color alias uses a literal instead of a path.
    #[serde(rename = "TOKEN_ALIAS_RAW_VALUE")]
    AliasRawValue,
    /// An alias path does not resolve to a token with a value.
    #[serde(rename = "TOKEN_ALIAS_MISSING")]
    AliasMissing,
    /// Light-mode color tokens exist that no alias points at.
    #[serde(rename = "TOKEN_ALIAS_VALUE_MISSING")]
    AliasValueMissing,
    /// A non-color literal alias is not on its category's allow-list.
    #[serde(rename = "TOKEN_ALIAS_LITERAL_UNAPPROVED")]
    AliasLiteralUnapproved,
    /// A background/text pair is below its minimum contrast ratio.
    #[serde(rename = "TOKEN_CONTRAST_FAIL")]
    ContrastFail,
}

impl ErrorCode {
    pub const ALL: [Self; 6] = [
        Self::ModeMissing,
        Self::AliasRawValue,
        Self::AliasMissing,
        Self::AliasValueMissing,
        Self::AliasLiteralUnapproved,
        Self::ContrastFail,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ModeMissing => "TOKEN_MODE_MISSING",
            Self::AliasRawValue => "TOKEN_ALIAS_RAW_VALUE",
            Self::AliasMissing => "TOKEN_ALIAS_MISSING",
            Self::AliasValueMissing => "TOKEN_ALIAS_VALUE_MISSING",
            Self::AliasLiteralUnapproved => "TOKEN_ALIAS_LITERAL_UNAPPROVED",
            Self::ContrastFail => "TOKEN_CONTRAST_FAIL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub code: ErrorCode,
    pub message: String,
    pub suggestion: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.message)
    }
}
