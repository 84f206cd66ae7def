//! The result of a validation run and its renderings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::finding::{ErrorCode, ValidationError};

/// Every finding of one run, in check order. Empty means clean.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    #[must_use]
    pub const fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Findings per code, in order of each code's first appearance.
    #[must_use]
    pub fn count_by_code(&self) -> Vec<(ErrorCode, usize)> {
        let mut counts: Vec<(ErrorCode, usize)> = Vec::new();
        for error in &self.errors {
            match counts.iter_mut().find(|(code, _)| *code == error.code) {
                Some((_, n)) => *n += 1,
                None => counts.push((error.code, 1)),
            }
        }
        counts
    }

    /// Findings with the given code.
    pub fn with_code(&self, code: ErrorCode) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |e| e.code == code)
    }

    /// Pretty-printed `{ "errors": [...] }`.
    ///
    /// # Errors
    ///
    /// Only if serialization itself fails, which plain strings and codes do not.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Text rendering: one block per finding, then a summary line.
///
/// ```text
/// TOKEN_MODE_MISSING Color category "background" does not define ...
///   → Add the missing tokens under color.background. Missing in dark: ...
///
/// 1 problem (TOKEN_MODE_MISSING ×1)
/// ```
impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return writeln!(f, "Tokens OK: no problems found.");
        }

        for error in &self.errors {
            writeln!(f, "{error}")?;
            writeln!(f, "  → {}", error.suggestion)?;
            writeln!(f)?;
        }

        let total = self.errors.len();
        let noun = if total == 1 { "problem" } else { "problems" };
        let breakdown: Vec<String> = self
            .count_by_code()
            .into_iter()
            .map(|(code, n)| format!("{code} ×{n}"))
            .collect();
        writeln!(f, "{total} {noun} ({})", breakdown.join(", "))
    }
}
