//! The individual checks. Each is a pure function from loaded inputs to a
//! list of findings, in a deterministic order; the orchestrator in
//! [`crate::validate`] runs them in sequence and concatenates the results.

pub mod contrast;
pub mod coverage;
pub mod literal;
pub mod mode_completeness;
pub mod resolution;

pub use contrast::check_contrast;
pub use coverage::check_alias_coverage;
pub use literal::check_literal_allow_list;
pub use mode_completeness::check_mode_completeness;
pub use resolution::check_alias_resolution;

/// Render a key list for a message, `none` when empty.
pub(crate) fn list_or_none(keys: &[&str]) -> String {
    if keys.is_empty() {
        "none".to_string()
    } else {
        keys.join(", ")
    }
}
