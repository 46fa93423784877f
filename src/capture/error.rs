//! Error definitions for pattern compilation.

use thiserror::Error;

/// Errors raised while turning a route pattern into a regular expression.
///
/// These are configuration errors: they surface once, at construction time.
/// A candidate string that fails to match is never an error.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The same `<name>` appears twice in one pattern.
    #[error("Named capture group: duplicate group name `{0}`")]
    DuplicateGroup(String),

    /// A per-group fragment has unbalanced parentheses.
    #[error("Unbalanced parentheses in fragment for group `{group}`: {fragment}")]
    UnbalancedFragment { group: String, fragment: String },

    /// The generated expression does not carry one capturing group per name.
    #[error("Capture group count mismatch: expected {expected}, regex has {found}")]
    GroupCountMismatch { expected: usize, found: usize },

    /// The regex engine rejected the generated expression.
    #[error(transparent)]
    Regex(#[from] regex::Error),
}

/// Result type for pattern compilation.
pub type CaptureResult<T> = Result<T, CaptureError>;
