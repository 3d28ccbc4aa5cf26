//! errors.rs - Custom error types for the refilter-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

/// This enum represents all possible error types in the `refilter-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FilterError {
    #[error("invalid regex pattern: {0}")]
    RuleCompilation(fancy_regex::Error),

    #[error("pattern length ({0}) exceeds maximum allowed ({1})")]
    PatternLengthExceeded(usize, usize),

    #[error("rule '{0}' failed during matching: {1}")]
    RuleApplication(String, fancy_regex::Error),

    #[error("a fatal error occurred: {0}")]
    Fatal(String),
}
