//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where they need it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `cabin-core`.
pub type CoreResult<T> = Result<T, CoreError>;
