//! Common error types used across the workspace.
//!
//! The service exposes a single failure kind to its callers: a storage
//! operation failed. Missing rows are not errors, they are `None`.
//! Each adapter keeps its own typed error and converts into [`CovidError`]
//! via `From`.

use std::error::Error;

/// Top-level error returned by ports and services.
#[derive(Debug, thiserror::Error)]
pub enum CovidError {
    /// The storage engine rejected or failed to run an operation.
    #[error("storage error")]
    Storage(#[source] Box<dyn Error + Send + Sync>),
}

impl CovidError {
    /// Wrap any storage-layer error.
    pub fn storage(err: impl Error + Send + Sync + 'static) -> Self {
        Self::Storage(Box::new(err))
    }
}
