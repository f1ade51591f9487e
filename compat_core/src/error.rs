//! Error types for the fact store and engine.

use parts_catalog::CatalogError;
use thiserror::Error;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The dataset could not be loaded.
    #[error("failed to load dataset: {0}")]
    Catalog(#[from] CatalogError),

    /// A filter, ordering key or projection names a variable no pattern binds.
    #[error("variable ?{0} is not bound by any pattern")]
    UnboundVariable(String),
}
