//! Error types for nbindex.

use thiserror::Error;

/// Top-level result type for nbindex operations.
pub type Result<T> = std::result::Result<T, NbIndexError>;

/// Top-level error type for nbindex.
#[derive(Debug, Error)]
pub enum NbIndexError {
    #[error("page error: {0}")]
    Page(#[from] PageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while splicing the link list into the index page.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("'<ul>' after the notebook marker is never closed by a '</ul>' line")]
    UnclosedList,
}
