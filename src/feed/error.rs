//! Errors raised by the feed core.

use thiserror::Error;

/// Rejected input to one of the feed operations.
///
/// Every variant is recoverable: the offending mutation is refused and the
/// state it targeted is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// Toggle of a label that is not part of the category set.
    #[error("Unknown category '{label}'")]
    InvalidCategory { label: String },

    /// Page size must be at least one item.
    #[error("Invalid page size {value}: must be at least 1")]
    InvalidPageSize { value: i64 },

    /// Pages are numbered from 1.
    #[error("Invalid page {value}: pages start at 1")]
    InvalidPage { value: i64 },

    /// A category set needs at least one label.
    #[error("Category set must contain at least one label")]
    EmptyCategorySet,

    #[error("Category '{label}' listed more than once")]
    DuplicateCategory { label: String },
}
