//! Error types for the bookshelf registry.
//!
//! Only business-rule violations surface here. Looking up or removing an
//! unknown identifier is not an error and never produces one of these values.

use thiserror::Error;

/// Main error type for the bookshelf crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookshelfError {
    #[error("A book titled {title:?} already exists")]
    DuplicateTitle { title: String },

    /// The identifier generator kept producing identifiers that are already held.
    #[error("Failed to generate a unique book id after {attempts} attempts")]
    IdGenerationExhausted { attempts: u32 },
}

/// Result type alias for bookshelf operations.
pub type Result<T> = std::result::Result<T, BookshelfError>;

impl BookshelfError {
    /// Check if this error reports an already-registered title.
    pub fn is_duplicate_title(&self) -> bool {
        matches!(self, BookshelfError::DuplicateTitle { .. })
    }
}
