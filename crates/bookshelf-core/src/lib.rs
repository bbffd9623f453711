//! Bookshelf - in-memory registry of book records.
//!
//! Books are added with a title and an author and receive a generated
//! identifier. Titles are unique among the books currently held; identifiers
//! are never reused, even after a book is removed.
//!
//! # Example
//!
//! ```
//! use bookshelf::{BookRegistry, BookshelfError};
//!
//! let registry = BookRegistry::new();
//! let id = registry.add("War and Peace", "Leo Tolstoy")?;
//!
//! assert_eq!(registry.count(), 1);
//! assert_eq!(registry.get(&id).unwrap().author, "Leo Tolstoy");
//!
//! let err = registry.add("War and Peace", "Someone Else").unwrap_err();
//! assert!(err.is_duplicate_title());
//!
//! registry.remove(&id);
//! assert!(registry.get(&id).is_none());
//! # Ok::<(), BookshelfError>(())
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod registry;

// Re-export commonly used types
pub use config::RegistryConfig;
pub use error::{BookshelfError, Result};
pub use models::{Book, BookId, BookInfo};
pub use registry::{BookRegistry, IdGenerator, UuidGenerator};
