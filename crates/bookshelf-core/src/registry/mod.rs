//! In-memory book registry.
//!
//! This module provides the registry that owns every book record:
//! - **Books**: title and author stored under a generated identifier,
//!   kept in insertion order
//! - **Identifiers**: produced by a pluggable [`IdGenerator`], UUID v4 by default
//!
//! Titles are unique among the books currently held. Registries are plain
//! values; share one across threads with `Arc<BookRegistry>`.

mod book_registry;
mod id;

pub use book_registry::BookRegistry;
pub use id::{IdGenerator, UuidGenerator};
