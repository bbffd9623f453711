//! Mutex-guarded registry of books keyed by generated identifiers.

use crate::config::RegistryConfig;
use crate::models::{Book, BookId, BookInfo};
use crate::registry::id::{IdGenerator, UuidGenerator};
use crate::{BookshelfError, Result};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::fmt;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

/// Everything the registry lock protects.
#[derive(Default)]
struct RegistryState {
    /// Held books in insertion order.
    books: IndexMap<BookId, BookInfo>,
    /// Every identifier handed out, including those of removed books.
    issued: HashSet<BookId>,
}

/// In-memory registry of books with unique titles.
///
/// Every operation takes a single `Mutex` for its whole duration, so each
/// call sees and leaves a consistent snapshot even when the registry is
/// shared across threads through an `Arc`.
pub struct BookRegistry {
    state: Mutex<RegistryState>,
    id_generator: Box<dyn IdGenerator>,
}

impl BookRegistry {
    /// Create an empty registry that issues UUID v4 identifiers.
    pub fn new() -> Self {
        Self::with_id_generator(UuidGenerator)
    }

    /// Create an empty registry that draws identifiers from `generator`.
    pub fn with_id_generator(generator: impl IdGenerator + 'static) -> Self {
        Self {
            state: Mutex::new(RegistryState::default()),
            id_generator: Box::new(generator),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, RegistryState> {
        // Each operation mutates the state with a single map call, so a
        // panic elsewhere cannot leave it half-updated.
        self.state.lock().unwrap_or_else(|poisoned| {
            warn!("Book registry lock was poisoned, recovering state");
            poisoned.into_inner()
        })
    }

    // ========================================
    // Mutation
    // ========================================

    /// Add a book and return its newly issued identifier.
    ///
    /// Fails with [`BookshelfError::DuplicateTitle`] if a held book already
    /// has exactly this title; the registry is left unchanged in that case.
    pub fn add(&self, title: impl Into<String>, author: impl Into<String>) -> Result<BookId> {
        let title = title.into();
        let author = author.into();
        let mut state = self.lock_state();

        if state.books.values().any(|book| book.title == title) {
            debug!("Rejected duplicate book title: {}", title);
            return Err(BookshelfError::DuplicateTitle { title });
        }

        let id = self.next_id(&state.issued)?;
        debug!("Added book {:?} by {:?} as {}", title, author, id);

        state.issued.insert(id.clone());
        state.books.insert(id.clone(), BookInfo { title, author });

        Ok(id)
    }

    /// Remove a book. Unknown or already-removed identifiers are ignored.
    pub fn remove(&self, id: &BookId) {
        let mut state = self.lock_state();
        if let Some(book) = state.books.shift_remove(id) {
            debug!("Removed book {:?} ({})", book.title, id);
        }
    }

    fn next_id(&self, issued: &HashSet<BookId>) -> Result<BookId> {
        for attempt in 1..=RegistryConfig::MAX_ID_ATTEMPTS {
            let candidate = self.id_generator.generate();
            if !issued.contains(&candidate) {
                return Ok(candidate);
            }
            warn!(
                "Generated book id {} was already issued (attempt {})",
                candidate, attempt
            );
        }

        Err(BookshelfError::IdGenerationExhausted {
            attempts: RegistryConfig::MAX_ID_ATTEMPTS,
        })
    }

    // ========================================
    // Queries
    // ========================================

    /// Get a copy of a book's title and author, or `None` if it is not held.
    pub fn get(&self, id: &BookId) -> Option<BookInfo> {
        self.lock_state().books.get(id).cloned()
    }

    /// List every held book in the order it was added.
    pub fn list_all(&self) -> Vec<Book> {
        self.lock_state()
            .books
            .iter()
            .map(|(id, info)| Book::from_info(id.clone(), info.clone()))
            .collect()
    }

    /// Number of books currently held.
    pub fn count(&self) -> usize {
        self.lock_state().books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_state().books.is_empty()
    }

    /// Check whether a book with this identifier is held.
    pub fn contains(&self, id: &BookId) -> bool {
        self.lock_state().books.contains_key(id)
    }
}

impl Default for BookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookRegistry")
            .field("count", &self.count())
            .finish_non_exhaustive()
    }
}
