//! Identifier generation for registry entries.

use crate::models::BookId;
use uuid::Uuid;

/// Produces candidate identifiers for newly added books.
///
/// The registry still rejects candidates that collide with a held identifier,
/// so an implementation only has to make collisions unlikely.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> BookId;
}

/// Random UUID v4 identifiers (122 random bits).
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> BookId {
        BookId::from(Uuid::new_v4().to_string())
    }
}
