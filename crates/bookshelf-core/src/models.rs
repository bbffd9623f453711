//! Book record types handed out by the registry.
//!
//! Every value here is an owned copy. Mutating one never reaches back into
//! the registry that produced it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier assigned to a book when it is added.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BookId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for BookId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Title and author of a held book, as returned by a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookInfo {
    pub title: String,
    pub author: String,
}

/// A held book tagged with its identifier, as returned by enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
}

impl Book {
    pub(crate) fn from_info(id: BookId, info: BookInfo) -> Self {
        Self {
            id,
            title: info.title,
            author: info.author,
        }
    }

    /// Drop the identifier, keeping title and author.
    pub fn into_info(self) -> BookInfo {
        BookInfo {
            title: self.title,
            author: self.author,
        }
    }
}
