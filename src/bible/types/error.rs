//! Custom error types for the bible-lookup crate.
//!
//! Not-found outcomes (unknown book, missing chapter or verse, unloaded
//! translation) are never errors: lookups return `None` or an empty list for
//! those. This type covers configuration defects and loader failures only.

use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum BibleError {
    /// An error originating from I/O operations while reading translation data.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The translation data is not valid JSON or does not match the document shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A translation code was requested that has no configured book id table
    /// or data file. This is a host configuration defect, not bad user input.
    #[error("Unsupported translation: {0}")]
    UnsupportedTranslation(String),

    /// Two different books were registered under the same normalized alias.
    #[error("Alias '{alias}' already maps to {existing}, cannot map it to {new}")]
    AliasConflict {
        alias: String,
        existing: &'static str,
        new: &'static str,
    },

    /// The translation data is structurally invalid.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// A mutex lock was poisoned, indicating a panic in another thread holding the lock.
    #[error("A mutex lock was poisoned, indicating a panic in another thread holding the lock.")]
    LockPoisoned,
}

/// A convenience `Result` type alias using the crate's `BibleError` type.
pub type Result<T> = std::result::Result<T, BibleError>;
