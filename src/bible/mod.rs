//! Scripture reference resolution and search.
//!
//! ```text
//! raw input ──▶ query::parse_query ──▶ ParsedQuery ──▶ fetch::fetch_verse ──▶ VerseResult
//!                     │                                       │
//!                     └────────── registry::Registry ─────────┘
//!
//! search term ──▶ search::full_text_search ──▶ Vec<VerseResult>
//! ```
//!
//! The pipeline functions are synchronous and pure: they take the registry,
//! the loaded [`DocumentTree`](types::models::DocumentTree) and the
//! translation code as arguments and keep no state. Loading trees is the job
//! of [`loader`] and [`library`].

pub mod fetch;
pub mod history;
pub mod iter;
pub mod library;
pub mod loader;
pub mod lookup;
pub mod query;
pub mod registry;
pub mod search;
pub mod types;

pub use types::error::{BibleError, Result};
