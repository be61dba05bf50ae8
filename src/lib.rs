//! # bible-lookup
//!
//! Looks up scripture passages across Bible translations that number their
//! books differently. User input such as `"ин 3:16"` or `"1 Кор 13 4-7"` is
//! resolved to a canonical book, mapped to the translation's own book id, and
//! fetched from the translation's in-memory document tree. Input that is not
//! a reference can be searched as text instead.
pub mod bible;

// Re-export the main types for convenience
pub use bible::{
    fetch::fetch_verse,
    history::History,
    library::{LoadingStatus, TranslationLibrary},
    lookup::{lookup, Lookup},
    query::parse_query,
    registry::{Registry, RegistryBuilder},
    search::{full_text_search, DEFAULT_SEARCH_LIMIT},
    types::{
        book::BookCode,
        error::{BibleError, Result},
        models::{
            Book, Chapter, DocumentTree, ParsedQuery, TranslationCode, Verse, VerseResult,
            VerseSpec,
        },
    },
};
