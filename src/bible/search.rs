//! Full-text search over a loaded translation.
//!
//! A case-insensitive substring scan in document order. There is no ranking:
//! hits come back in book, chapter, verse order, and the scan stops as soon as
//! the result cap is reached so generic terms stay cheap on large translations.

use std::collections::HashSet;

use log::{debug, warn};

use super::fetch::format_reference;
use super::iter::LocatedVerse;
use super::registry::Registry;
use super::types::error::{BibleError, Result};
use super::types::models::{DocumentTree, TranslationCode, VerseResult, VerseSpec};

/// Result cap applied when the caller does not give one.
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

/// Searches every verse of `tree` for `term`, ignoring case.
///
/// Returns at most `limit` hits (or [`DEFAULT_SEARCH_LIMIT`] when `None`).
/// An empty term or an absent tree yields no hits. Verses in books the
/// registry cannot name for `translation` are skipped.
///
/// # Errors
/// `UnsupportedTranslation` when `translation` has no configured numbering.
pub fn full_text_search(
    registry: &Registry,
    term: &str,
    tree: Option<&DocumentTree>,
    translation: &TranslationCode,
    limit: Option<usize>,
) -> Result<Vec<VerseResult>> {
    let needle = term.trim().to_lowercase();
    let Some(tree) = tree else {
        return Ok(Vec::new());
    };
    if needle.is_empty() {
        return Ok(Vec::new());
    }
    let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    if !registry.supports(translation) {
        return Err(BibleError::UnsupportedTranslation(translation.to_string()));
    }

    let results = collect_hits(registry, &needle, tree, tree.iter_verses(), translation, limit)?;
    debug!("Search for '{}' in {}: {} hits (limit {})", needle, translation, results.len(), limit);
    Ok(results)
}

/// Pulls verses from `verses` until `limit` named hits are collected.
///
/// No verse past the last accepted hit is read.
fn collect_hits<'a>(
    registry: &Registry,
    needle: &str,
    tree: &DocumentTree,
    verses: impl Iterator<Item = LocatedVerse<'a>>,
    translation: &TranslationCode,
    limit: usize,
) -> Result<Vec<VerseResult>> {
    let mut results = Vec::new();
    if limit == 0 {
        return Ok(results);
    }

    let mut unnamed_books = HashSet::new();
    let matches = verses.filter(|located| located.verse.text().to_lowercase().contains(needle));
    for located in matches {
        let book_id = located.book.id();
        let Some(book) = registry.book_for_id(translation, book_id)? else {
            if unnamed_books.insert(book_id) {
                warn!("{} book {} has no canonical code, skipping its hits", translation, book_id);
            }
            continue;
        };
        let title = registry.display_title(book, Some(tree), translation);
        results.push(VerseResult {
            reference: format_reference(
                &title,
                Some(located.chapter.id()),
                VerseSpec::Single(located.verse.id()),
            ),
            text: located.verse.text().to_string(),
            book,
        });
        if results.len() >= limit {
            break;
        }
    }
    Ok(results)
}
