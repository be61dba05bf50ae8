//! One-call lookup for hosts: reference first, full-text search as fallback.

use log::debug;

use super::fetch::fetch_verse;
use super::query::parse_query;
use super::registry::Registry;
use super::search::full_text_search;
use super::types::error::Result;
use super::types::models::{DocumentTree, TranslationCode, VerseResult};

/// Outcome of [`lookup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The input was a reference and the passage exists.
    Passage(VerseResult),
    /// The input was searched as text and matched these verses.
    Matches(Vec<VerseResult>),
    /// Neither a passage nor any text match.
    Nothing,
}

/// Resolves raw user input against one translation.
///
/// The input is parsed as a reference and fetched; when that yields nothing
/// (not a reference, or the passage does not exist) the raw input is searched
/// as text instead.
///
/// # Errors
/// `UnsupportedTranslation` when `translation` has no configured numbering.
pub fn lookup(
    registry: &Registry,
    raw: &str,
    tree: Option<&DocumentTree>,
    translation: &TranslationCode,
    limit: Option<usize>,
) -> Result<Lookup> {
    let parsed = parse_query(registry, raw);
    if let Some(passage) = fetch_verse(registry, parsed.as_ref(), tree, translation)? {
        return Ok(Lookup::Passage(passage));
    }

    debug!("'{}' is not a fetchable reference, searching text", raw.trim());
    let matches = full_text_search(registry, raw, tree, translation, limit)?;
    if matches.is_empty() {
        Ok(Lookup::Nothing)
    } else {
        Ok(Lookup::Matches(matches))
    }
}
