//! Verse and range retrieval from a loaded translation.
//!
//! A [`ParsedQuery`] names a canonical book; the fetcher maps it to the
//! translation's own book id through the registry before touching the tree,
//! so the same query works against every translation's numbering.

use std::slice;

use log::{debug, trace};

use super::iter::Verses;
use super::registry::Registry;
use super::types::error::Result;
use super::types::models::{DocumentTree, ParsedQuery, TranslationCode, VerseResult, VerseSpec};

/// Builds the display reference `"{title} {chapter}:{verse}"`.
///
/// A whole-chapter reference drops the verse part and a whole-book
/// reference is the title alone.
pub fn format_reference(title: &str, chapter: Option<u32>, verse: VerseSpec) -> String {
    match (chapter, verse) {
        (None, _) => title.to_string(),
        (Some(chapter), VerseSpec::All) => format!("{} {}", title, chapter),
        (Some(chapter), verse) => format!("{} {}:{}", title, chapter, verse),
    }
}

/// Fetches the passage a parsed query points at.
///
/// Returns `Ok(None)` when the tree is not loaded, the query is absent or
/// names verses without a chapter, the translation lacks the book, or the
/// chapter or verses do not exist. Ranges and whole-chapter or whole-book
/// reads join verse texts with a single space, in ascending verse order,
/// without verse numbers.
///
/// # Errors
/// `UnsupportedTranslation` when `translation` has no configured numbering.
/// This is a host configuration defect, distinct from "verse not found".
pub fn fetch_verse(
    registry: &Registry,
    parsed: Option<&ParsedQuery>,
    tree: Option<&DocumentTree>,
    translation: &TranslationCode,
) -> Result<Option<VerseResult>> {
    let (Some(tree), Some(parsed)) = (tree, parsed) else {
        return Ok(None);
    };
    if parsed.chapter.is_none() && parsed.verse != VerseSpec::All {
        debug!("Verse {} given without a chapter in {:?}", parsed.verse, parsed);
        return Ok(None);
    }

    let Some(book_id) = registry.book_id(parsed.book, translation)? else {
        debug!("{} has no {} book", translation, parsed.book);
        return Ok(None);
    };
    let Some(book) = tree.book(book_id) else {
        debug!("{} tree has no book {} ({})", translation, book_id, parsed.book);
        return Ok(None);
    };

    let texts: Vec<&str> = match parsed.chapter {
        None => Verses::over_books(slice::from_ref(book))
            .map(|located| located.verse.text())
            .collect(),
        Some(chapter_id) => {
            let Some(chapter) = book.chapter(chapter_id) else {
                debug!("{} {} has no chapter {}", translation, parsed.book, chapter_id);
                return Ok(None);
            };
            let verses = match parsed.verse {
                VerseSpec::All => chapter.verses(),
                VerseSpec::Single(id) => chapter.verse(id).map(slice::from_ref).unwrap_or_default(),
                VerseSpec::Range(start, end) => chapter.verses_in(start, end),
            };
            verses.iter().map(|verse| verse.text()).collect()
        }
    };

    if texts.is_empty() {
        debug!("No verses for {:?} in {}", parsed, translation);
        return Ok(None);
    }
    trace!("Fetched {} verses for {:?}", texts.len(), parsed);

    let title = registry.display_title(parsed.book, Some(tree), translation);
    Ok(Some(VerseResult {
        reference: format_reference(&title, parsed.chapter, parsed.verse),
        text: texts.join(" "),
        book: parsed.book,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bible::registry::RegistryBuilder;
    use crate::bible::types::book::BookCode;
    use crate::bible::types::error::BibleError;
    use crate::bible::types::models::{Book, Chapter, Verse};

    fn tree() -> DocumentTree {
        DocumentTree::new(
            Some(TranslationCode::RST),
            vec![Book::new(
                43,
                None,
                vec![
                    Chapter::new(
                        3,
                        vec![
                            Verse::new(16, "Ибо так возлюбил Бог мир"),
                            Verse::new(17, "Ибо не послал Бог Сына Своего"),
                            Verse::new(18, "Верующий в Него не судится"),
                        ],
                    ),
                    Chapter::new(4, vec![Verse::new(1, "Когда же узнал Иисус")]),
                ],
            )],
        )
    }

    fn query(book: BookCode, chapter: Option<u32>, verse: VerseSpec) -> ParsedQuery {
        ParsedQuery { book, chapter, verse }
    }

    fn fetch(parsed: ParsedQuery) -> Option<VerseResult> {
        fetch_verse(Registry::standard(), Some(&parsed), Some(&tree()), &TranslationCode::RST).unwrap()
    }

    #[test]
    fn test_format_reference() {
        assert_eq!(format_reference("От Иоанна", Some(3), VerseSpec::Single(16)), "От Иоанна 3:16");
        assert_eq!(format_reference("Бытие", Some(1), VerseSpec::Range(1, 3)), "Бытие 1:1-3");
        assert_eq!(format_reference("Бытие", Some(1), VerseSpec::All), "Бытие 1");
        assert_eq!(format_reference("Бытие", None, VerseSpec::All), "Бытие");
    }

    #[test]
    fn test_range_skips_missing_verses_and_keeps_order() {
        let result = fetch(query(BookCode::John, Some(3), VerseSpec::Range(15, 17))).unwrap();
        assert_eq!(result.text, "Ибо так возлюбил Бог мир Ибо не послал Бог Сына Своего");
        assert_eq!(result.reference, "От Иоанна 3:15-17");
    }

    #[test]
    fn test_range_outside_chapter_is_none() {
        assert_eq!(fetch(query(BookCode::John, Some(3), VerseSpec::Range(20, 25))), None);
    }

    #[test]
    fn test_missing_verse_is_none() {
        assert_eq!(fetch(query(BookCode::John, Some(3), VerseSpec::Single(99))), None);
    }

    #[test]
    fn test_whole_chapter() {
        let result = fetch(query(BookCode::John, Some(3), VerseSpec::All)).unwrap();
        assert_eq!(result.reference, "От Иоанна 3");
        assert!(result.text.starts_with("Ибо так возлюбил"));
        assert!(result.text.ends_with("не судится"));
    }

    #[test]
    fn test_whole_book_concatenates_chapters_in_order() {
        let result = fetch(query(BookCode::John, None, VerseSpec::All)).unwrap();
        assert_eq!(result.reference, "От Иоанна");
        assert!(result.text.ends_with("не судится Когда же узнал Иисус"));
    }

    #[test]
    fn test_absent_inputs_are_none() {
        let parsed = query(BookCode::John, Some(3), VerseSpec::Single(16));
        let registry = Registry::standard();
        assert_eq!(fetch_verse(registry, Some(&parsed), None, &TranslationCode::RST).unwrap(), None);
        assert_eq!(fetch_verse(registry, None, Some(&tree()), &TranslationCode::RST).unwrap(), None);
    }

    #[test]
    fn test_book_missing_from_translation_table() {
        let nt_only = TranslationCode::new("NTO");
        let registry = RegistryBuilder::new()
            .translation(nt_only.clone(), vec![(BookCode::Matthew, 1)])
            .build()
            .unwrap();
        let parsed = query(BookCode::John, Some(3), VerseSpec::Single(16));
        assert_eq!(fetch_verse(&registry, Some(&parsed), Some(&tree()), &nt_only).unwrap(), None);
    }

    #[test]
    fn test_unsupported_translation_is_error() {
        let parsed = query(BookCode::John, Some(3), VerseSpec::Single(16));
        let result = fetch_verse(
            Registry::standard(),
            Some(&parsed),
            Some(&tree()),
            &TranslationCode::new("XYZ"),
        );
        assert!(matches!(result, Err(BibleError::UnsupportedTranslation(_))));
    }

    #[test]
    fn test_verse_without_chapter_is_none() {
        assert_eq!(fetch(query(BookCode::John, None, VerseSpec::Single(16))), None);
        assert_eq!(fetch(query(BookCode::John, None, VerseSpec::Range(16, 17))), None);
    }
}
