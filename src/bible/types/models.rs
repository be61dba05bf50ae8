//! Core data structures shared by the lookup pipeline.
//!
//! This module defines:
//! - Translation codes
//! - The in-memory document tree of one translation (books, chapters, verses)
//! - Parsed references and the results handed back to hosts

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::book::BookCode;

/// Short code identifying one translation (`RST`, `NRT`, `KTB`, ...).
///
/// Codes are stored upper-case. Whether a code is usable is decided by the
/// registry's book id tables, not by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct TranslationCode(Cow<'static, str>);

impl TranslationCode {
    /// Russian Synodal Translation.
    pub const RST: TranslationCode = TranslationCode(Cow::Borrowed("RST"));
    /// New Russian Translation.
    pub const NRT: TranslationCode = TranslationCode(Cow::Borrowed("NRT"));
    /// Kazakh translation (2022 edition).
    pub const KTB: TranslationCode = TranslationCode(Cow::Borrowed("KTB"));

    pub fn new(code: &str) -> Self {
        TranslationCode(Cow::Owned(code.trim().to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TranslationCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TranslationCode {
    fn from(code: String) -> Self {
        TranslationCode::new(&code)
    }
}

impl From<TranslationCode> for String {
    fn from(code: TranslationCode) -> Self {
        code.0.into_owned()
    }
}

/// A single verse node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Verse {
    verse_id: u32,
    text: String,
}

impl Verse {
    pub fn new(verse_id: u32, text: impl Into<String>) -> Self {
        Self {
            verse_id,
            text: text.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.verse_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A chapter node holding its verses in ascending id order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Chapter {
    chapter_id: u32,
    #[serde(default)]
    verses: Vec<Verse>,
}

impl Chapter {
    pub fn new(chapter_id: u32, mut verses: Vec<Verse>) -> Self {
        verses.sort_by_key(Verse::id);
        Self { chapter_id, verses }
    }

    pub fn id(&self) -> u32 {
        self.chapter_id
    }

    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    /// Finds a verse by id (binary search, verses are kept sorted).
    pub fn verse(&self, verse_id: u32) -> Option<&Verse> {
        self.verses
            .binary_search_by_key(&verse_id, Verse::id)
            .ok()
            .map(|idx| &self.verses[idx])
    }

    /// Returns the verses whose id lies in `start..=end`, ascending.
    ///
    /// Empty when the range is reversed or nothing falls inside it.
    pub fn verses_in(&self, start: u32, end: u32) -> &[Verse] {
        if start > end {
            return &[];
        }
        let from = self.verses.partition_point(|v| v.id() < start);
        let to = self.verses.partition_point(|v| v.id() <= end);
        &self.verses[from..to]
    }

    fn sort(&mut self) {
        self.verses.sort_by_key(Verse::id);
    }
}

/// A book node as numbered by one translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Book {
    book_id: u32,
    /// Human-readable name supplied by the translation data, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    book_name: Option<String>,
    #[serde(default)]
    chapters: Vec<Chapter>,
}

impl Book {
    pub fn new(book_id: u32, book_name: Option<&str>, mut chapters: Vec<Chapter>) -> Self {
        chapters.sort_by_key(Chapter::id);
        Self {
            book_id,
            book_name: book_name.map(str::to_string),
            chapters,
        }
    }

    pub fn id(&self) -> u32 {
        self.book_id
    }

    /// The translation's own name for this book, ignoring blank names.
    pub fn name(&self) -> Option<&str> {
        self.book_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn chapter(&self, chapter_id: u32) -> Option<&Chapter> {
        self.chapters
            .binary_search_by_key(&chapter_id, Chapter::id)
            .ok()
            .map(|idx| &self.chapters[idx])
    }

    fn sort(&mut self) {
        self.chapters.sort_by_key(Chapter::id);
        self.chapters.iter_mut().for_each(Chapter::sort);
    }
}

/// The full text of one translation, held in memory.
///
/// Every level is sorted ascending by id on construction, so iteration
/// follows canonical document order and lookups can binary search.
/// A tree is never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DocumentFile", rename_all = "PascalCase")]
pub struct DocumentTree {
    #[serde(skip_serializing_if = "Option::is_none")]
    translation: Option<TranslationCode>,
    books: Vec<Book>,
}

/// On-disk shape of a translation document, before sorting.
#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DocumentFile {
    #[serde(default)]
    translation: Option<TranslationCode>,
    #[serde(default)]
    books: Vec<Book>,
}

impl From<DocumentFile> for DocumentTree {
    fn from(file: DocumentFile) -> Self {
        DocumentTree::new(file.translation, file.books)
    }
}

impl DocumentTree {
    pub fn new(translation: Option<TranslationCode>, mut books: Vec<Book>) -> Self {
        books.sort_by_key(Book::id);
        books.iter_mut().for_each(Book::sort);
        Self { translation, books }
    }

    /// The translation code declared by the data file, if any.
    pub fn translation(&self) -> Option<&TranslationCode> {
        self.translation.as_ref()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn book(&self, book_id: u32) -> Option<&Book> {
        self.books
            .binary_search_by_key(&book_id, Book::id)
            .ok()
            .map(|idx| &self.books[idx])
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Total number of verses across all books.
    pub fn verse_count(&self) -> usize {
        self.books
            .iter()
            .flat_map(|b| b.chapters())
            .map(|c| c.verses().len())
            .sum()
    }
}

/// Which verses of a chapter a query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerseSpec {
    /// No verse given: the whole chapter (or whole book without a chapter).
    All,
    Single(u32),
    /// Inclusive range `start..=end`.
    Range(u32, u32),
}

impl fmt::Display for VerseSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VerseSpec::All => Ok(()),
            VerseSpec::Single(verse) => write!(f, "{}", verse),
            VerseSpec::Range(start, end) => write!(f, "{}-{}", start, end),
        }
    }
}

/// A structured reference, independent of any translation's numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedQuery {
    pub book: BookCode,
    /// `None` when the input named only a book.
    pub chapter: Option<u32>,
    pub verse: VerseSpec,
}

impl ParsedQuery {
    /// The chapter as typed, or an empty string for a whole-book query.
    pub fn chapter_label(&self) -> String {
        self.chapter.map(|c| c.to_string()).unwrap_or_default()
    }
}

/// A resolved passage or search hit, ready for a renderer.
///
/// Text is raw translation text; escaping for display is the consumer's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseResult {
    pub reference: String,
    pub text: String,
    pub book: BookCode,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter() -> Chapter {
        Chapter::new(
            1,
            vec![
                Verse::new(3, "c"),
                Verse::new(1, "a"),
                Verse::new(2, "b"),
                Verse::new(5, "e"),
            ],
        )
    }

    #[test]
    fn test_chapter_sorts_verses_on_construction() {
        let ids: Vec<u32> = chapter().verses().iter().map(Verse::id).collect();
        assert_eq!(ids, vec![1, 2, 3, 5]);
    }

    #[test]
    fn test_verses_in_is_inclusive_and_skips_gaps() {
        let chapter = chapter();
        let ids: Vec<u32> = chapter.verses_in(2, 5).iter().map(Verse::id).collect();
        assert_eq!(ids, vec![2, 3, 5]);
        assert!(chapter.verses_in(6, 9).is_empty());
        assert!(chapter.verses_in(3, 1).is_empty());
    }

    #[test]
    fn test_tree_lookup_is_by_id_not_position() {
        let tree = DocumentTree::new(
            None,
            vec![
                Book::new(43, Some("От Иоанна"), vec![Chapter::new(3, vec![])]),
                Book::new(1, Some("Бытие"), vec![Chapter::new(1, vec![])]),
            ],
        );
        assert_eq!(tree.books()[0].id(), 1);
        assert_eq!(tree.book(43).and_then(Book::name), Some("От Иоанна"));
        assert!(tree.book(2).is_none());
    }

    #[test]
    fn test_blank_book_name_is_ignored() {
        let book = Book::new(1, Some("  "), vec![]);
        assert_eq!(book.name(), None);
    }

    #[test]
    fn test_verse_spec_display() {
        assert_eq!(VerseSpec::All.to_string(), "");
        assert_eq!(VerseSpec::Single(16).to_string(), "16");
        assert_eq!(VerseSpec::Range(1, 3).to_string(), "1-3");
    }

    #[test]
    fn test_translation_code_is_upper_case() {
        assert_eq!(TranslationCode::new(" rst "), TranslationCode::RST);
        assert_eq!(TranslationCode::KTB.as_str(), "KTB");
    }
}
