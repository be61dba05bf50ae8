//! Sequential access to the verses of a document tree.
//!
//! [`Verses`] walks a [`DocumentTree`] in document order (book, chapter and
//! verse ascending) and yields each verse together with its ancestors. It is
//! lazy, so consumers that stop early (such as a capped search) never touch
//! the rest of the tree.
//!
//! # Example
//! ```
//! # use bible_lookup::{Book, Chapter, DocumentTree, Verse};
//! # let tree = DocumentTree::new(None, vec![
//! #     Book::new(1, None, vec![Chapter::new(1, vec![Verse::new(1, "In the beginning")])]),
//! # ]);
//! for located in tree.iter_verses() {
//!     println!("{}:{}:{} {}", located.book.id(), located.chapter.id(), located.verse.id(), located.verse.text());
//! }
//! ```

use std::slice::Iter;

use super::types::models::{Book, Chapter, DocumentTree, Verse};

/// A verse with the book and chapter that contain it.
#[derive(Debug, Clone, Copy)]
pub struct LocatedVerse<'a> {
    pub book: &'a Book,
    pub chapter: &'a Chapter,
    pub verse: &'a Verse,
}

/// Iterator over every verse of a tree in document order.
///
/// Created by [`DocumentTree::iter_verses`].
pub struct Verses<'a> {
    books: Iter<'a, Book>,
    current_book: Option<&'a Book>,
    chapters: Iter<'a, Chapter>,
    current_chapter: Option<&'a Chapter>,
    verses: Iter<'a, Verse>,
}

impl<'a> Verses<'a> {
    pub(super) fn new(tree: &'a DocumentTree) -> Self {
        Self::over_books(tree.books())
    }

    /// Iterates only the given books (used for whole-book reads).
    pub(super) fn over_books(books: &'a [Book]) -> Self {
        Self {
            books: books.iter(),
            current_book: None,
            chapters: Iter::default(),
            current_chapter: None,
            verses: Iter::default(),
        }
    }
}

impl<'a> Iterator for Verses<'a> {
    type Item = LocatedVerse<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // Try to get next verse from current chapter
            if let (Some(verse), Some(book), Some(chapter)) =
                (self.verses.next(), self.current_book, self.current_chapter)
            {
                return Some(LocatedVerse { book, chapter, verse });
            }

            // Chapter exhausted, move to the next one in this book
            if let Some(chapter) = self.chapters.next() {
                self.current_chapter = Some(chapter);
                self.verses = chapter.verses().iter();
                continue;
            }

            // Book exhausted, move to the next book
            let book = self.books.next()?;
            self.current_book = Some(book);
            self.current_chapter = None;
            self.chapters = book.chapters().iter();
        }
    }
}

impl DocumentTree {
    /// Returns an iterator over all verses in document order.
    pub fn iter_verses(&self) -> Verses<'_> {
        Verses::new(self)
    }
}
