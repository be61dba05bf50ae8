//! Canonical registry: book aliases, per-translation book ids, and titles.
//!
//! Resolution is always two-staged:
//!
//! ```text
//! "1 Кор" ──normalize──▶ "1кор" ──aliases──▶ BookCode::FirstCorinthians
//! (FirstCorinthians, RST) ──book ids──▶ 53
//! (FirstCorinthians, NRT) ──book ids──▶ 46
//! ```
//!
//! Alias resolution knows nothing about translations and id mapping knows
//! nothing about languages. Numeric book ids exist only in the per-translation
//! tables held here.

mod aliases;
mod tables;

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::OnceLock;

use log::{debug, trace, warn};
use regex::Regex;

use super::types::book::BookCode;
use super::types::error::{BibleError, Result};
use super::types::models::{DocumentTree, TranslationCode};

/// Title used when neither the tree nor the static table names a book.
pub const PLACEHOLDER_TITLE: &str = "Библия";

/// Leading ordinal of a numbered book: a digit with optional Russian suffix,
/// or an ordinal word.
static ORDINAL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn ordinal_regex() -> &'static Regex {
    ORDINAL_PATTERN.get_or_init(|| {
        Regex::new(
            r"^(?:(?P<word>первое|первая|первый|второе|вторая|второй|третье|третья|третий|четвертое|четвертая|first|second|third|fourth|1st|2nd|3rd|4th|iii|ii|iv|i)\s+|(?P<digit>[1-4])(?:\s*-\s*(?:ое|ая|ье|ья|е|я)\s+|[ея]\s+|\s*-\s*|\s*))",
        )
        .expect("Invalid ordinal regex pattern")
    })
}

fn ordinal_word_value(word: &str) -> &'static str {
    match word {
        "первое" | "первая" | "первый" | "first" | "1st" | "i" => "1",
        "второе" | "вторая" | "второй" | "second" | "2nd" | "ii" => "2",
        "третье" | "третья" | "третий" | "third" | "3rd" | "iii" => "3",
        _ => "4",
    }
}

/// Normalizes a user-typed book name into alias-table form.
///
/// Lower-cases, folds `ё` to `е`, turns dots into spaces, collapses
/// whitespace, and glues a leading ordinal to the name, so that
/// `"1 Кор."`, `"1-е кор"`, `"первое кор"` and `"1КОР"` all become `"1кор"`.
pub fn normalize_alias(input: &str) -> String {
    let lowered = input.to_lowercase().replace('ё', "е").replace('.', " ");
    let collapsed = lowered.split_whitespace().collect::<Vec<_>>().join(" ");

    match ordinal_regex().captures(&collapsed) {
        Some(caps) => {
            let number = match (caps.name("word"), caps.name("digit")) {
                (Some(word), _) => ordinal_word_value(word.as_str()),
                (None, Some(digit)) => digit.as_str(),
                (None, None) => return collapsed,
            };
            let rest = &collapsed[caps.get(0).map_or(0, |m| m.end())..];
            if rest.is_empty() {
                // A bare number is not a book name.
                return collapsed;
            }
            format!("{}{}", number, rest)
        }
        None => collapsed,
    }
}

/// Book numbering of one translation, indexed both ways.
#[derive(Debug, Default)]
struct TranslationBooks {
    by_code: HashMap<BookCode, u32>,
    by_id: HashMap<u32, BookCode>,
}

/// Read-only lookup tables for alias, id, and title resolution.
///
/// Build one with [`RegistryBuilder`], or use the shared built-in registry
/// from [`Registry::standard`].
#[derive(Debug)]
pub struct Registry {
    aliases: HashMap<String, BookCode>,
    translations: HashMap<TranslationCode, TranslationBooks>,
    titles: HashMap<BookCode, String>,
}

static STANDARD: OnceLock<Registry> = OnceLock::new();

impl Registry {
    /// The built-in registry: Russian and English aliases, RST/NRT/KTB numbering,
    /// Russian titles.
    pub fn standard() -> &'static Registry {
        STANDARD.get_or_init(|| {
            RegistryBuilder::standard()
                .build()
                .expect("Built-in registry tables are inconsistent")
        })
    }

    /// Resolves user input to a canonical book code.
    ///
    /// `None` means "not a book name"; callers typically fall back to
    /// full-text search.
    pub fn resolve_alias(&self, input: &str) -> Option<BookCode> {
        let key = normalize_alias(input);
        if key.is_empty() {
            return None;
        }
        let resolved = self.aliases.get(&key).copied();
        if resolved.is_none() {
            debug!("No book alias for '{}' (normalized '{}')", input, key);
        }
        resolved
    }

    /// Returns the numeric id a translation uses for a book.
    ///
    /// `Ok(None)` means the translation does not contain that book.
    ///
    /// # Errors
    /// `UnsupportedTranslation` when no numbering is configured for `translation`.
    pub fn book_id(&self, book: BookCode, translation: &TranslationCode) -> Result<Option<u32>> {
        let books = self.translation_books(translation)?;
        Ok(books.by_code.get(&book).copied())
    }

    /// Reverse of [`Registry::book_id`]: which book a translation means by `book_id`.
    pub fn book_for_id(&self, translation: &TranslationCode, book_id: u32) -> Result<Option<BookCode>> {
        let books = self.translation_books(translation)?;
        Ok(books.by_id.get(&book_id).copied())
    }

    /// Whether a book id table exists for `translation`.
    pub fn supports(&self, translation: &TranslationCode) -> bool {
        self.translations.contains_key(translation)
    }

    /// Configured translation codes, sorted.
    pub fn translations(&self) -> Vec<TranslationCode> {
        let mut codes: Vec<TranslationCode> = self.translations.keys().cloned().collect();
        codes.sort();
        codes
    }

    /// The title to show for a book.
    ///
    /// Prefers the loaded tree's own name for the book, then the static title,
    /// then [`PLACEHOLDER_TITLE`]. Never fails: an unsupported translation
    /// simply skips the tree lookup.
    pub fn display_title(
        &self,
        book: BookCode,
        tree: Option<&DocumentTree>,
        translation: &TranslationCode,
    ) -> String {
        let tree_name = tree.and_then(|tree| {
            let book_id = self.book_id(book, translation).ok().flatten()?;
            tree.book(book_id)?.name().map(str::to_string)
        });
        tree_name
            .or_else(|| self.titles.get(&book).cloned())
            .unwrap_or_else(|| PLACEHOLDER_TITLE.to_string())
    }

    /// Number of distinct normalized aliases.
    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    fn translation_books(&self, translation: &TranslationCode) -> Result<&TranslationBooks> {
        self.translations
            .get(translation)
            .ok_or_else(|| BibleError::UnsupportedTranslation(translation.to_string()))
    }
}

/// Collects registry tables and validates them into a [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    aliases: Vec<(String, BookCode)>,
    /// Aliases taken from translation data; collisions are skipped, not fatal.
    soft_aliases: Vec<(String, BookCode)>,
    translations: Vec<(TranslationCode, Vec<(BookCode, u32)>)>,
    titles: HashMap<BookCode, String>,
}

impl RegistryBuilder {
    /// An empty builder with no aliases, translations or titles.
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder preloaded with the built-in tables.
    pub fn standard() -> Self {
        let mut builder = Self::new();
        for book in BookCode::ALL {
            builder = builder.alias(book.as_str(), *book);
        }
        for (book, names) in aliases::ALIASES {
            for name in names.iter() {
                builder = builder.alias(name, *book);
            }
        }
        for (book, title) in tables::TITLES {
            builder = builder.title(*book, title);
        }
        builder
            .translation(TranslationCode::RST, tables::sequential(tables::SYNODAL_ORDER))
            .translation(TranslationCode::NRT, tables::sequential(BookCode::ALL))
            .translation(TranslationCode::KTB, tables::sequential(BookCode::ALL))
    }

    pub fn alias(mut self, alias: &str, book: BookCode) -> Self {
        self.aliases.push((normalize_alias(alias), book));
        self
    }

    /// Sets (or replaces) the book numbering of a translation.
    pub fn translation(
        mut self,
        code: TranslationCode,
        ids: impl IntoIterator<Item = (BookCode, u32)>,
    ) -> Self {
        let ids: Vec<(BookCode, u32)> = ids.into_iter().collect();
        self.translations.retain(|(existing, _)| *existing != code);
        self.translations.push((code, ids));
        self
    }

    pub fn title(mut self, book: BookCode, title: &str) -> Self {
        self.titles.insert(book, title.to_string());
        self
    }

    /// Registers the book names found in a loaded tree as aliases.
    ///
    /// Names are mapped to books through the numbering of `translation`, which
    /// must be configured before this call. Books without a name or without a
    /// mapping are ignored.
    pub fn tree_aliases(mut self, translation: &TranslationCode, tree: &DocumentTree) -> Self {
        let Some((_, ids)) = self.translations.iter().find(|(code, _)| code == translation) else {
            warn!("No numbering for {}, ignoring its book names", translation);
            return self;
        };
        let by_id: HashMap<u32, BookCode> = ids.iter().map(|(book, id)| (*id, *book)).collect();
        for book in tree.books() {
            if let (Some(name), Some(code)) = (book.name(), by_id.get(&book.id())) {
                self.soft_aliases.push((normalize_alias(name), *code));
            }
        }
        self
    }

    /// Validates the tables and produces a read-only registry.
    ///
    /// # Errors
    /// - `AliasConflict` if one normalized alias names two different books
    /// - `InvalidFormat` if a translation gives two books the same id, or
    ///   an id of zero
    pub fn build(self) -> Result<Registry> {
        let mut aliases: HashMap<String, BookCode> = HashMap::new();
        for (alias, book) in self.aliases {
            if alias.is_empty() {
                continue;
            }
            match aliases.entry(alias) {
                Entry::Occupied(entry) if *entry.get() != book => {
                    return Err(BibleError::AliasConflict {
                        alias: entry.key().clone(),
                        existing: entry.get().as_str(),
                        new: book.as_str(),
                    });
                }
                Entry::Occupied(_) => {}
                Entry::Vacant(entry) => {
                    entry.insert(book);
                }
            }
        }

        for (alias, book) in self.soft_aliases {
            match aliases.get(&alias) {
                Some(existing) if *existing != book => warn!(
                    "Book name '{}' for {} collides with alias of {}, skipping",
                    alias, book, existing
                ),
                Some(_) => {}
                None => {
                    trace!("Adding translation book name '{}' for {}", alias, book);
                    aliases.insert(alias, book);
                }
            }
        }

        let mut translations = HashMap::new();
        for (code, ids) in self.translations {
            let mut books = TranslationBooks::default();
            for (book, id) in ids {
                if id == 0 {
                    return Err(BibleError::InvalidFormat(format!(
                        "{}: book {} has id 0, ids must be positive",
                        code, book
                    )));
                }
                if let Some(other) = books.by_id.insert(id, book) {
                    if other != book {
                        return Err(BibleError::InvalidFormat(format!(
                            "{}: books {} and {} share id {}",
                            code, other, book, id
                        )));
                    }
                }
                books.by_code.insert(book, id);
            }
            debug!("Registered {} books for {}", books.by_code.len(), code);
            translations.insert(code, books);
        }

        Ok(Registry {
            aliases,
            translations,
            titles: self.titles,
        })
    }
}
