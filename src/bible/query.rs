//! Free-text reference parsing.
//!
//! Turns loosely typed input such as `"ин 3:16"`, `"1 Кор 13 4-7"` or
//! `"Бытие 1"` into a [`ParsedQuery`]. The result names a canonical book and is
//! independent of any translation's numbering.

use std::sync::OnceLock;

use log::{debug, trace};
use regex::Regex;

use super::registry::Registry;
use super::types::models::{ParsedQuery, VerseSpec};

/// Reference layout: book, then optional chapter, then optional verse or
/// verse range. Chapter and verse are separated by a colon or a space.
///
/// The book may start with a digit (numbered books) but otherwise contains
/// no digits, so the first free-standing number begins the chapter.
static REFERENCE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn reference_regex() -> &'static Regex {
    REFERENCE_PATTERN.get_or_init(|| {
        Regex::new(
            r"^(?P<book>[1-4]?\s*[^\d\s:][^\d:]*?)\.?(?:\s*(?P<chapter>\d+)(?:(?:\s*:\s*|\s+)(?P<verse>\d+)(?:\s*[-–—]\s*(?P<end>\d+))?)?)?$",
        )
        .expect("Invalid reference regex pattern")
    })
}

/// Parses a reference against the given registry.
///
/// Returns `None` for empty input, for input that does not follow the
/// book/chapter/verse layout, and when the book name is unknown. Callers
/// use `None` to fall through to full-text search.
pub fn parse_query(registry: &Registry, raw: &str) -> Option<ParsedQuery> {
    let input = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if input.is_empty() {
        return None;
    }

    let Some(caps) = reference_regex().captures(&input) else {
        debug!("'{}' does not look like a reference", input);
        return None;
    };

    let book_token = caps.name("book")?.as_str();
    let book = registry.resolve_alias(book_token)?;

    // Numbers too large for u32 cannot address anything.
    let number = |name: &str| -> Option<Option<u32>> {
        match caps.name(name) {
            Some(m) => m.as_str().parse::<u32>().ok().map(Some),
            None => Some(None),
        }
    };
    let chapter = number("chapter")?;
    let verse = match (number("verse")?, number("end")?) {
        (Some(start), Some(end)) => VerseSpec::Range(start, end),
        (Some(single), None) => VerseSpec::Single(single),
        _ => VerseSpec::All,
    };

    let parsed = ParsedQuery { book, chapter, verse };
    trace!("Parsed '{}' as {:?}", raw, parsed);
    Some(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bible::types::book::BookCode;

    fn parse(raw: &str) -> Option<ParsedQuery> {
        parse_query(Registry::standard(), raw)
    }

    #[test]
    fn test_parse_simple_reference() {
        let parsed = parse("ин 3 16").unwrap();
        assert_eq!(parsed.book, BookCode::John);
        assert_eq!(parsed.chapter, Some(3));
        assert_eq!(parsed.verse, VerseSpec::Single(16));
        assert_eq!(parsed.chapter_label(), "3");
        assert_eq!(parsed.verse.to_string(), "16");
    }

    #[test]
    fn test_format_variants_parse_identically() {
        let expected = parse("ин 3 16");
        for variant in ["ин 3:16", "  ин   3   16  ", "ИН 3 16", "ин\t3 :16", "Ин. 3:16", "ин3:16"] {
            assert_eq!(parse(variant), expected, "variant {:?}", variant);
        }
    }

    #[test]
    fn test_parse_verse_range() {
        let parsed = parse("быт 1 1-3").unwrap();
        assert_eq!(parsed.book, BookCode::Genesis);
        assert_eq!(parsed.chapter, Some(1));
        assert_eq!(parsed.verse, VerseSpec::Range(1, 3));
        assert_eq!(parsed.verse.to_string(), "1-3");
        assert_eq!(parse("быт 1:1 – 3"), Some(parsed));
    }

    #[test]
    fn test_numbered_books_glued_or_separated() {
        let glued = parse("1кор 13 4").unwrap();
        assert_eq!(glued.book, BookCode::FirstCorinthians);
        assert_eq!(glued.chapter, Some(13));
        assert_eq!(glued.verse, VerseSpec::Single(4));
        assert_eq!(parse("1 кор 13 4"), Some(glued));
        assert_eq!(parse("1-е Коринфянам 13:4"), Some(glued));
    }

    #[test]
    fn test_book_only_and_chapter_only() {
        let book_only = parse("Бытие").unwrap();
        assert_eq!(book_only.book, BookCode::Genesis);
        assert_eq!(book_only.chapter, None);
        assert_eq!(book_only.verse, VerseSpec::All);
        assert_eq!(book_only.chapter_label(), "");

        let chapter_only = parse("пс 22").unwrap();
        assert_eq!(chapter_only.book, BookCode::Psalms);
        assert_eq!(chapter_only.chapter, Some(22));
        assert_eq!(chapter_only.verse, VerseSpec::All);
    }

    #[test]
    fn test_multi_word_book_names() {
        let parsed = parse("песнь песней 2 1").unwrap();
        assert_eq!(parsed.book, BookCode::SongOfSongs);
        assert_eq!(parse("иисус навин 1:9").map(|p| p.book), Some(BookCode::Joshua));
    }

    #[test]
    fn test_invalid_queries_return_none() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("   "), None);
        assert_eq!(parse("hello"), None);
        assert_eq!(parse("xyz 1 1"), None);
        assert_eq!(parse("3 16"), None);
        assert_eq!(parse("ин 3:16 мир"), None);
        assert_eq!(parse("ин 99999999999 1"), None);
    }

    #[test]
    fn test_reversed_range_is_kept_as_typed() {
        assert_eq!(parse("ин 3 18-16").map(|p| p.verse), Some(VerseSpec::Range(18, 16)));
    }
}
