//! Decoding translation data files into a [`DocumentTree`].
//!
//! Two layouts are accepted:
//! - plain JSON: `{"Translation": "RST", "Books": [...]}`
//! - the legacy script form, where the same object is assigned to a
//!   variable (`const NRT_DATA = {...};` or `window.BIBLE_DATA = {...};`).
//!   Anything after the object, such as a second assignment, is ignored.
//!   Comments before the assignment are skipped.
//!
//! Text encoding is taken from the byte-order mark; files without one are
//! read as UTF-8.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use encoding_rs::{Encoding, UTF_8};
use log::{debug, info};
use regex::Regex;
use serde::Deserialize;

use super::types::error::{BibleError, Result};
use super::types::models::DocumentTree;

/// Reads and decodes a translation file.
///
/// # Errors
/// - `Io` if the file cannot be read
/// - `Json` if the payload is not a valid document
/// - `InvalidFormat` if there is no object or it contains no books
pub fn load(path: impl AsRef<Path>) -> Result<DocumentTree> {
    let path = path.as_ref();
    info!("Loading translation file: {}", path.display());
    let bytes = fs::read(path)?;
    let tree = parse_bytes(&bytes)?;
    info!(
        "Loaded {}: {} books, {} verses",
        path.display(),
        tree.books().len(),
        tree.verse_count()
    );
    Ok(tree)
}

/// Decodes raw file bytes, honoring a UTF-8 or UTF-16 byte-order mark.
pub fn parse_bytes(bytes: &[u8]) -> Result<DocumentTree> {
    let (encoding, bom_len) = Encoding::for_bom(bytes).unwrap_or((UTF_8, 0));
    debug!("Decoding translation data as {} (BOM {} bytes)", encoding.name(), bom_len);
    let (text, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
    if had_errors {
        return Err(BibleError::InvalidFormat(format!(
            "Translation data is not valid {}",
            encoding.name()
        )));
    }
    parse_str(&text)
}

/// Leading comments, whitespace and an optional `const X =` or
/// `window.X =` assignment before the document object.
static SCRIPT_PREFIX: OnceLock<Regex> = OnceLock::new();

fn script_prefix_regex() -> &'static Regex {
    SCRIPT_PREFIX.get_or_init(|| {
        Regex::new(
            r"^(?:\s+|//[^\n]*|/\*(?s:.*?)\*/)*(?:(?:(?:const|let|var)\s+)?(?:window\.)?[A-Za-z_$][\w$]*\s*=\s*)?",
        )
        .expect("Invalid script prefix regex pattern")
    })
}

/// Parses a document from text in either accepted layout.
pub fn parse_str(text: &str) -> Result<DocumentTree> {
    let start = script_prefix_regex().find(text).map_or(0, |m| m.end());
    if !text[start..].starts_with('{') {
        return Err(BibleError::InvalidFormat("No JSON object found".to_string()));
    }
    if start > 0 {
        debug!("Skipping {} bytes of script prefix", start);
    }

    // Deserialize only the first value; trailing statements are not our concern.
    let mut deserializer = serde_json::Deserializer::from_str(&text[start..]);
    let tree = DocumentTree::deserialize(&mut deserializer)?;

    if tree.is_empty() {
        return Err(BibleError::InvalidFormat("Translation has no books".to_string()));
    }
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bible::types::models::TranslationCode;

    const SAMPLE: &str = r#"{"Translation":"NRT","Books":[{"BookId":43,"Chapters":[{"ChapterId":3,"Verses":[{"VerseId":17,"Text":"b"},{"VerseId":16,"Text":"a"}]}]},{"BookId":1,"BookName":"Бытие","Chapters":[]}]}"#;

    #[test]
    fn test_parse_plain_json() {
        let tree = parse_str(SAMPLE).unwrap();
        assert_eq!(tree.translation(), Some(&TranslationCode::NRT));
        assert_eq!(tree.books()[0].id(), 1);
        assert_eq!(tree.books()[0].name(), Some("Бытие"));
        let chapter = tree.book(43).and_then(|b| b.chapter(3)).unwrap();
        assert_eq!(chapter.verses()[0].text(), "a");
    }

    #[test]
    fn test_parse_script_wrapper_with_trailing_statement() {
        let script = format!(
            "const KTB_DATA = {};\nconst KTB_BOOK_MAP = {{\"жохан\":43}};",
            SAMPLE
        );
        let tree = parse_str(&script).unwrap();
        assert_eq!(tree.books().len(), 2);

        let window = format!("window.BIBLE_DATA = {};", SAMPLE);
        assert_eq!(parse_str(&window).unwrap(), tree);
    }

    #[test]
    fn test_braces_in_leading_comments_are_skipped() {
        let line = format!("// Bible data {{v2}}\nconst NRT_DATA = {};", SAMPLE);
        assert_eq!(parse_str(&line).unwrap().books().len(), 2);

        let block = format!("/* generated {{ by convert }} */\n\nwindow.BIBLE_DATA={}", SAMPLE);
        assert_eq!(parse_str(&block).unwrap().books().len(), 2);

        let banner = format!("/* {{ */ var x = [1];\nconst DATA = {};", SAMPLE);
        assert!(matches!(parse_str(&banner), Err(BibleError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_bytes_with_boms() {
        let mut utf8 = vec![0xEF, 0xBB, 0xBF];
        utf8.extend_from_slice(SAMPLE.as_bytes());
        assert_eq!(parse_bytes(&utf8).unwrap().books().len(), 2);

        let mut utf16 = vec![0xFF, 0xFE];
        for unit in SAMPLE.encode_utf16() {
            utf16.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(parse_bytes(&utf16).unwrap().books().len(), 2);
    }

    #[test]
    fn test_rejects_missing_object_and_empty_books() {
        assert!(matches!(parse_str("const X = 1;"), Err(BibleError::InvalidFormat(_))));
        assert!(matches!(parse_str(r#"{"Books":[]}"#), Err(BibleError::InvalidFormat(_))));
        assert!(matches!(parse_str(r#"{"Books":[{"BookId":"x"}]}"#), Err(BibleError::Json(_))));
    }

    #[test]
    fn test_rejects_invalid_utf8() {
        assert!(matches!(parse_bytes(&[b'{', 0xFF, 0xFE, 0xFD]), Err(BibleError::InvalidFormat(_))));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        assert!(matches!(load("/nonexistent/bible_data.js"), Err(BibleError::Io(_))));
    }
}
