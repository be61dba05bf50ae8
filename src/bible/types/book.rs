//! The closed set of canonical books.
//!
//! A [`BookCode`] names one book independently of any translation. Codes are
//! rendered as three-character USFM identifiers (`GEN`, `JHN`, `1CO`).
//! Translations attach their own numeric ids to these codes through the
//! registry; nothing else in the crate hard-codes a numeric book id.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! books {
    ($($variant:ident => $code:literal),+ $(,)?) => {
        /// Translation-independent identifier of one of the 66 books.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(into = "String", try_from = "String")]
        pub enum BookCode {
            $($variant),+
        }

        impl BookCode {
            /// Every book, in protestant canonical order (Genesis first, Revelation last).
            pub const ALL: &'static [BookCode] = &[$(BookCode::$variant),+];

            /// The USFM code of this book.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(BookCode::$variant => $code),+
                }
            }
        }
    };
}

books! {
    Genesis => "GEN",
    Exodus => "EXO",
    Leviticus => "LEV",
    Numbers => "NUM",
    Deuteronomy => "DEU",
    Joshua => "JOS",
    Judges => "JDG",
    Ruth => "RUT",
    FirstSamuel => "1SA",
    SecondSamuel => "2SA",
    FirstKings => "1KI",
    SecondKings => "2KI",
    FirstChronicles => "1CH",
    SecondChronicles => "2CH",
    Ezra => "EZR",
    Nehemiah => "NEH",
    Esther => "EST",
    Job => "JOB",
    Psalms => "PSA",
    Proverbs => "PRO",
    Ecclesiastes => "ECC",
    SongOfSongs => "SNG",
    Isaiah => "ISA",
    Jeremiah => "JER",
    Lamentations => "LAM",
    Ezekiel => "EZK",
    Daniel => "DAN",
    Hosea => "HOS",
    Joel => "JOL",
    Amos => "AMO",
    Obadiah => "OBA",
    Jonah => "JON",
    Micah => "MIC",
    Nahum => "NAM",
    Habakkuk => "HAB",
    Zephaniah => "ZEP",
    Haggai => "HAG",
    Zechariah => "ZEC",
    Malachi => "MAL",
    Matthew => "MAT",
    Mark => "MRK",
    Luke => "LUK",
    John => "JHN",
    Acts => "ACT",
    Romans => "ROM",
    FirstCorinthians => "1CO",
    SecondCorinthians => "2CO",
    Galatians => "GAL",
    Ephesians => "EPH",
    Philippians => "PHP",
    Colossians => "COL",
    FirstThessalonians => "1TH",
    SecondThessalonians => "2TH",
    FirstTimothy => "1TI",
    SecondTimothy => "2TI",
    Titus => "TIT",
    Philemon => "PHM",
    Hebrews => "HEB",
    James => "JAS",
    FirstPeter => "1PE",
    SecondPeter => "2PE",
    FirstJohn => "1JN",
    SecondJohn => "2JN",
    ThirdJohn => "3JN",
    Jude => "JUD",
    Revelation => "REV",
}

impl BookCode {
    /// Position of the book in protestant canonical order, starting at 1.
    pub fn protestant_number(&self) -> u32 {
        // ALL is declared in the same order as the enum.
        *self as u32 + 1
    }
}

impl fmt::Display for BookCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookCode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim();
        BookCode::ALL
            .iter()
            .copied()
            .find(|book| book.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown book code: {}", s))
    }
}

impl From<BookCode> for String {
    fn from(book: BookCode) -> Self {
        book.as_str().to_string()
    }
}

impl TryFrom<String> for BookCode {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}
