//! Built-in book aliases.
//!
//! Entries are written the way users type them; the registry normalizes each
//! one before inserting it, so spacing and case here do not matter. USFM codes
//! (`gen`, `jhn`, `1co`, ...) are added automatically for every book.

use crate::bible::types::book::BookCode::{self, *};

pub(super) const ALIASES: &[(BookCode, &[&str])] = &[
    // Old Testament
    (Genesis, &["быт", "бытие", "быт.", "gen", "gn", "genesis"]),
    (Exodus, &["исх", "исход", "ex", "exod", "exodus"]),
    (Leviticus, &["лев", "левит", "lv", "leviticus"]),
    (Numbers, &["чис", "числ", "числа", "nm", "numbers"]),
    (Deuteronomy, &["втор", "второзак", "второзаконие", "dt", "deut", "deuteronomy"]),
    (Joshua, &["нав", "навин", "иис нав", "иисус навин", "иисуса навина", "josh", "joshua"]),
    (Judges, &["суд", "судьи", "judg", "judges"]),
    (Ruth, &["руф", "руфь", "ruth"]),
    (FirstSamuel, &["1цар", "1 царств", "1сам", "1 самуила", "1sam", "1 samuel"]),
    (SecondSamuel, &["2цар", "2 царств", "2сам", "2 самуила", "2sam", "2 samuel"]),
    (FirstKings, &["3цар", "3 царств", "1царей", "1 царей", "1kgs", "1 kings"]),
    (SecondKings, &["4цар", "4 царств", "2царей", "2 царей", "2kgs", "2 kings"]),
    (FirstChronicles, &["1пар", "1 паралипоменон", "1лет", "1 летопись", "1chr", "1 chronicles"]),
    (SecondChronicles, &["2пар", "2 паралипоменон", "2лет", "2 летопись", "2chr", "2 chronicles"]),
    (Ezra, &["езд", "ездр", "ездра", "ezra"]),
    (Nehemiah, &["неем", "неемия", "neh", "nehemiah"]),
    (Esther, &["есф", "есфирь", "esth", "esther"]),
    (Job, &["иов", "job"]),
    (Psalms, &["пс", "псал", "псалом", "псалмы", "псалтирь", "ps", "psalm", "psalms"]),
    (Proverbs, &["прит", "притч", "притчи", "prov", "proverbs"]),
    (Ecclesiastes, &["еккл", "екклесиаст", "экклезиаст", "эккл", "eccl", "ecclesiastes"]),
    (SongOfSongs, &["песн", "песнь", "песнь песней", "song", "song of songs", "song of solomon"]),
    (Isaiah, &["ис", "иса", "исаия", "isa", "isaiah"]),
    (Jeremiah, &["иер", "иерем", "иеремия", "jer", "jeremiah"]),
    (Lamentations, &["плач", "плач иер", "плач иеремии", "lam", "lamentations"]),
    (Ezekiel, &["иез", "иезек", "иезекииль", "ezek", "ezekiel"]),
    (Daniel, &["дан", "даниил", "dan", "daniel"]),
    (Hosea, &["ос", "осия", "hos", "hosea"]),
    (Joel, &["иоил", "иоиль", "joel"]),
    (Amos, &["ам", "амос", "amos"]),
    (Obadiah, &["авд", "авдий", "obad", "obadiah"]),
    (Jonah, &["ион", "иона", "jonah"]),
    (Micah, &["мих", "михей", "mic", "micah"]),
    (Nahum, &["наум", "nah", "nahum"]),
    (Habakkuk, &["авв", "аввакум", "habakkuk"]),
    (Zephaniah, &["соф", "софония", "zeph", "zephaniah"]),
    (Haggai, &["агг", "аггей", "haggai"]),
    (Zechariah, &["зах", "захария", "zech", "zechariah"]),
    (Malachi, &["мал", "малахия", "malachi"]),
    // New Testament
    (Matthew, &["мф", "мат", "матф", "от матфея", "матфея", "matt", "mt", "matthew"]),
    (Mark, &["мк", "мар", "марк", "от марка", "марка", "mk", "mark"]),
    (Luke, &["лк", "лук", "от луки", "луки", "lk", "luke"]),
    (John, &["ин", "иоан", "от иоанна", "иоанна", "jn", "john"]),
    (Acts, &["деян", "деяния", "деяния апостолов", "acts"]),
    (James, &["иак", "иаков", "иакова", "jas", "james"]),
    (FirstPeter, &["1пет", "1 петр", "1 петра", "1pet", "1 peter"]),
    (SecondPeter, &["2пет", "2 петр", "2 петра", "2pet", "2 peter"]),
    (FirstJohn, &["1ин", "1иоан", "1 иоанна", "1 john"]),
    (SecondJohn, &["2ин", "2иоан", "2 иоанна", "2 john"]),
    (ThirdJohn, &["3ин", "3иоан", "3 иоанна", "3 john"]),
    (Jude, &["иуд", "иуда", "иуды", "jude"]),
    (Romans, &["рим", "римл", "римлянам", "rom", "romans"]),
    (FirstCorinthians, &["1кор", "1 коринф", "1 коринфянам", "1cor", "1 corinthians"]),
    (SecondCorinthians, &["2кор", "2 коринф", "2 коринфянам", "2cor", "2 corinthians"]),
    (Galatians, &["гал", "галат", "галатам", "gal", "galatians"]),
    (Ephesians, &["еф", "ефес", "ефесянам", "eph", "ephesians"]),
    (Philippians, &["флп", "фил", "филип", "филиппийцам", "phil", "philippians"]),
    (Colossians, &["кол", "колос", "колоссянам", "col", "colossians"]),
    (FirstThessalonians, &["1фес", "1 фессалоникийцам", "1thess", "1 thessalonians"]),
    (SecondThessalonians, &["2фес", "2 фессалоникийцам", "2thess", "2 thessalonians"]),
    (FirstTimothy, &["1тим", "1 тимофею", "1tim", "1 timothy"]),
    (SecondTimothy, &["2тим", "2 тимофею", "2tim", "2 timothy"]),
    (Titus, &["тит", "титу", "titus"]),
    (Philemon, &["флм", "филим", "филимону", "phlm", "philemon"]),
    (Hebrews, &["евр", "евреям", "heb", "hebrews"]),
    (Revelation, &["откр", "откровение", "апок", "апокалипсис", "rev", "revelation"]),
];
