//! Built-in per-translation book numbering and display titles.

use crate::bible::types::book::BookCode::{self, *};

/// Book order of the Russian Synodal edition.
///
/// The Old Testament matches protestant order; in the New Testament the
/// general epistles follow Acts and precede Romans.
pub(super) const SYNODAL_ORDER: &[BookCode] = &[
    Genesis, Exodus, Leviticus, Numbers, Deuteronomy, Joshua, Judges, Ruth,
    FirstSamuel, SecondSamuel, FirstKings, SecondKings, FirstChronicles, SecondChronicles,
    Ezra, Nehemiah, Esther, Job, Psalms, Proverbs, Ecclesiastes, SongOfSongs,
    Isaiah, Jeremiah, Lamentations, Ezekiel, Daniel, Hosea, Joel, Amos, Obadiah,
    Jonah, Micah, Nahum, Habakkuk, Zephaniah, Haggai, Zechariah, Malachi,
    Matthew, Mark, Luke, John, Acts,
    James, FirstPeter, SecondPeter, FirstJohn, SecondJohn, ThirdJohn, Jude,
    Romans, FirstCorinthians, SecondCorinthians, Galatians, Ephesians, Philippians,
    Colossians, FirstThessalonians, SecondThessalonians, FirstTimothy, SecondTimothy,
    Titus, Philemon, Hebrews, Revelation,
];

/// Numbers books 1..=n in the given order.
pub(super) fn sequential(order: &[BookCode]) -> Vec<(BookCode, u32)> {
    order
        .iter()
        .zip(1u32..)
        .map(|(book, id)| (*book, id))
        .collect()
}

/// Static display titles, used when a loaded tree does not name the book.
pub(super) const TITLES: &[(BookCode, &str)] = &[
    (Genesis, "Бытие"),
    (Exodus, "Исход"),
    (Leviticus, "Левит"),
    (Numbers, "Числа"),
    (Deuteronomy, "Второзаконие"),
    (Joshua, "Иисус Навин"),
    (Judges, "Судьи"),
    (Ruth, "Руфь"),
    (FirstSamuel, "1-я Царств"),
    (SecondSamuel, "2-я Царств"),
    (FirstKings, "3-я Царств"),
    (SecondKings, "4-я Царств"),
    (FirstChronicles, "1-я Паралипоменон"),
    (SecondChronicles, "2-я Паралипоменон"),
    (Ezra, "Ездра"),
    (Nehemiah, "Неемия"),
    (Esther, "Есфирь"),
    (Job, "Иов"),
    (Psalms, "Псалтирь"),
    (Proverbs, "Притчи"),
    (Ecclesiastes, "Екклесиаст"),
    (SongOfSongs, "Песнь Песней"),
    (Isaiah, "Исаия"),
    (Jeremiah, "Иеремия"),
    (Lamentations, "Плач Иеремии"),
    (Ezekiel, "Иезекииль"),
    (Daniel, "Даниил"),
    (Hosea, "Осия"),
    (Joel, "Иоиль"),
    (Amos, "Амос"),
    (Obadiah, "Авдий"),
    (Jonah, "Иона"),
    (Micah, "Михей"),
    (Nahum, "Наум"),
    (Habakkuk, "Аввакум"),
    (Zephaniah, "Софония"),
    (Haggai, "Аггей"),
    (Zechariah, "Захария"),
    (Malachi, "Малахия"),
    (Matthew, "От Матфея"),
    (Mark, "От Марка"),
    (Luke, "От Луки"),
    (John, "От Иоанна"),
    (Acts, "Деяния"),
    (Romans, "Римлянам"),
    (FirstCorinthians, "1-е Коринфянам"),
    (SecondCorinthians, "2-е Коринфянам"),
    (Galatians, "Галатам"),
    (Ephesians, "Ефесянам"),
    (Philippians, "Филиппийцам"),
    (Colossians, "Колоссянам"),
    (FirstThessalonians, "1-е Фессалоникийцам"),
    (SecondThessalonians, "2-е Фессалоникийцам"),
    (FirstTimothy, "1-е Тимофею"),
    (SecondTimothy, "2-е Тимофею"),
    (Titus, "Титу"),
    (Philemon, "Филимону"),
    (Hebrews, "Евреям"),
    (James, "Иакова"),
    (FirstPeter, "1-е Петра"),
    (SecondPeter, "2-е Петра"),
    (FirstJohn, "1-е Иоанна"),
    (SecondJohn, "2-е Иоанна"),
    (ThirdJohn, "3-е Иоанна"),
    (Jude, "Иуды"),
    (Revelation, "Откровение"),
];
