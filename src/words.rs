use std::ops::Range;

use unicode_general_category::{get_general_category, GeneralCategory};

/// Half-open ranges of letters that never count as word characters. Picked by hand to keep
/// Japanese and Chinese text out of word counts, this is not a script segmenter
pub const CJK_RANGES: [Range<char>; 5] = [
    // hiragana and katakana
    '\u{3034}'..'\u{30FF}',
    // CJK unified ideographs extension A
    '\u{3400}'..'\u{4DBF}',
    // CJK unified ideographs
    '\u{4E00}'..'\u{9FFF}',
    // CJK compatibility ideographs
    '\u{F900}'..'\u{FAFF}',
    // half-width katakana
    '\u{FF66}'..'\u{FF9F}',
];

/// Unicode letter (any L* category) outside of [`CJK_RANGES`]
#[must_use]
pub fn is_letter(c: char) -> bool {
    let letter = matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    );

    letter && !CJK_RANGES.iter().any(|range| range.contains(&c))
}

/// Counts runs of letters. Apostrophes and hyphens continue a word that already started but
/// never start one
#[must_use]
pub fn word_count(s: &str) -> usize {
    let mut in_word = false;

    s.chars().fold(0, |count, c| {
        if is_letter(c) {
            let started = !in_word;
            in_word = true;

            return count + usize::from(started);
        }

        if !(in_word && matches!(c, '\'' | '-')) {
            in_word = false;
        }

        count
    })
}
