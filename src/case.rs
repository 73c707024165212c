use std::sync::OnceLock;

use unicode_segmentation::UnicodeSegmentation;

use crate::replace::Replacer;

static WORD_SEPARATORS: OnceLock<Replacer> = OnceLock::new();

/// Characters that separate words in addition to whitespace
pub const SEPARATOR_CHARS: [&str; 3] = [".", "_", "-"];

/// Simple (one to one) uppercase mapping. Where the full mapping expands into several
/// characters the simple one is either missing (`ß` stays `ß`) or a single precomposed letter
/// (`ᾳ` -> `ᾼ`)
fn simple_upper(c: char) -> char {
    let iota_subscript = match c {
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(c as u32 + 8)
        }
        '\u{1FB3}' => Some('\u{1FBC}'),
        '\u{1FC3}' => Some('\u{1FCC}'),
        '\u{1FF3}' => Some('\u{1FFC}'),
        _ => None,
    };
    if let Some(upper) = iota_subscript {
        return upper;
    }

    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Simple (one to one) lowercase mapping. `İ` is the only letter whose full lowercase expands
fn simple_lower(c: char) -> char {
    if c == '\u{130}' {
        return 'i';
    }

    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Full titlecase mapping, `ǆ` -> `ǅ`, `ß` -> `Ss`, `ᾳ` -> `ᾼ`
fn titlecase_char(c: char) -> String {
    let title: String = unicode_case_mapping::to_titlecase(c)
        .into_iter()
        .take_while(|&cp| cp != 0)
        .filter_map(char::from_u32)
        .collect();

    if title.is_empty() {
        c.to_string()
    } else {
        title
    }
}

// https://stackoverflow.com/a/38406885
fn title_segment(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => titlecase_char(f) + &c.as_str().to_lowercase(),
    }
}

/// Uppercases first letter of every word in `s` and lowercases everything else. Words are
/// found with Unicode word boundaries, so `"hello/world"` becomes `"Hello/World"`
#[must_use]
pub fn title(s: &str) -> String {
    s.split_word_bounds().map(title_segment).collect()
}

/// Replaces `. _ -` with spaces and splits on whitespace. Empty words are skipped
#[must_use]
pub fn split_words(s: &str) -> Vec<String> {
    WORD_SEPARATORS
        .get_or_init(|| Replacer::uniform(SEPARATOR_CHARS, " ").unwrap())
        .apply(s)
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

fn convert(s: &str, word_case: impl Fn(&str) -> String, joiner: &str) -> String {
    split_words(s)
        .iter()
        .map(|word| word_case(word))
        .collect::<Vec<_>>()
        .join(joiner)
}

fn lower(word: &str) -> String {
    word.chars().map(simple_lower).collect()
}

fn upper(word: &str) -> String {
    word.chars().map(simple_upper).collect()
}

/// `"Hello_World.Test"` -> `"hello-world-test"`
#[must_use]
pub fn kebab_case(s: &str) -> String {
    convert(s, lower, "-")
}

/// `"Hello-World Test"` -> `"hello_world_test"`
#[must_use]
pub fn snake_case(s: &str) -> String {
    convert(s, lower, "_")
}

/// `"Hello-World Test"` -> `"HELLO_WORLD_TEST"`
#[must_use]
pub fn upper_snake_case(s: &str) -> String {
    convert(s, upper, "_")
}

/// `"hello_world test"` -> `"HelloWorldTest"`
#[must_use]
pub fn camel_case(s: &str) -> String {
    convert(s, title, "")
}

/// Same as [`camel_case`]
#[must_use]
pub fn pascal_case(s: &str) -> String {
    camel_case(s)
}

/// Same as [`camel_case`]
#[must_use]
pub fn upper_camel_case(s: &str) -> String {
    camel_case(s)
}

/// Kept compatible with older releases: first word is title cased too, making this identical
/// to [`camel_case`]. Use [`lower_first`] on the result to get `"helloWorld"`
#[must_use]
pub fn lower_camel_case(s: &str) -> String {
    camel_case(s)
}

/// Uppercases first character, the rest is untouched
#[must_use]
pub fn upper_first(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => simple_upper(f).to_string() + c.as_str(),
    }
}

/// Lowercases first character, the rest is untouched
#[must_use]
pub fn lower_first(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => simple_lower(f).to_string() + c.as_str(),
    }
}
