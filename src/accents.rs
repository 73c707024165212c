use std::borrow::Cow;

use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

/// Strips diacritics: decomposes text, drops nonspacing marks (Mn) and composes the rest back.
///
/// Letters without canonical decomposition (`ø`, `ł`) are left as is
#[must_use]
pub fn remove_accents(s: &str) -> Cow<'_, str> {
    // ascii has no marks and is already composed
    if s.is_ascii() {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.nfd()
            .filter(|&c| get_general_category(c) != GeneralCategory::NonspacingMark)
            .nfc()
            .collect(),
    )
}

/// Keeps ASCII only. Despite the name this drops every code point above 127, not just emoji
#[must_use]
pub fn remove_emojis(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        return Cow::Borrowed(s);
    }

    Cow::Owned(s.chars().filter(char::is_ascii).collect())
}

/// [`remove_accents`] followed by [`remove_emojis`]
#[must_use]
pub fn clean(s: &str) -> Cow<'_, str> {
    match remove_accents(s) {
        Cow::Borrowed(s) => remove_emojis(s),
        Cow::Owned(s) => Cow::Owned(remove_emojis(&s).into_owned()),
    }
}
