use std::{borrow::Cow, error::Error, fmt, sync::OnceLock};

use regex_automata::meta::{BuildError, Regex};

static SLASHES: OnceLock<Replacer> = OnceLock::new();

/// Characters treated as separators by [`replace_slashes`]
pub const SLASH_CHARS: [&str; 6] = ["/", "_", "-", "%", "(", ")"];

/// A group of literal needles with their regexes combined into one
#[derive(Clone)]
pub struct Replacer {
    needles: Vec<String>,
    replacements: Vec<String>,
    multi_regex: Regex,
}

// skips 20 pages of debug output of `multi_regex` field
#[allow(clippy::missing_fields_in_debug)]
impl fmt::Debug for Replacer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Replacer")
            .field("needles", &self.needles)
            .field("replacements", &self.replacements)
            .finish()
    }
}

impl Replacer {
    /// Creates new instance from pairs of literal needle and replacement. When several needles
    /// match at the same position the one listed first wins
    #[allow(clippy::result_large_err)]
    pub fn new<N, R>(rules: impl IntoIterator<Item = (N, R)>) -> Result<Self, CreationError>
    where
        N: Into<String>,
        R: Into<String>,
    {
        let (needles, replacements): (Vec<String>, Vec<String>) = rules
            .into_iter()
            .map(|(needle, replacement)| (needle.into(), replacement.into()))
            .unzip();

        if needles.is_empty() {
            return Err(CreationError::Empty);
        }

        let patterns: Vec<_> = needles.iter().map(|n| regex_syntax::escape(n)).collect();

        let multi_regex = Regex::new_many(&patterns).map_err(CreationError::BadPattern)?;

        log::trace!("compiled replacer for {} needles", needles.len());

        Ok(Self {
            needles,
            replacements,
            multi_regex,
        })
    }

    /// Same replacement for every needle
    #[allow(clippy::result_large_err)]
    pub fn uniform<N: Into<String>>(
        needles: impl IntoIterator<Item = N>,
        replacement: &str,
    ) -> Result<Self, CreationError> {
        Self::new(needles.into_iter().map(|n| (n, replacement)))
    }

    /// Produces string with all non-overlapping needles replaced. Returns input untouched if
    /// nothing matched
    #[must_use]
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.replace_with(text, move |pattern| self.replacements[pattern].as_str())
    }

    /// Same as [`apply`][Self::apply] but ignores stored replacements and puts `replacement`
    /// instead of every needle
    #[must_use]
    pub fn apply_uniform<'a>(&self, text: &'a str, replacement: &str) -> Cow<'a, str> {
        self.replace_with(text, move |_| replacement)
    }

    fn replace_with<'a, 'r>(
        &self,
        text: &'a str,
        pick: impl Fn(usize) -> &'r str,
    ) -> Cow<'a, str> {
        let mut matches = self.multi_regex.find_iter(text);

        let Some(mut found) = matches.next() else {
            return Cow::Borrowed(text);
        };

        let mut last_replacement = 0;
        let mut output = String::with_capacity(text.len());

        loop {
            let range = found.range();

            output.push_str(&text[last_replacement..range.start]);
            output.push_str(pick(found.pattern().as_usize()));

            last_replacement = range.end;

            found = match matches.next() {
                Some(m) => m,
                None => break,
            };
        }

        output.push_str(&text[last_replacement..]);

        Cow::Owned(output)
    }
}

#[derive(Debug)]
pub enum CreationError {
    Empty,
    BadPattern(BuildError),
}

impl fmt::Display for CreationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreationError::Empty => write!(f, "expected at least one needle"),
            CreationError::BadPattern(err) => {
                let mut msg = err.to_string();
                if let Some(syntax_msg) = err.syntax_error() {
                    msg = format!("msg: {syntax_msg}");
                }

                write!(f, "needle combination failed: {msg}")
            }
        }
    }
}

impl Error for CreationError {}

/// Replaces every `/ _ - % ( )` with `replacement` in a single pass
#[must_use]
pub fn replace_slashes<'a>(input: &'a str, replacement: &str) -> Cow<'a, str> {
    SLASHES
        .get_or_init(|| Replacer::uniform(SLASH_CHARS, "").unwrap())
        .apply_uniform(input, replacement)
}

/// [`replace_slashes`] with empty replacement
#[must_use]
pub fn remove_slashes(input: &str) -> Cow<'_, str> {
    replace_slashes(input, "")
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;

    #[test]
    fn replaces_every_slash() {
        assert_eq!(replace_slashes("a/b_c-d%e(f)g", "-"), "a-b-c-d-e-f-g");
        assert_eq!(replace_slashes("(a)", "<>"), "<>a<>");
    }

    #[test]
    fn removes_slashes() {
        assert_eq!(remove_slashes("a/b_c"), "abc");
        assert_eq!(remove_slashes("/_-%()"), "");
    }

    #[test]
    fn replacement_is_not_rescanned() {
        assert_eq!(replace_slashes("a/b", "//"), "a//b");
        assert_eq!(replace_slashes("a-b", "_"), "a_b");
    }

    #[test]
    fn untouched_input_is_borrowed() {
        assert!(matches!(replace_slashes("hello world", "-"), Cow::Borrowed(_)));
        assert!(matches!(remove_slashes(""), Cow::Borrowed(_)));
    }

    #[test]
    fn multibyte_text_kept() {
        assert_eq!(replace_slashes("привет/мир", " "), "привет мир");
        assert_eq!(remove_slashes("日本-語"), "日本語");
    }

    #[test]
    fn first_listed_needle_wins() {
        let replacer = Replacer::new([("ab", "1"), ("a", "2"), ("b", "3")]).unwrap();

        assert_eq!(replacer.apply("abba"), "132");
    }

    #[test]
    fn needles_are_literal() {
        let replacer = Replacer::uniform([".", "*"], "!").unwrap();

        assert_eq!(replacer.apply("a.b*c"), "a!b!c");
        assert_eq!(replacer.apply("abc"), "abc");
    }

    #[test]
    fn empty_rules_rejected() {
        let rules: Vec<(String, String)> = Vec::new();

        assert!(matches!(Replacer::new(rules), Err(CreationError::Empty)));
    }
}
