use std::borrow::Cow;

use crate::{accents, case, replace};

/// Any text to text operation of this crate
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "deserialize", derive(serde::Deserialize))]
pub enum Transform {
    RemoveAccents,
    RemoveEmojis,
    Clean,
    ReplaceSlashes(String),
    RemoveSlashes,
    KebabCase,
    SnakeCase,
    UpperSnakeCase,
    CamelCase,
    PascalCase,
    UpperCamelCase,
    LowerCamelCase,
    UpperFirst,
    LowerFirst,
}

impl Transform {
    #[must_use]
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            Self::RemoveAccents => accents::remove_accents(text),
            Self::RemoveEmojis => accents::remove_emojis(text),
            Self::Clean => accents::clean(text),
            Self::ReplaceSlashes(replacement) => replace::replace_slashes(text, replacement),
            Self::RemoveSlashes => replace::remove_slashes(text),
            Self::KebabCase => case::kebab_case(text).into(),
            Self::SnakeCase => case::snake_case(text).into(),
            Self::UpperSnakeCase => case::upper_snake_case(text).into(),
            Self::CamelCase => case::camel_case(text).into(),
            Self::PascalCase => case::pascal_case(text).into(),
            Self::UpperCamelCase => case::upper_camel_case(text).into(),
            Self::LowerCamelCase => case::lower_camel_case(text).into(),
            Self::UpperFirst => case::upper_first(text).into(),
            Self::LowerFirst => case::lower_first(text).into(),
        }
    }
}

/// Holds [`Transform`] objects and applies them in order
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "deserialize", derive(serde::Deserialize))]
pub struct Pipeline {
    #[cfg_attr(feature = "deserialize", serde(default))]
    steps: Vec<Transform>,
}

impl Pipeline {
    #[must_use]
    pub fn new(steps: Vec<Transform>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Transform] {
        &self.steps
    }

    /// Runs all steps against text. Empty pipeline returns text as is
    #[must_use]
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.steps.iter().fold(Cow::Borrowed(text), |a, step| {
            log::trace!("applying {step:?}");

            match a {
                Cow::Borrowed(text) => step.apply(text),
                Cow::Owned(text) => Cow::Owned(step.apply(&text).into_owned()),
            }
        })
    }
}

impl From<Vec<Transform>> for Pipeline {
    fn from(steps: Vec<Transform>) -> Self {
        Self::new(steps)
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::{Pipeline, Transform};

    #[test]
    fn every_transform_dispatches() {
        let cases = [
            (Transform::RemoveAccents, "Café-Olé", "Cafe-Ole"),
            (Transform::RemoveEmojis, "hi😀", "hi"),
            (Transform::Clean, "Café 😀!", "Cafe !"),
            (Transform::ReplaceSlashes(" ".to_owned()), "a/b(c)", "a b c "),
            (Transform::RemoveSlashes, "a/b_c", "abc"),
            (Transform::KebabCase, "Hello_World.Test", "hello-world-test"),
            (Transform::SnakeCase, "Hello-World Test", "hello_world_test"),
            (Transform::UpperSnakeCase, "Hello-World Test", "HELLO_WORLD_TEST"),
            (Transform::CamelCase, "hello world", "HelloWorld"),
            (Transform::PascalCase, "hello world", "HelloWorld"),
            (Transform::UpperCamelCase, "hello world", "HelloWorld"),
            (Transform::LowerCamelCase, "hello world", "HelloWorld"),
            (Transform::UpperFirst, "über", "Über"),
            (Transform::LowerFirst, "HELLO", "hELLO"),
        ];

        for (transform, input, expected) in cases {
            assert_eq!(transform.apply(input), expected, "{transform:?}");
        }
    }

    #[test]
    fn steps_applied_in_order() {
        let pipeline = Pipeline::new(vec![Transform::Clean, Transform::KebabCase]);

        assert_eq!(pipeline.apply("Crème Brûlée 🍮"), "creme-brulee");

        let reversed = Pipeline::new(vec![Transform::KebabCase, Transform::UpperFirst]);

        assert_eq!(reversed.apply("Crème Brûlée"), "Crème-brûlée");
    }

    #[test]
    fn empty_pipeline_borrows() {
        let pipeline = Pipeline::default();

        assert!(matches!(pipeline.apply("text"), Cow::Borrowed("text")));
    }

    #[cfg(feature = "deserialize")]
    #[test]
    fn deserializes_from_ron() {
        let pipeline = ron::from_str::<Pipeline>(
            r#"(steps: [Clean, ReplaceSlashes(" "), SnakeCase])"#,
        )
        .expect("pipeline did not parse");

        assert_eq!(
            pipeline.steps(),
            &[
                Transform::Clean,
                Transform::ReplaceSlashes(" ".to_owned()),
                Transform::SnakeCase
            ]
        );
        assert_eq!(pipeline.apply("Olá/Mundo(2024)"), "ola_mundo_2024");
    }

    #[cfg(feature = "deserialize")]
    #[test]
    fn deserializes_from_json() {
        let pipeline = serde_json::from_str::<Pipeline>(
            r#"{"steps": ["RemoveAccents", {"ReplaceSlashes": "+"}]}"#,
        )
        .expect("pipeline did not parse");

        assert_eq!(pipeline.apply("é/è"), "e+e");
    }
}
