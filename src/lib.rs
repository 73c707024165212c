//! Text normalization and case conversion helpers.
//!
//! # Table of contents
//! * [Description](#description)
//! * [Word counting](#word-counting)
//! * [Pipeline](#pipeline)
//! * [CLI tool](#cli-tool)
//! * [Feature flags](#feature-flags)
//!
//! # Description
//!
//! A set of stateless functions that take text and return new text: strip accents, drop
//! anything outside of ASCII, replace separators, convert between naming conventions and
//! encode numbers in base 62. All of them work on code points, never on raw bytes.
//!
//! ```rust
//! use strutil::{camel_case, clean, int_to_base62, kebab_case, word_count};
//!
//! assert_eq!(clean("Café 😀!"), "Cafe !");
//! assert_eq!(kebab_case("Hello_World.Test"), "hello-world-test");
//! assert_eq!(camel_case("hello world"), "HelloWorld");
//! assert_eq!(int_to_base62(62).unwrap(), "10");
//! assert_eq!(word_count("it's a well-known fact"), 4);
//! ```
//!
//! # Word counting
//!
//! [`word_count`] counts runs of Unicode letters. Hiragana, katakana and CJK ideographs are
//! not letters for this purpose (see [`words::CJK_RANGES`]), so `"日本語"` has zero words.
//!
//! # Pipeline
//!
//! [`Transform`] names every text to text function, [`Pipeline`] runs several of them in
//! order. With `deserialize` feature pipelines can be read from any serde format:
//!
//! ```rust
//! # #[cfg(feature = "deserialize")]
//! # {
//! use strutil::Pipeline;
//!
//! let pipeline = ron::from_str::<Pipeline>(
//!     r#"
//! (
//!     steps: [
//!         Clean,
//!         ReplaceSlashes(" "),
//!         KebabCase,
//!     ]
//! )
//! "#,
//! )
//! .expect("pipeline did not parse");
//!
//! assert_eq!(pipeline.apply("Ação/Rápida"), "acao-rapida");
//! # }
//! ```
//!
//! # CLI tool
//!
//! You can run CLI tool by enabling `cli` feature: `cargo run --features=cli -- --help`.
//!
//! `echo 'Olá Mundo' | cargo run --features=cli -- -p pipelines/slug.ron` prints `ola-mundo`.
//!
//! # Feature flags
//!
//! Name | Description | Default?
//! ---|---|---
//! `deserialize` | enables deserialization for [`Transform`] and [`Pipeline`] | yes
//! `cli` | required to run CLI tool | no

pub mod accents;
pub mod base62;
pub mod case;
pub mod replace;
pub mod transform;
pub mod words;

pub use accents::{clean, remove_accents, remove_emojis};
pub use base62::{encode as encode_base62, int_to_base62};
pub use case::{
    camel_case, kebab_case, lower_camel_case, lower_first, pascal_case, snake_case,
    upper_camel_case, upper_first, upper_snake_case,
};
pub use replace::{remove_slashes, replace_slashes, Replacer};
pub use transform::{Pipeline, Transform};
pub use words::word_count;
