#![forbid(unsafe_code)]
//! Joker model SSOT: the `Joke` record and the configured language registry.

mod joke;
mod registry;

pub use joke::{Joke, ParseError, CATEGORY_MAX_LEN, LANGUAGE_MAX_LEN};
pub use registry::LanguageRegistry;

pub const CRATE_NAME: &str = "joker-model";
