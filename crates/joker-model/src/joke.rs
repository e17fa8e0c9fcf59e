// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const LANGUAGE_MAX_LEN: usize = 8;
pub const CATEGORY_MAX_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    Empty(&'static str),
    Trimmed(&'static str),
    TooLong(&'static str, usize),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(name) => write!(f, "{name} must not be empty"),
            Self::Trimmed(name) => {
                write!(f, "{name} must not contain leading/trailing whitespace")
            }
            Self::TooLong(name, max) => write!(f, "{name} exceeds max length {max}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// One unit of joke content. Ids are assigned by the dataset loader in load
/// order, starting at 0, and stay stable for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Joke {
    pub language: String,
    pub category: String,
    pub text: String,
    pub id: u32,
}

impl Joke {
    #[must_use]
    pub fn new(
        id: u32,
        language: impl Into<String>,
        category: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            category: category.into(),
            text: text.into(),
            id,
        }
    }

    pub fn validate(&self) -> Result<(), ParseError> {
        if self.language.is_empty() {
            return Err(ParseError::Empty("language"));
        }
        if self.language.trim() != self.language {
            return Err(ParseError::Trimmed("language"));
        }
        if self.language.len() > LANGUAGE_MAX_LEN {
            return Err(ParseError::TooLong("language", LANGUAGE_MAX_LEN));
        }
        if self.category.is_empty() {
            return Err(ParseError::Empty("category"));
        }
        if self.category.len() > CATEGORY_MAX_LEN {
            return Err(ParseError::TooLong("category", CATEGORY_MAX_LEN));
        }
        if self.text.is_empty() {
            return Err(ParseError::Empty("text"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_joke_passes_validation() {
        let joke = Joke::new(0, "en", "neutral", "why did the chicken cross the road");
        assert!(joke.validate().is_ok());
    }

    #[test]
    fn empty_text_is_rejected() {
        let joke = Joke::new(0, "en", "neutral", "");
        assert_eq!(joke.validate(), Err(ParseError::Empty("text")));
    }

    #[test]
    fn padded_language_is_rejected() {
        let joke = Joke::new(0, " en", "neutral", "x");
        assert_eq!(joke.validate(), Err(ParseError::Trimmed("language")));
    }
}
