// SPDX-License-Identifier: Apache-2.0

use joker_dataset::JokerError;
use joker_model::Joke;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JokeDto {
    pub language: String,
    pub category: String,
    pub text: String,
    pub id: u32,
}

impl From<&Joke> for JokeDto {
    fn from(joke: &Joke) -> Self {
        Self {
            language: joke.language.clone(),
            category: joke.category.clone(),
            text: joke.text.clone(),
            id: joke.id,
        }
    }
}

/// Body of the list endpoints: `{"jokes": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JokesBodyDto {
    pub jokes: Vec<JokeDto>,
}

impl JokesBodyDto {
    #[must_use]
    pub fn from_jokes(jokes: &[Joke]) -> Self {
        Self {
            jokes: jokes.iter().map(JokeDto::from).collect(),
        }
    }
}

/// Body of the by-id endpoint: `{"joke": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JokeBodyDto {
    pub joke: JokeDto,
}

impl From<&Joke> for JokeBodyDto {
    fn from(joke: &Joke) -> Self {
        Self {
            joke: JokeDto::from(joke),
        }
    }
}

/// Failure body: the error message as a plain string, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorBodyDto {
    pub error: String,
}

impl ErrorBodyDto {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl From<&JokerError> for ErrorBodyDto {
    fn from(err: &JokerError) -> Self {
        Self::new(err.to_string())
    }
}
