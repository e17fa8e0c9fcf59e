// SPDX-License-Identifier: Apache-2.0

use std::fmt::{Display, Formatter};

/// Errors raised by [`crate::Joker`] operations.
///
/// All of these are recoverable at the request-handling boundary; the HTTP
/// layer collapses every kind into a 404 response carrying the `Display`
/// string.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum JokerError {
    /// Initialization attempted every configured pair and loaded nothing.
    DatasetEmpty,
    /// A query ran before the dataset transitioned to ready.
    NotInitialized,
    /// The language filter is not a key of the configured registry.
    InvalidLanguage(String),
    /// The category filter is not among categories observed in the dataset.
    InvalidCategory(String),
    /// Id lookup miss; carries the currently valid id range.
    JokeNotFound { id: i64, min: u32, max: u32 },
}

impl Display for JokerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatasetEmpty => {
                f.write_str("no jokes loaded from any configured language/category pair")
            }
            Self::NotInitialized => f.write_str("dataset not initialized"),
            Self::InvalidLanguage(code) => write!(f, "language {code} does not exist"),
            Self::InvalidCategory(name) => write!(f, "category {name} does not exist"),
            Self::JokeNotFound { id, min, max } => {
                write!(f, "joke {id} not found, try an id between {min} and {max}")
            }
        }
    }
}

impl std::error::Error for JokerError {}
