// SPDX-License-Identifier: Apache-2.0

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};

/// "Not supported" outcomes from a joke provider.
///
/// The load loop skips the affected (language, category) pair and moves on;
/// neither variant is user-visible.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProviderError {
    LanguageNotFound(String),
    CategoryNotFound(String),
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LanguageNotFound(code) => write!(f, "provider has no language {code}"),
            Self::CategoryNotFound(name) => write!(f, "provider has no category {name}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// External source of joke texts, queried once per (language, category)
/// pair during initialization.
pub trait JokeProvider: Send + Sync {
    fn fetch(&self, language: &str, category: &str) -> Result<Vec<String>, ProviderError>;
}

/// Table-driven provider for tests.
///
/// A language is known once any entry was inserted for it; fetching an
/// unknown language reports `LanguageNotFound`, a known language with no
/// entry for the category reports `CategoryNotFound`.
#[derive(Debug, Default)]
pub struct FakeProvider {
    entries: BTreeMap<(String, String), Vec<String>>,
    languages: BTreeSet<String>,
}

impl FakeProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, language: &str, category: &str, texts: &[&str]) {
        self.languages.insert(language.to_string());
        self.entries.insert(
            (language.to_string(), category.to_string()),
            texts.iter().map(|t| (*t).to_string()).collect(),
        );
    }
}

impl JokeProvider for FakeProvider {
    fn fetch(&self, language: &str, category: &str) -> Result<Vec<String>, ProviderError> {
        if !self.languages.contains(language) {
            return Err(ProviderError::LanguageNotFound(language.to_string()));
        }
        self.entries
            .get(&(language.to_string(), category.to_string()))
            .cloned()
            .ok_or_else(|| ProviderError::CategoryNotFound(category.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fake_provider_distinguishes_unknown_language_from_unknown_category() {
        let mut provider = FakeProvider::new();
        provider.insert("en", "neutral", &["a", "b"]);

        assert_eq!(provider.fetch("en", "neutral"), Ok(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(
            provider.fetch("fr", "neutral"),
            Err(ProviderError::LanguageNotFound("fr".to_string()))
        );
        assert_eq!(
            provider.fetch("en", "chuck"),
            Err(ProviderError::CategoryNotFound("chuck".to_string()))
        );
    }
}
