use crate::error::JokerError;
use crate::provider::JokeProvider;
use joker_model::{Joke, LanguageRegistry};
use rand::seq::SliceRandom;
use std::collections::BTreeSet;
use tracing::debug;

/// Sentinel filter value meaning "unfiltered". The HTTP layer lowercases
/// the path segment before it reaches the core, so the comparison here is
/// exact.
pub const ANY: &str = "any";

/// Categories attempted for every registry language during the load loop.
/// Query-time category validity is derived from the loaded dataset instead.
pub const LOAD_CATEGORIES: [&str; 2] = ["neutral", "chuck"];

/// Owner of the in-memory joke collection.
///
/// Constructed empty, filled exactly once by [`Joker::init_dataset`], then
/// shared read-only behind an `Arc` for the rest of the process lifetime.
#[derive(Debug, Default)]
pub struct Joker {
    languages: LanguageRegistry,
    dataset: Vec<Joke>,
}

impl Joker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the corpus for every (registry language, load category) pair.
    ///
    /// A no-op when the dataset already holds entries. Pairs the provider
    /// does not support are skipped. Ids are assigned in load order,
    /// starting at 0.
    pub fn init_dataset(
        &mut self,
        registry: &LanguageRegistry,
        provider: &dyn JokeProvider,
    ) -> Result<(), JokerError> {
        if !self.dataset.is_empty() {
            return Ok(());
        }
        self.languages = registry.clone();
        let mut next_id: u32 = 0;
        for code in registry.codes() {
            for category in LOAD_CATEGORIES {
                match provider.fetch(code, category) {
                    Ok(texts) => {
                        for text in texts {
                            self.dataset.push(Joke::new(next_id, code, category, text));
                            next_id += 1;
                        }
                    }
                    Err(reason) => {
                        debug!(language = code, category, %reason, "skipping unsupported pair");
                    }
                }
            }
        }
        if self.dataset.is_empty() {
            return Err(JokerError::DatasetEmpty);
        }
        Ok(())
    }

    /// Jokes matching the language/category filters.
    ///
    /// `ANY` disables the corresponding filter. With `count == 0` all
    /// matches come back in load order; with `count > 0` a uniform random
    /// sample without replacement of `min(count, matches)` records comes
    /// back in no guaranteed order.
    ///
    /// Validation is exact-match (registry keys for language, categories
    /// observed in the dataset for category) while the filtering itself is
    /// case-insensitive; both halves of that mismatch are load-bearing for
    /// existing clients.
    pub fn jokes(
        &self,
        language: &str,
        category: &str,
        count: usize,
    ) -> Result<Vec<Joke>, JokerError> {
        if self.dataset.is_empty() {
            return Err(JokerError::NotInitialized);
        }
        let language = (language != ANY).then_some(language);
        let category = (category != ANY).then_some(category);

        if let Some(code) = language {
            if !self.languages.contains(code) {
                return Err(JokerError::InvalidLanguage(code.to_string()));
            }
        }
        if let Some(name) = category {
            let observed: BTreeSet<&str> =
                self.dataset.iter().map(|j| j.category.as_str()).collect();
            if !observed.contains(name) {
                return Err(JokerError::InvalidCategory(name.to_string()));
            }
        }

        let matches: Vec<&Joke> = self
            .dataset
            .iter()
            .filter(|j| language.is_none_or(|code| j.language.eq_ignore_ascii_case(code)))
            .filter(|j| category.is_none_or(|name| j.category.eq_ignore_ascii_case(name)))
            .collect();

        if count > 0 {
            let mut rng = rand::thread_rng();
            Ok(matches
                .choose_multiple(&mut rng, count.min(matches.len()))
                .map(|j| (*j).clone())
                .collect())
        } else {
            Ok(matches.into_iter().cloned().collect())
        }
    }

    /// Look up one joke by id. Accepts any integer; negative and
    /// out-of-range values miss and report the currently valid range.
    pub fn joke_by_id(&self, id: i64) -> Result<Joke, JokerError> {
        if self.dataset.is_empty() {
            return Err(JokerError::NotInitialized);
        }
        if let Some(joke) = self.dataset.iter().find(|j| i64::from(j.id) == id) {
            return Ok(joke.clone());
        }
        // The unwrap_or(0) arms are unreachable behind the emptiness check
        // above; the 0..0 fallback range is kept anyway.
        let min = self.dataset.iter().map(|j| j.id).min().unwrap_or(0);
        let max = self.dataset.iter().map(|j| j.id).max().unwrap_or(0);
        Err(JokerError::JokeNotFound { id, min, max })
    }

    #[must_use]
    pub fn joke_count(&self) -> usize {
        self.dataset.len()
    }

    /// True once the dataset holds entries.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.dataset.is_empty()
    }
}
