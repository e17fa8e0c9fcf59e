// SPDX-License-Identifier: Apache-2.0

use crate::joke::{ParseError, LANGUAGE_MAX_LEN};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configured mapping of supported language codes to display names.
///
/// The registry defines which language codes are valid for queries,
/// independent of which languages actually yielded jokes at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageRegistry(BTreeMap<String, String>);

impl LanguageRegistry {
    pub fn from_map(entries: BTreeMap<String, String>) -> Result<Self, ParseError> {
        for (code, name) in &entries {
            if code.is_empty() {
                return Err(ParseError::Empty("language code"));
            }
            if code.trim() != code {
                return Err(ParseError::Trimmed("language code"));
            }
            if code.len() > LANGUAGE_MAX_LEN {
                return Err(ParseError::TooLong("language code", LANGUAGE_MAX_LEN));
            }
            if name.is_empty() {
                return Err(ParseError::Empty("language name"));
            }
        }
        Ok(Self(entries))
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.0.contains_key(code)
    }

    #[must_use]
    pub fn display_name(&self, code: &str) -> Option<&str> {
        self.0.get(code).map(String::as_str)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn registry_lookup_is_case_sensitive() {
        let registry =
            LanguageRegistry::from_map(entries(&[("en", "English")])).expect("registry");
        assert!(registry.contains("en"));
        assert!(!registry.contains("EN"));
        assert_eq!(registry.display_name("en"), Some("English"));
    }

    #[test]
    fn empty_code_is_rejected() {
        let err = LanguageRegistry::from_map(entries(&[("", "English")])).expect_err("empty code");
        assert_eq!(err, ParseError::Empty("language code"));
    }

    #[test]
    fn codes_iterate_in_stable_order() {
        let registry = LanguageRegistry::from_map(entries(&[("es", "Spanish"), ("de", "German")]))
            .expect("registry");
        let codes: Vec<&str> = registry.codes().collect();
        assert_eq!(codes, vec!["de", "es"]);
    }
}
