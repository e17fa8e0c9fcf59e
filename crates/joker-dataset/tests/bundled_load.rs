use joker_dataset::{BundledCorpus, Joker, ANY};
use joker_model::LanguageRegistry;
use std::collections::BTreeMap;

fn full_registry() -> LanguageRegistry {
    let entries: BTreeMap<String, String> = [
        ("en", "English"),
        ("de", "German"),
        ("es", "Spanish"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    LanguageRegistry::from_map(entries).expect("registry")
}

#[test]
fn bundled_corpus_loads_for_the_default_registry() {
    let mut joker = Joker::new();
    joker
        .init_dataset(&full_registry(), &BundledCorpus::new())
        .expect("bundled load");
    assert!(joker.is_ready());

    // Every language in the registry yields at least one joke even though
    // (es, chuck) is unsupported and skipped.
    for language in ["en", "de", "es"] {
        let jokes = joker.jokes(language, ANY, 0).expect("per-language query");
        assert!(!jokes.is_empty(), "no jokes loaded for {language}");
    }

    let all = joker.jokes(ANY, ANY, 0).expect("all");
    assert_eq!(all.len(), joker.joke_count());
    for (position, joke) in all.iter().enumerate() {
        assert_eq!(joke.id as usize, position);
        joke.validate().expect("loaded joke validates");
    }
}

#[test]
fn registry_subset_restricts_the_load() {
    let entries: BTreeMap<String, String> =
        [("de".to_string(), "German".to_string())].into_iter().collect();
    let registry = LanguageRegistry::from_map(entries).expect("registry");

    let mut joker = Joker::new();
    joker
        .init_dataset(&registry, &BundledCorpus::new())
        .expect("load");
    let all = joker.jokes(ANY, ANY, 0).expect("all");
    assert!(all.iter().all(|j| j.language == "de"));
}
