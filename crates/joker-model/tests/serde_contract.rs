// SPDX-License-Identifier: Apache-2.0

use joker_model::Joke;

#[test]
fn joke_wire_shape_is_stable() {
    let joke = Joke::new(7, "en", "neutral", "a joke");
    let value = serde_json::to_value(&joke).expect("serialize joke");
    let object = value.as_object().expect("joke serializes to an object");

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["category", "id", "language", "text"]);
    assert_eq!(value["language"], "en");
    assert_eq!(value["category"], "neutral");
    assert_eq!(value["text"], "a joke");
    assert_eq!(value["id"], 7);
}

#[test]
fn joke_roundtrips_through_json() {
    let joke = Joke::new(0, "de", "chuck", "Chuck Norris kann durch null teilen.");
    let json = serde_json::to_string(&joke).expect("serialize");
    let back: Joke = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, joke);
}

#[test]
fn unknown_fields_are_rejected() {
    let raw = r#"{"language":"en","category":"neutral","text":"x","id":0,"rating":5}"#;
    assert!(serde_json::from_str::<Joke>(raw).is_err());
}
