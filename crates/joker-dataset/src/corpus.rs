use crate::provider::{JokeProvider, ProviderError};

const EN_NEUTRAL: &[&str] = &[
    "Why do programmers confuse Halloween and Christmas? Because OCT 31 == DEC 25.",
    "There are only 10 kinds of people in this world: those who know binary and those who don't.",
    "A programmer walks into a bar and orders 1.00000000000000000000001 root beers.",
    "A SQL query goes into a bar, walks up to two tables and asks: may I join you?",
    "Why do Java developers wear glasses? Because they cannot C#.",
    "How many programmers does it take to change a light bulb? None, that's a hardware problem.",
    "A programmer's partner says: go to the store and get a litre of milk. If they have eggs, get a dozen. The programmer returns with twelve litres of milk.",
    "There are two hard things in computer science: cache invalidation, naming things, and off-by-one errors.",
    "I would tell you a UDP joke, but you might not get it.",
    "Debugging: being the detective in a crime movie where you are also the murderer.",
];

const EN_CHUCK: &[&str] = &[
    "Chuck Norris can write infinite recursion functions... and have them return.",
    "Chuck Norris's keyboard has no escape key. Nothing escapes Chuck Norris.",
    "Chuck Norris can unit test an entire application with a single assert.",
    "Chuck Norris doesn't use web standards. The web conforms to him.",
    "All arrays Chuck Norris declares are of infinite size, because Chuck Norris knows no bounds.",
    "Chuck Norris's code compiles on the first try, every time.",
];

const DE_NEUTRAL: &[&str] = &[
    "Warum verwechseln Programmierer Halloween und Weihnachten? Weil OCT 31 == DEC 25.",
    "Es gibt nur 10 Arten von Menschen: die, die Binaer verstehen, und die, die es nicht tun.",
    "Ein SQL-Statement betritt eine Bar, geht zu zwei Tabellen und fragt: darf ich mich zu euch joinen?",
    "Treffen sich zwei Pointer auf dem Stack. Sagt der eine: du siehst dereferenziert aus.",
];

const DE_CHUCK: &[&str] = &[
    "Chuck Norris kann durch null teilen.",
    "Chuck Norris schreibt Code, der sich selbst dokumentiert.",
];

const ES_NEUTRAL: &[&str] = &[
    "Por que los programadores confunden Halloween con Navidad? Porque OCT 31 == DEC 25.",
    "Hay solo 10 tipos de personas: las que entienden binario y las que no.",
    "Un SQL entra en un bar, se acerca a dos tablas y pregunta: puedo unirme?",
];

/// The joke corpus shipped with the crate, standing in for an external
/// joke-content service. Spanish carries no "chuck" jokes, so the
/// (es, chuck) pair is reported as not supported and skipped at load time.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCorpus;

impl BundledCorpus {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn table(language: &str) -> Option<&'static [(&'static str, &'static [&'static str])]> {
        match language {
            "en" => Some(&[("neutral", EN_NEUTRAL), ("chuck", EN_CHUCK)]),
            "de" => Some(&[("neutral", DE_NEUTRAL), ("chuck", DE_CHUCK)]),
            "es" => Some(&[("neutral", ES_NEUTRAL)]),
            _ => None,
        }
    }
}

impl JokeProvider for BundledCorpus {
    fn fetch(&self, language: &str, category: &str) -> Result<Vec<String>, ProviderError> {
        let table = Self::table(language)
            .ok_or_else(|| ProviderError::LanguageNotFound(language.to_string()))?;
        table
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, texts)| texts.iter().map(|t| (*t).to_string()).collect())
            .ok_or_else(|| ProviderError::CategoryNotFound(category.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use joker_model::Joke;

    #[test]
    fn bundled_texts_are_valid_joke_material() {
        for language in ["en", "de", "es"] {
            for category in ["neutral", "chuck"] {
                let Ok(texts) = BundledCorpus::new().fetch(language, category) else {
                    continue;
                };
                for text in texts {
                    Joke::new(0, language, category, text)
                        .validate()
                        .expect("bundled joke validates");
                }
            }
        }
    }

    #[test]
    fn spanish_chuck_is_not_supported() {
        assert_eq!(
            BundledCorpus::new().fetch("es", "chuck"),
            Err(ProviderError::CategoryNotFound("chuck".to_string()))
        );
    }

    #[test]
    fn unknown_language_is_reported() {
        assert_eq!(
            BundledCorpus::new().fetch("fr", "neutral"),
            Err(ProviderError::LanguageNotFound("fr".to_string()))
        );
    }
}
