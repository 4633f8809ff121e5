//! Dictionary-backed lemmatizer with suffix detachment.
//!
//! Lookup order for a word and word class:
//!
//! 1. irregular forms (`feet` → `foot`, `are` → `be`); the word itself
//!    competes when it is a dictionary form too (`best` stays `best`);
//! 2. the word and every suffix substitution of its class that lands on a
//!    dictionary form; the shortest wins;
//! 3. function words are returned untouched;
//! 4. otherwise the most plausible detachment is guessed from spelling
//!    (`running` → `run`, `making` → `make`, `studied` → `study`).
//!
//! Lookups are case-sensitive against a lowercase vocabulary, so a word
//! with capital letters (`Dogs`, `The`) comes back unchanged, as does a
//! word nothing applies to.

use ahash::AHashSet;

use super::WordNetPos;
use super::tables::{self, VOCABULARY_SET};
use crate::analysis::token_filter::stop::ENGLISH_STOP_WORDS_SET;

#[derive(Clone, Debug, Default)]
pub struct Lemmatizer {
    vocabulary: AHashSet<String>,
}

impl Lemmatizer {
    /// Create a lemmatizer with the built-in vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add dictionary forms to the vocabulary.
    pub fn with_vocabulary<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.vocabulary
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Whether `word` (lowercase) is a known dictionary form.
    pub fn is_known(&self, word: &str) -> bool {
        VOCABULARY_SET.contains(word) || self.vocabulary.contains(word)
    }

    /// Reduce `word` to its dictionary form for the given word class.
    pub fn lemmatize(&self, word: &str, pos: WordNetPos) -> String {
        if word.chars().any(char::is_uppercase) {
            return word.to_string();
        }

        if let Some(lemmas) = tables::exceptions(word, pos) {
            let mut forms: Vec<&str> = Vec::with_capacity(lemmas.len() + 1);
            if self.is_known(word) {
                forms.push(word);
            }
            forms.extend_from_slice(lemmas);
            if let Some(lemma) = shortest(forms) {
                return lemma.to_string();
            }
        }

        let mut known: Vec<String> = Vec::new();
        if self.is_known(word) {
            known.push(word.to_string());
        }
        for candidate in detach(word, pos) {
            if self.is_known(&candidate) && !known.contains(&candidate) {
                known.push(candidate);
            }
        }
        if let Some(lemma) = shortest(known) {
            return lemma;
        }

        if ENGLISH_STOP_WORDS_SET.contains(word) {
            return word.to_string();
        }

        guess(word, pos).unwrap_or_else(|| word.to_string())
    }
}

/// Apply every substitution rule of `pos` whose suffix matches.
pub fn detach(word: &str, pos: WordNetPos) -> Vec<String> {
    tables::substitutions(pos)
        .iter()
        .filter_map(|(suffix, replacement)| {
            word.strip_suffix(suffix)
                .filter(|stem| !stem.is_empty())
                .map(|stem| format!("{stem}{replacement}"))
        })
        .collect()
}

/// The shortest item; the first one on ties.
fn shortest<S: AsRef<str>>(items: Vec<S>) -> Option<S> {
    items.into_iter().min_by_key(|s| s.as_ref().chars().count())
}

fn guess(word: &str, pos: WordNetPos) -> Option<String> {
    if word.chars().count() < 3 || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    match pos {
        WordNetPos::Noun => guess_noun(word),
        WordNetPos::Verb => guess_verb(word),
        WordNetPos::Adjective => guess_adjective(word),
        WordNetPos::Adverb => None,
    }
}

fn guess_noun(word: &str) -> Option<String> {
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return None;
    }
    if word.len() > 4 {
        if let Some(stem) = word.strip_suffix("ies") {
            return Some(format!("{stem}y"));
        }
        if let Some(stem) = word.strip_suffix("men") {
            return Some(format!("{stem}man"));
        }
    }
    for suffix in ["sses", "xes", "zes", "ches", "shes"] {
        if word.ends_with(suffix) {
            return Some(word[..word.len() - 2].to_string());
        }
    }
    word.strip_suffix('s').map(str::to_string)
}

fn guess_verb(word: &str) -> Option<String> {
    let long = word.len() > 4;

    if long {
        if let Some(stem) = word.strip_suffix("ies") {
            return Some(format!("{stem}y"));
        }
        if let Some(stem) = word.strip_suffix("ied") {
            return Some(format!("{stem}y"));
        }
    }
    if let Some(stem) = word.strip_suffix("es") {
        if ["s", "x", "z", "ch", "sh", "o"].iter().any(|end| stem.ends_with(end)) {
            return Some(stem.to_string());
        }
        return Some(format!("{stem}e"));
    }
    if let Some(stem) = word.strip_suffix('s') {
        if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
            return None;
        }
        return Some(stem.to_string());
    }
    if long {
        if let Some(stem) = word.strip_suffix("ed") {
            if stem.ends_with('e') {
                return Some(format!("{stem}e"));
            }
            return Some(restore_verb_stem(stem));
        }
        if let Some(stem) = word.strip_suffix("ing") {
            return Some(restore_verb_stem(stem));
        }
    }
    None
}

fn guess_adjective(word: &str) -> Option<String> {
    let stripped = if word.len() > 4 {
        word.strip_suffix("est").or_else(|| word.strip_suffix("er"))
    } else if word.len() > 3 {
        word.strip_suffix("er")
    } else {
        None
    };
    let stem = stripped?;

    if let Some(single) = undouble(stem) {
        return Some(single);
    }
    if let Some(base) = stem.strip_suffix('i') {
        return Some(format!("{base}y"));
    }
    if needs_silent_e(stem) || stem.ends_with("rg") {
        return Some(format!("{stem}e"));
    }
    if stem.len() == 4 && stem.ends_with('s') && ends_with_vowel(&stem[..3]) {
        return Some(format!("{stem}e"));
    }
    Some(stem.to_string())
}

fn restore_verb_stem(stem: &str) -> String {
    if let Some(single) = undouble(stem) {
        return single;
    }
    if needs_silent_e(stem) {
        return format!("{stem}e");
    }
    // creat(e), debat(e), but not treat
    if stem.len() >= 5 && stem.ends_with("at") && !ends_with_vowel(&stem[..stem.len() - 2]) {
        return format!("{stem}e");
    }
    if stem.len() == 2 && is_vowel(stem.as_bytes()[0]) && !is_vowel(stem.as_bytes()[1]) {
        return format!("{stem}e");
    }
    stem.to_string()
}

/// `runn` → `run`, `bigg` → `big`; `fill`, `pass`, `buzz` and `stuff` keep
/// their double letter.
fn undouble(stem: &str) -> Option<String> {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n >= 3
        && bytes[n - 1] == bytes[n - 2]
        && !is_vowel(bytes[n - 1])
        && !matches!(bytes[n - 1], b'l' | b's' | b'f' | b'z')
    {
        Some(stem[..n - 1].to_string())
    } else {
        None
    }
}

fn needs_silent_e(stem: &str) -> bool {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n == 0 {
        return false;
    }
    let last = bytes[n - 1];
    if matches!(last, b'v' | b'u' | b'c') || (last == b'z' && n > 1 && bytes[n - 2] != b'z') {
        return true;
    }
    // handl(e), simpl(e)
    if last == b'l' && n > 2 && !is_vowel(bytes[n - 2]) && !matches!(bytes[n - 2], b'l' | b'r') {
        return true;
    }
    // consonant-vowel-consonant single syllables: mak(e), nic(e)
    n == 3
        && !is_vowel(bytes[0])
        && is_vowel(bytes[1])
        && !is_vowel(last)
        && !matches!(last, b'w' | b'x' | b'y')
}

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u')
}

fn ends_with_vowel(s: &str) -> bool {
    s.as_bytes().last().is_some_and(|b| is_vowel(*b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemma(word: &str, pos: WordNetPos) -> String {
        Lemmatizer::new().lemmatize(word, pos)
    }

    #[test]
    fn test_nouns() {
        assert_eq!(lemma("bats", WordNetPos::Noun), "bat");
        assert_eq!(lemma("boxes", WordNetPos::Noun), "box");
        assert_eq!(lemma("glasses", WordNetPos::Noun), "glass");
        assert_eq!(lemma("industries", WordNetPos::Noun), "industry");
        assert_eq!(lemma("feet", WordNetPos::Noun), "foot");
        assert_eq!(lemma("children", WordNetPos::Noun), "child");
        assert_eq!(lemma("widgets", WordNetPos::Noun), "widget");
        assert_eq!(lemma("status", WordNetPos::Noun), "status");
    }

    #[test]
    fn test_untouched_words_keep_case() {
        assert_eq!(lemma("The", WordNetPos::Noun), "The");
        assert_eq!(lemma("their", WordNetPos::Noun), "their");
        assert_eq!(lemma("this", WordNetPos::Noun), "this");
        assert_eq!(lemma(".", WordNetPos::Noun), ".");
        assert_eq!(lemma("2025", WordNetPos::Noun), "2025");
        assert_eq!(lemma("Dogs", WordNetPos::Noun), "Dogs");
        assert_eq!(lemma("Are", WordNetPos::Verb), "Are");
        assert_eq!(lemma("dogs", WordNetPos::Noun), "dog");
    }

    #[test]
    fn test_verbs() {
        assert_eq!(lemma("are", WordNetPos::Verb), "be");
        assert_eq!(lemma("was", WordNetPos::Verb), "be");
        assert_eq!(lemma("hanging", WordNetPos::Verb), "hang");
        assert_eq!(lemma("making", WordNetPos::Verb), "make");
        assert_eq!(lemma("running", WordNetPos::Verb), "run");
        assert_eq!(lemma("continues", WordNetPos::Verb), "continue");
        assert_eq!(lemma("elected", WordNetPos::Verb), "elect");
        assert_eq!(lemma("studied", WordNetPos::Verb), "study");
        assert_eq!(lemma("agreed", WordNetPos::Verb), "agree");
        assert_eq!(lemma("born", WordNetPos::Verb), "bear");
    }

    #[test]
    fn test_guessed_verb_stems() {
        assert_eq!(lemma("hopping", WordNetPos::Verb), "hop");
        assert_eq!(lemma("giving", WordNetPos::Verb), "give");
        assert_eq!(lemma("handled", WordNetPos::Verb), "handle");
        assert_eq!(lemma("calculated", WordNetPos::Verb), "calculate");
        assert_eq!(lemma("treated", WordNetPos::Verb), "treat");
        assert_eq!(lemma("fixes", WordNetPos::Verb), "fix");
    }

    #[test]
    fn test_adjectives() {
        assert_eq!(lemma("best", WordNetPos::Adjective), "best");
        assert_eq!(lemma("better", WordNetPos::Adjective), "good");
        assert_eq!(lemma("striped", WordNetPos::Adjective), "striped");
        assert_eq!(lemma("bigger", WordNetPos::Adjective), "big");
        assert_eq!(lemma("nicer", WordNetPos::Adjective), "nice");
        assert_eq!(lemma("happiest", WordNetPos::Adjective), "happy");
        assert_eq!(lemma("clever", WordNetPos::Adjective), "clever");
    }

    #[test]
    fn test_adverbs() {
        assert_eq!(lemma("quickly", WordNetPos::Adverb), "quickly");
        assert_eq!(lemma("better", WordNetPos::Adverb), "well");
    }

    #[test]
    fn test_custom_vocabulary() {
        assert_eq!(lemma("tapes", WordNetPos::Verb), "tape");
        let lemmatizer = Lemmatizer::new().with_vocabulary(["tap"]);
        assert_eq!(lemmatizer.lemmatize("tapes", WordNetPos::Verb), "tap");
    }

    #[test]
    fn test_detach() {
        assert_eq!(
            detach("hanging", WordNetPos::Verb),
            vec!["hange".to_string(), "hang".to_string()]
        );
        assert!(detach("quickly", WordNetPos::Adverb).is_empty());
    }
}
