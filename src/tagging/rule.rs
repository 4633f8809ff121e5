//! Rule-based part-of-speech tagger.
//!
//! Tagging runs in two passes. The first pass assigns every token an
//! initial tag from punctuation and number shapes, capitalization, the
//! built-in lexicon and suffix heuristics. The second pass walks the
//! sentence left to right and repairs tags from their neighbours: past
//! forms after *be*/*have* become participles, `-ing` forms after nouns
//! become nouns, plural-looking words after a singular subject become
//! third-person verbs, and so on.

use std::sync::LazyLock;

use ahash::AHashMap;
use regex::Regex;

use super::lexicon;
use super::tag::PosTag;
use super::{TaggedToken, Tagger};
use crate::error::Result;

static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+([.,:/]\d+)*|\.\d+)(%|s|th|st|nd|rd)?$")
        .expect("number pattern is valid")
});

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ship", "ism", "ist", "ence", "ance", "hood", "dom",
    "ure", "age", "er", "or",
];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "ical", "al", "ic", "less", "ish", "ary", "ant",
];

const VERB_SUFFIXES: &[&str] = &["ize", "ise", "ify"];

/// What precedes a token once adverbs are skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Auxiliary {
    Be,
    Have,
    Modal,
    To,
}

/// Lexicon, suffix and context rule tagger for English.
///
/// ```
/// use sapling::tagging::{PosTag, RuleTagger, Tagger};
///
/// let words: Vec<String> = ["He", "was", "elected", "president", "."]
///     .iter()
///     .map(|w| w.to_string())
///     .collect();
/// let tags: Vec<PosTag> = RuleTagger::new()
///     .tag(&words)
///     .unwrap()
///     .into_iter()
///     .map(|t| t.tag)
///     .collect();
///
/// assert_eq!(
///     tags,
///     vec![PosTag::Prp, PosTag::Vbd, PosTag::Vbn, PosTag::Nn, PosTag::Period]
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct RuleTagger {
    overrides: AHashMap<String, PosTag>,
}

impl RuleTagger {
    /// Create a tagger backed by the built-in lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a lexicon entry. The word is matched case-insensitively.
    pub fn with_word<S: AsRef<str>>(mut self, word: S, tag: PosTag) -> Self {
        self.overrides.insert(word.as_ref().to_lowercase(), tag);
        self
    }

    fn lookup(&self, lower: &str) -> Option<PosTag> {
        self.overrides
            .get(lower)
            .copied()
            .or_else(|| lexicon::lookup(lower))
    }

    /// First-pass tag. The flag reports whether the tag was guessed from the
    /// word's shape rather than found in the lexicon.
    fn initial_tag(&self, words: &[String], i: usize) -> (PosTag, bool) {
        let word = words[i].as_str();

        if let Some(tag) = punctuation_tag(word) {
            return (tag, false);
        }
        if NUMBER.is_match(word) {
            return (PosTag::Cd, false);
        }
        if word == "I" {
            return (PosTag::Prp, false);
        }

        let lower = word.to_lowercase();
        if is_acronym(word) && !self.overrides.contains_key(&lower) {
            return (PosTag::Nnp, false);
        }

        if is_capitalized(word) {
            if !starts_sentence(words, i) {
                return (PosTag::Nnp, false);
            }
            if let Some(tag) = self.lookup(&lower) {
                return (tag, false);
            }
            let next_capitalized = words
                .get(i + 1)
                .is_some_and(|next| is_capitalized(next) && next != "I");
            if next_capitalized {
                return (PosTag::Nnp, false);
            }
            return (suffix_tag(&lower).unwrap_or(PosTag::Nnp), true);
        }

        if let Some(tag) = self.lookup(&lower) {
            return (tag, false);
        }

        (suffix_tag(&lower).unwrap_or(PosTag::Nn), true)
    }

    /// Second pass: repair tags from their neighbours.
    fn repair(&self, lower: &[String], tags: &mut [PosTag], guessed: &[bool]) {
        for i in 0..tags.len() {
            let word = lower[i].as_str();
            let prev = if i > 0 { Some(tags[i - 1]) } else { None };
            let prev_word = if i > 0 { Some(lower[i - 1].as_str()) } else { None };
            let next = tags.get(i + 1).copied();
            let next_is_noun = next.is_some_and(|t| t.is_noun());
            let aux = auxiliary_before(lower, tags, i);
            let after_modifier = matches!(
                prev,
                Some(PosTag::Dt | PosTag::PrpPossessive | PosTag::Pos | PosTag::Jj)
            );

            let current = tags[i];
            tags[i] = match current {
                PosTag::Vbd if !lexicon::is_be(word) && !lexicon::is_have(word) && word != "did" => {
                    if matches!(aux, Some(Auxiliary::Be | Auxiliary::Have)) {
                        PosTag::Vbn
                    } else if after_modifier && next_is_noun {
                        PosTag::Jj
                    } else {
                        PosTag::Vbd
                    }
                }
                PosTag::Vbg if guessed[i] => {
                    if aux == Some(Auxiliary::Be) {
                        PosTag::Vbg
                    } else if after_modifier && next_is_noun {
                        PosTag::Jj
                    } else if prev.is_some_and(|t| t.is_noun()) || after_modifier {
                        PosTag::Nn
                    } else {
                        PosTag::Vbg
                    }
                }
                PosTag::Nns if guessed[i] => {
                    if third_person_subject(prev, prev_word, next) {
                        PosTag::Vbz
                    } else {
                        PosTag::Nns
                    }
                }
                PosTag::Nn | PosTag::Vb | PosTag::Vbp
                    if matches!(aux, Some(Auxiliary::To | Auxiliary::Modal))
                        && (guessed[i] || matches!(current, PosTag::Vb | PosTag::Vbp)) =>
                {
                    PosTag::Vb
                }
                PosTag::Nn if guessed[i] && plural_subject(prev, prev_word) && !next_is_noun => {
                    PosTag::Vbp
                }
                PosTag::Vb => {
                    if plural_subject(prev, prev_word) {
                        PosTag::Vbp
                    } else if after_modifier {
                        PosTag::Nn
                    } else {
                        PosTag::Vb
                    }
                }
                PosTag::In if word == "like" => {
                    if matches!(aux, Some(Auxiliary::To | Auxiliary::Modal)) {
                        PosTag::Vb
                    } else if plural_subject(prev, prev_word) {
                        PosTag::Vbp
                    } else {
                        PosTag::In
                    }
                }
                PosTag::Ex => {
                    let next_word = lower.get(i + 1).map(String::as_str);
                    if next_word.is_some_and(lexicon::is_be) || next == Some(PosTag::Md) {
                        PosTag::Ex
                    } else {
                        PosTag::Rb
                    }
                }
                PosTag::Dt if word == "that" => match next {
                    Some(t) if t.is_verb() || t == PosTag::Md => PosTag::Wdt,
                    Some(PosTag::Prp | PosTag::Dt | PosTag::Nnp | PosTag::PrpPossessive) => {
                        PosTag::In
                    }
                    _ => PosTag::Dt,
                },
                PosTag::PrpPossessive if word == "her" => {
                    if next.is_some_and(|t| t.is_noun() || t.is_adjective() || t == PosTag::Cd) {
                        PosTag::PrpPossessive
                    } else {
                        PosTag::Prp
                    }
                }
                PosTag::Pos => match next {
                    Some(
                        PosTag::Dt
                        | PosTag::Vbg
                        | PosTag::Vbn
                        | PosTag::Jj
                        | PosTag::Rb
                        | PosTag::In
                        | PosTag::Cd
                        | PosTag::Prp,
                    ) => PosTag::Vbz,
                    _ => PosTag::Pos,
                },
                PosTag::Jjr if next.is_some_and(|t| t.is_adjective() || t.is_adverb()) => {
                    PosTag::Rbr
                }
                PosTag::Jjs if next.is_some_and(|t| t.is_adjective() || t.is_adverb()) => {
                    PosTag::Rbs
                }
                tag => tag,
            };
        }
    }
}

impl Tagger for RuleTagger {
    fn tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>> {
        let mut tags = Vec::with_capacity(tokens.len());
        let mut guessed = Vec::with_capacity(tokens.len());
        for i in 0..tokens.len() {
            let (tag, was_guessed) = self.initial_tag(tokens, i);
            tags.push(tag);
            guessed.push(was_guessed);
        }

        let lower: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        self.repair(&lower, &mut tags, &guessed);

        log::debug!("Tagged {} tokens", tokens.len());

        Ok(tokens
            .iter()
            .zip(tags)
            .map(|(word, tag)| TaggedToken::new(word.clone(), tag))
            .collect())
    }

    fn name(&self) -> &'static str {
        "rule"
    }
}

fn punctuation_tag(word: &str) -> Option<PosTag> {
    let tag = match word {
        "." | "!" | "?" => PosTag::Period,
        "," => PosTag::Comma,
        ":" | ";" | "..." | "--" | "-" => PosTag::Colon,
        "(" | "[" | "{" => PosTag::OpenBracket,
        ")" | "]" | "}" => PosTag::CloseBracket,
        "``" => PosTag::OpenQuote,
        "''" | "'" => PosTag::CloseQuote,
        "#" => PosTag::Pound,
        "$" => PosTag::Dollar,
        _ if !word.is_empty() && word.chars().all(|c| matches!(c, '.' | '!' | '?')) => {
            PosTag::Period
        }
        _ if !word.is_empty() && word.chars().all(|c| c.is_ascii_punctuation()) => PosTag::Sym,
        _ => return None,
    };
    Some(tag)
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn is_acronym(word: &str) -> bool {
    word.chars().filter(|c| c.is_alphabetic()).count() > 1
        && word
            .chars()
            .all(|c| c.is_uppercase() || matches!(c, '.' | '&'))
}

fn starts_sentence(words: &[String], i: usize) -> bool {
    let mut j = i;
    while j > 0 {
        match words[j - 1].as_str() {
            "``" | "(" | "[" | "'" => j -= 1,
            "." | "!" | "?" => return true,
            _ => return false,
        }
    }
    true
}

fn has_vowel(stem: &str) -> bool {
    stem.chars().any(|c| "aeiouy".contains(c))
}

fn suffix_tag(lower: &str) -> Option<PosTag> {
    let len = lower.chars().count();

    if len > 2 && lower.contains('-') {
        return Some(PosTag::Jj);
    }
    if len > 4 {
        if let Some(stem) = lower.strip_suffix("ing") {
            if has_vowel(stem) {
                return Some(PosTag::Vbg);
            }
        }
    }
    if len > 3 {
        if let Some(stem) = lower.strip_suffix("ed") {
            if has_vowel(stem) {
                return Some(PosTag::Vbd);
            }
        }
        if lower.ends_with("ly") {
            return Some(PosTag::Rb);
        }
    }

    let long_enough = |suffix: &str| lower.ends_with(suffix) && len > suffix.len() + 2;
    if NOUN_SUFFIXES.iter().any(|s| long_enough(s)) {
        return Some(PosTag::Nn);
    }
    if ADJECTIVE_SUFFIXES.iter().any(|s| long_enough(s)) {
        return Some(PosTag::Jj);
    }
    if VERB_SUFFIXES.iter().any(|s| long_enough(s)) {
        return Some(PosTag::Vb);
    }

    if lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("is") {
        return Some(PosTag::Nn);
    }
    if len > 3 && lower.ends_with('s') {
        return Some(PosTag::Nns);
    }

    None
}

/// Find the auxiliary (if any) directly before token `i`, skipping adverbs.
fn auxiliary_before(lower: &[String], tags: &[PosTag], i: usize) -> Option<Auxiliary> {
    let mut j = i;
    while j > 0 {
        j -= 1;
        let word = lower[j].as_str();
        if lexicon::is_be(word) {
            return Some(Auxiliary::Be);
        }
        if lexicon::is_have(word) {
            return Some(Auxiliary::Have);
        }
        match tags[j] {
            PosTag::Md => return Some(Auxiliary::Modal),
            PosTag::To => return Some(Auxiliary::To),
            PosTag::Rb => continue,
            _ => return None,
        }
    }
    None
}

fn plural_subject(prev: Option<PosTag>, prev_word: Option<&str>) -> bool {
    match prev {
        Some(PosTag::Prp) => matches!(prev_word, Some("i" | "you" | "we" | "they")),
        Some(PosTag::Nns) => true,
        _ => false,
    }
}

fn third_person_subject(prev: Option<PosTag>, prev_word: Option<&str>, next: Option<PosTag>) -> bool {
    match prev {
        Some(PosTag::Prp) => matches!(prev_word, Some("he" | "she" | "it")),
        Some(PosTag::Nn | PosTag::Nnp) => matches!(
            next,
            Some(
                PosTag::Dt
                    | PosTag::In
                    | PosTag::Rb
                    | PosTag::Vbg
                    | PosTag::Vbn
                    | PosTag::Jj
                    | PosTag::PrpPossessive
                    | PosTag::To
                    | PosTag::Cd
                    | PosTag::Prp
            )
        ),
        _ => false,
    }
}
