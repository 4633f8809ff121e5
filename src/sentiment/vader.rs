//! VADER (Valence Aware Dictionary and sEntiment Reasoner) scoring.
//!
//! Every word found in the [`VaderLexicon`] contributes its valence, adjusted
//! by the words around it:
//!
//! - boosters (`very`, `extremely`) and dampeners (`slightly`, `kind of`) up
//!   to three words earlier, decaying with distance;
//! - ALL-CAPS emphasis when the text mixes cases;
//! - negations up to three words earlier, and the word `no`;
//! - idioms such as `the bomb` or `kiss of death`;
//! - a contrastive `but`, which damps what comes before it and amplifies what
//!   comes after it.
//!
//! The summed valence, raised by `!` and `?` emphasis, is normalised into the
//! `compound` score in `[-1, 1]`.

use std::fmt;
use std::sync::{Arc, LazyLock};

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use super::lexicon::VaderLexicon;

/// Empirically derived booster increment.
const B_INCR: f64 = 0.293;
const B_DECR: f64 = -0.293;
/// ALL-CAPS increment.
const C_INCR: f64 = 0.733;
/// Negation scalar.
const N_SCALAR: f64 = -0.74;
/// Normalisation constant of the compound score.
const ALPHA: f64 = 15.0;

const NEGATE: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't", "aren't",
    "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt", "havent",
    "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't", "isn't",
    "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing",
    "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent", "oughtn't", "shan't",
    "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont", "wouldnt", "won't", "wouldn't",
    "rarely", "seldom", "despite",
];

const INCREMENTS: &[&str] = &[
    "absolutely", "amazingly", "awfully", "completely", "considerable", "considerably",
    "decidedly", "deeply", "effing", "enormous", "enormously", "entirely", "especially",
    "exceptional", "exceptionally", "extreme", "extremely", "fabulously", "flipping", "flippin",
    "frackin", "fracking", "fricking", "frickin", "frigging", "friggin", "fully", "fuckin",
    "fucking", "fuggin", "fugging", "greatly", "hella", "highly", "hugely", "incredible",
    "incredibly", "intensely", "major", "majorly", "more", "most", "particularly", "purely",
    "quite", "really", "remarkably", "so", "substantially", "thoroughly", "total", "totally",
    "tremendous", "tremendously", "uber", "unbelievably", "unusually", "utter", "utterly", "very",
];

const DECREMENTS: &[&str] = &[
    "almost", "barely", "hardly", "just enough", "kind of", "kinda", "kindof", "kind-of", "less",
    "little", "marginal", "marginally", "occasional", "occasionally", "partly", "scarce",
    "scarcely", "slight", "slightly", "somewhat", "sort of", "sorta", "sortof", "sort-of",
];

const SPECIAL_CASES: &[(&str, f64)] = &[
    ("the shit", 3.0),
    ("the bomb", 3.0),
    ("bad ass", 1.5),
    ("badass", 1.5),
    ("bus stop", 0.0),
    ("yeah right", -2.0),
    ("kiss of death", -1.5),
    ("to die for", 3.0),
    ("beating heart", 3.1),
    ("broken heart", -2.9),
];

static BOOSTERS: LazyLock<AHashMap<&'static str, f64>> = LazyLock::new(|| {
    INCREMENTS
        .iter()
        .map(|&word| (word, B_INCR))
        .chain(DECREMENTS.iter().map(|&word| (word, B_DECR)))
        .collect()
});

static IDIOMS: LazyLock<AHashMap<&'static str, f64>> =
    LazyLock::new(|| SPECIAL_CASES.iter().copied().collect());

/// Proportions of negative, neutral and positive valence plus the
/// normalised compound score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

impl fmt::Display for PolarityScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "neg: {}, neu: {}, pos: {}, compound: {}",
            self.neg, self.neu, self.pos, self.compound
        )
    }
}

/// Scores text with the VADER rules over a shared lexicon.
#[derive(Clone, Debug)]
pub struct SentimentIntensityAnalyzer {
    lexicon: Arc<VaderLexicon>,
}

impl SentimentIntensityAnalyzer {
    /// Create an analyzer over the built-in lexicon.
    pub fn new() -> Self {
        Self::with_lexicon(VaderLexicon::builtin())
    }

    pub fn with_lexicon(lexicon: VaderLexicon) -> Self {
        SentimentIntensityAnalyzer {
            lexicon: Arc::new(lexicon),
        }
    }

    pub fn lexicon(&self) -> &VaderLexicon {
        &self.lexicon
    }

    /// Score `text`. Empty text scores zero everywhere.
    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        let words: Vec<&str> = text.split_whitespace().map(strip_punctuation).collect();
        let lower: Vec<String> = words.iter().map(|word| word.to_lowercase()).collect();
        let cap_diff = is_cap_diff(&words);

        let mut sentiments = Vec::with_capacity(words.len());
        for i in 0..words.len() {
            if BOOSTERS.contains_key(lower[i].as_str()) {
                sentiments.push(0.0);
                continue;
            }
            if lower[i] == "kind" && lower.get(i + 1).is_some_and(|next| next == "of") {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.sentiment_valence(&words, &lower, cap_diff, i));
        }

        but_check(&lower, &mut sentiments);
        let scores = score_valence(&sentiments, text);
        log::debug!("{} words scored {scores}", words.len());
        scores
    }

    fn sentiment_valence(&self, words: &[&str], lower: &[String], cap_diff: bool, i: usize) -> f64 {
        let Some(base) = self.lexicon.get(&lower[i]) else {
            return 0.0;
        };
        let mut valence = base;

        if lower[i] == "no" && lower.get(i + 1).is_some_and(|next| self.lexicon.contains(next)) {
            valence = 0.0;
        }
        if (i > 0 && lower[i - 1] == "no")
            || (i > 1 && lower[i - 2] == "no")
            || (i > 2 && lower[i - 3] == "no" && matches!(lower[i - 1].as_str(), "or" | "nor"))
        {
            valence = base * N_SCALAR;
        }

        if cap_diff && is_upper(words[i]) {
            if valence > 0.0 {
                valence += C_INCR;
            } else {
                valence -= C_INCR;
            }
        }

        for distance in 0..3 {
            if i <= distance || self.lexicon.contains(&lower[i - distance - 1]) {
                continue;
            }
            let mut scalar = scalar_inc_dec(words[i - distance - 1], valence, cap_diff);
            if distance == 1 {
                scalar *= 0.95;
            } else if distance == 2 {
                scalar *= 0.9;
            }
            valence += scalar;
            valence = negation_check(valence, lower, distance, i);
            if distance == 2 {
                valence = special_idioms_check(valence, lower, i);
            }
        }

        self.least_check(valence, lower, i)
    }

    /// `least` flips the sense of the next word, except in `at least` and
    /// `very least`.
    fn least_check(&self, valence: f64, lower: &[String], i: usize) -> f64 {
        if i > 1 && lower[i - 1] == "least" && !self.lexicon.contains(&lower[i - 1]) {
            if lower[i - 2] != "at" && lower[i - 2] != "very" {
                return valence * N_SCALAR;
            }
        } else if i > 0 && lower[i - 1] == "least" && !self.lexicon.contains(&lower[i - 1]) {
            return valence * N_SCALAR;
        }
        valence
    }
}

impl Default for SentimentIntensityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip leading and trailing ASCII punctuation unless that would leave two
/// characters or fewer, so emoticons like `:)` survive.
fn strip_punctuation(token: &str) -> &str {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        token
    } else {
        stripped
    }
}

/// A word with at least one cased character, all of them upper case.
fn is_upper(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

/// Whether some, but not all, words are ALL-CAPS.
fn is_cap_diff(words: &[&str]) -> bool {
    let caps = words.iter().filter(|word| is_upper(word)).count();
    caps > 0 && caps < words.len()
}

fn is_negated(word: &str) -> bool {
    NEGATE.contains(&word) || word.contains("n't")
}

/// Booster contribution of `word` towards a valence of the given sign.
fn scalar_inc_dec(word: &str, valence: f64, cap_diff: bool) -> f64 {
    let Some(&booster) = BOOSTERS.get(word.to_lowercase().as_str()) else {
        return 0.0;
    };
    let mut scalar = if valence < 0.0 { -booster } else { booster };
    if cap_diff && is_upper(word) {
        if valence > 0.0 {
            scalar += C_INCR;
        } else {
            scalar -= C_INCR;
        }
    }
    scalar
}

fn negation_check(valence: f64, lower: &[String], distance: usize, i: usize) -> f64 {
    let word = |back: usize| lower[i - back].as_str();
    let so_or_this = |w: &str| w == "so" || w == "this";

    match distance {
        0 => {
            if is_negated(word(1)) {
                return valence * N_SCALAR;
            }
        }
        1 => {
            if word(2) == "never" && so_or_this(word(1)) {
                return valence * 1.25;
            } else if word(2) == "without" && word(1) == "doubt" {
                return valence;
            } else if is_negated(word(2)) {
                return valence * N_SCALAR;
            }
        }
        2 => {
            if (word(3) == "never" && so_or_this(word(2))) || so_or_this(word(1)) {
                return valence * 1.25;
            } else if word(3) == "without" && (word(2) == "doubt" || word(1) == "doubt") {
                return valence;
            } else if is_negated(word(3)) {
                return valence * N_SCALAR;
            }
        }
        _ => {}
    }
    valence
}

/// Replace the valence with that of an idiom ending at or around `i`, then
/// add boosters spelled as two or three words. Requires `i >= 3`.
fn special_idioms_check(mut valence: f64, lower: &[String], i: usize) -> f64 {
    let join = |range: std::ops::RangeInclusive<usize>| lower[range].join(" ");

    let one_zero = join(i - 1..=i);
    let two_one_zero = join(i - 2..=i);
    let two_one = join(i - 2..=i - 1);
    let three_two_one = join(i - 3..=i - 1);
    let three_two = join(i - 3..=i - 2);

    for sequence in [&one_zero, &two_one_zero, &two_one, &three_two_one, &three_two] {
        if let Some(&idiom) = IDIOMS.get(sequence.as_str()) {
            valence = idiom;
            break;
        }
    }
    if lower.len() > i + 1 {
        if let Some(&idiom) = IDIOMS.get(join(i..=i + 1).as_str()) {
            valence = idiom;
        }
    }
    if lower.len() > i + 2 {
        if let Some(&idiom) = IDIOMS.get(join(i..=i + 2).as_str()) {
            valence = idiom;
        }
    }

    for n_gram in [&three_two_one, &three_two, &two_one] {
        if let Some(&booster) = BOOSTERS.get(n_gram.as_str()) {
            valence += booster;
        }
    }
    valence
}

/// Halve sentiment before the first `but` and raise it by half after it.
fn but_check(lower: &[String], sentiments: &mut [f64]) {
    let Some(but) = lower.iter().position(|word| word == "but") else {
        return;
    };
    for (position, sentiment) in sentiments.iter_mut().enumerate() {
        if position < but {
            *sentiment *= 0.5;
        } else if position > but {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64 * 0.292;
    let questions = match text.matches('?').count() {
        count @ 2..=3 => count as f64 * 0.18,
        count if count > 3 => 0.96,
        _ => 0.0,
    };
    exclamations + questions
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    if sentiments.is_empty() {
        return PolarityScores::default();
    }

    let emphasis = punctuation_emphasis(text);
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = normalize(sum);

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0usize;
    for &sentiment in sentiments {
        if sentiment > 0.0 {
            pos_sum += sentiment + 1.0;
        } else if sentiment < 0.0 {
            neg_sum += sentiment - 1.0;
        } else {
            neu_count += 1;
        }
    }
    if pos_sum > neg_sum.abs() {
        pos_sum += emphasis;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= emphasis;
    }

    let total = pos_sum + neg_sum.abs() + neu_count as f64;
    PolarityScores {
        neg: round_to((neg_sum / total).abs(), 3),
        neu: round_to((neu_count as f64 / total).abs(), 3),
        pos: round_to((pos_sum / total).abs(), 3),
        compound: round_to(compound, 4),
    }
}
