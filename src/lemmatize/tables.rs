//! Exception lists, detachment rules and the lemma vocabulary.

use std::sync::LazyLock;

use ahash::{AHashMap, AHashSet};

use super::WordNetPos;

/// Suffix substitutions tried, in order, for each word class.
pub fn substitutions(pos: WordNetPos) -> &'static [(&'static str, &'static str)] {
    match pos {
        WordNetPos::Noun => &[
            ("s", ""),
            ("ses", "s"),
            ("ves", "f"),
            ("xes", "x"),
            ("zes", "z"),
            ("ches", "ch"),
            ("shes", "sh"),
            ("men", "man"),
            ("ies", "y"),
        ],
        WordNetPos::Verb => &[
            ("s", ""),
            ("ies", "y"),
            ("es", "e"),
            ("es", ""),
            ("ed", "e"),
            ("ed", ""),
            ("ing", "e"),
            ("ing", ""),
        ],
        WordNetPos::Adjective => &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")],
        WordNetPos::Adverb => &[],
    }
}

const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("lice", "louse"),
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("people", "person"),
    ("oxen", "ox"),
    ("data", "datum"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("theses", "thesis"),
    ("wolves", "wolf"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("lives", "life"),
    ("wives", "wife"),
    ("halves", "half"),
    ("selves", "self"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("cacti", "cactus"),
    ("fungi", "fungus"),
    ("alumni", "alumnus"),
];

const VERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("am", "be"),
    ("are", "be"),
    ("is", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("went", "go"),
    ("gone", "go"),
    ("goes", "go"),
    ("came", "come"),
    ("made", "make"),
    ("took", "take"),
    ("taken", "take"),
    ("got", "get"),
    ("gotten", "get"),
    ("saw", "see"),
    ("seen", "see"),
    ("knew", "know"),
    ("known", "know"),
    ("thought", "think"),
    ("told", "tell"),
    ("became", "become"),
    ("began", "begin"),
    ("begun", "begin"),
    ("gave", "give"),
    ("given", "give"),
    ("found", "find"),
    ("left", "leave"),
    ("felt", "feel"),
    ("kept", "keep"),
    ("held", "hold"),
    ("brought", "bring"),
    ("bought", "buy"),
    ("ran", "run"),
    ("wrote", "write"),
    ("written", "write"),
    ("stood", "stand"),
    ("sat", "sit"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("built", "build"),
    ("sent", "send"),
    ("spent", "spend"),
    ("won", "win"),
    ("born", "bear"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("fell", "fall"),
    ("fallen", "fall"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("broke", "break"),
    ("broken", "break"),
    ("forgot", "forget"),
    ("forgotten", "forget"),
    ("said", "say"),
    ("paid", "pay"),
    ("met", "meet"),
    ("led", "lead"),
    ("lost", "lose"),
    ("meant", "mean"),
    ("sold", "sell"),
    ("taught", "teach"),
    ("caught", "catch"),
    ("fought", "fight"),
    ("understood", "understand"),
    ("shown", "show"),
    ("flew", "fly"),
    ("flown", "fly"),
    ("drew", "draw"),
    ("drawn", "draw"),
    ("threw", "throw"),
    ("thrown", "throw"),
    ("swam", "swim"),
    ("sang", "sing"),
    ("sung", "sing"),
    ("rode", "ride"),
    ("ridden", "ride"),
    ("hid", "hide"),
    ("hidden", "hide"),
    ("woke", "wake"),
    ("wore", "wear"),
    ("worn", "wear"),
    ("tore", "tear"),
    ("torn", "tear"),
    ("struck", "strike"),
    ("slept", "sleep"),
    ("heard", "hear"),
    ("rose", "rise"),
    ("risen", "rise"),
    ("shook", "shake"),
    ("shaken", "shake"),
    ("stole", "steal"),
    ("stolen", "steal"),
];

const ADJECTIVE_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
    ("further", "far"),
    ("farther", "far"),
    ("furthest", "far"),
    ("farthest", "far"),
    ("elder", "old"),
    ("eldest", "old"),
];

const ADVERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "well"),
    ("best", "well"),
    ("farther", "far"),
    ("further", "far"),
    ("harder", "hard"),
    ("hardest", "hard"),
];

/// Common dictionary forms. A candidate lemma found here is preferred over
/// a guessed one.
const VOCABULARY: &[&str] = &[
    // nouns
    "ability", "account", "actor", "age", "analysis", "animal", "answer", "apple", "area",
    "army", "art", "baby", "bag", "ball", "bank", "bat", "battery", "bed", "bird", "book",
    "box", "boy", "brain", "branch", "brush", "bus", "car", "case", "cat", "cell", "chair",
    "change", "child", "church", "city", "class", "company", "computer", "country", "crisis",
    "day", "deal", "dish", "dog", "door", "economy", "eye", "face", "fact", "family", "fear",
    "field", "film", "fish", "foot", "friend", "game", "girl", "glass", "goose", "government",
    "group", "hand", "head", "heart", "history", "home", "hope", "horse", "hour", "house",
    "idea", "industry", "intelligence", "issue", "job", "key", "kind", "king", "lady", "law",
    "leaf", "life", "line", "machine", "man", "market", "match", "model", "money", "month",
    "mouse", "movie", "name", "nation", "night", "number", "office", "party", "person",
    "place", "plan", "point", "policy", "president", "price", "problem", "product", "program",
    "question", "reason", "regulation", "review", "room", "rule", "school", "series", "side",
    "society", "song", "story", "stripe", "student", "study", "system", "table", "teacher",
    "team", "thing", "time", "tooth", "tree", "university", "watch", "water", "way", "week",
    "wish", "woman", "word", "work", "world", "year",
    // verbs
    "ask", "bake", "be", "bear", "become", "begin", "believe", "bring", "build", "buy",
    "call", "carry", "catch", "change", "choose", "close", "come", "continue", "create",
    "cry", "debate", "die", "do", "drive", "eat", "elect", "enhance", "ensure", "enter",
    "fall", "feel", "find", "fix", "fly", "follow", "get", "give", "go", "grow", "hang",
    "happen", "have", "hear", "help", "hold", "hope", "include", "keep", "know", "lead",
    "learn", "leave", "let", "like", "live", "look", "lose", "love", "make", "mean", "meet",
    "move", "need", "open", "pass", "pay", "play", "produce", "provide", "put", "reach",
    "read", "release", "remain", "reshape", "run", "say", "see", "seem", "sell", "send",
    "serve", "set", "show", "sing", "sit", "speak", "spend", "stand", "start", "stay",
    "stop", "strip", "study", "take", "talk", "teach", "tell", "think", "transform", "try",
    "turn", "understand", "use", "wait", "walk", "want", "watch", "win", "work", "write",
    // adjectives
    "advanced", "bad", "best", "better", "big", "bitter", "cheap", "clever", "close", "deep",
    "eager", "early", "easy", "former", "proper", "tender",
    "far", "fast", "fine", "funny", "global", "good", "great", "happy", "hard", "high",
    "hot", "large", "late", "long", "low", "new", "nice", "old", "poor", "safe", "sad",
    "short", "simple", "slow", "small", "strong", "striped", "wise", "worse", "worst",
    "young",
    // adverbs
    "fast", "hard", "well",
];

fn table(entries: &'static [(&'static str, &'static str)]) -> AHashMap<&'static str, Vec<&'static str>> {
    let mut map: AHashMap<&'static str, Vec<&'static str>> = AHashMap::new();
    for (form, lemma) in entries {
        map.entry(*form).or_default().push(*lemma);
    }
    map
}

static NOUN_TABLE: LazyLock<AHashMap<&'static str, Vec<&'static str>>> =
    LazyLock::new(|| table(NOUN_EXCEPTIONS));
static VERB_TABLE: LazyLock<AHashMap<&'static str, Vec<&'static str>>> =
    LazyLock::new(|| table(VERB_EXCEPTIONS));
static ADJECTIVE_TABLE: LazyLock<AHashMap<&'static str, Vec<&'static str>>> =
    LazyLock::new(|| table(ADJECTIVE_EXCEPTIONS));
static ADVERB_TABLE: LazyLock<AHashMap<&'static str, Vec<&'static str>>> =
    LazyLock::new(|| table(ADVERB_EXCEPTIONS));

pub static VOCABULARY_SET: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| VOCABULARY.iter().copied().collect());

/// Irregular lemmas of a lowercase form, if it has any.
pub fn exceptions(word: &str, pos: WordNetPos) -> Option<&'static [&'static str]> {
    let table = match pos {
        WordNetPos::Noun => &NOUN_TABLE,
        WordNetPos::Verb => &VERB_TABLE,
        WordNetPos::Adjective => &ADJECTIVE_TABLE,
        WordNetPos::Adverb => &ADVERB_TABLE,
    };
    table.get(word).map(Vec::as_slice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exceptions() {
        assert_eq!(exceptions("feet", WordNetPos::Noun), Some(&["foot"][..]));
        assert_eq!(exceptions("are", WordNetPos::Verb), Some(&["be"][..]));
        assert_eq!(exceptions("best", WordNetPos::Adjective), Some(&["good"][..]));
        assert_eq!(exceptions("best", WordNetPos::Adverb), Some(&["well"][..]));
        assert_eq!(exceptions("feet", WordNetPos::Verb), None);
    }

    #[test]
    fn test_adverbs_have_no_substitutions() {
        assert!(substitutions(WordNetPos::Adverb).is_empty());
        assert_eq!(substitutions(WordNetPos::Noun)[0], ("s", ""));
    }

    #[test]
    fn test_vocabulary_has_no_function_words() {
        for word in ["the", "on", "their", "for", "is"] {
            assert!(!VOCABULARY_SET.contains(word));
        }
    }
}
