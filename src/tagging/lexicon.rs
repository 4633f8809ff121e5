//! Built-in word/tag lexicon: closed-class words, irregular verb and noun
//! forms and a handful of open-class words the suffix rules get wrong.
//!
//! Keys are lowercase.

use std::sync::LazyLock;

use ahash::AHashMap;

use super::tag::PosTag;
use super::tag::PosTag::*;

const ENTRIES: &[(&str, PosTag)] = &[
    // determiners
    ("the", Dt),
    ("a", Dt),
    ("an", Dt),
    ("this", Dt),
    ("that", Dt),
    ("these", Dt),
    ("those", Dt),
    ("every", Dt),
    ("each", Dt),
    ("some", Dt),
    ("any", Dt),
    ("no", Dt),
    ("another", Dt),
    ("all", Dt),
    ("both", Dt),
    ("either", Dt),
    ("neither", Dt),
    // pronouns
    ("i", Prp),
    ("you", Prp),
    ("he", Prp),
    ("she", Prp),
    ("it", Prp),
    ("we", Prp),
    ("they", Prp),
    ("me", Prp),
    ("him", Prp),
    ("us", Prp),
    ("them", Prp),
    ("myself", Prp),
    ("yourself", Prp),
    ("himself", Prp),
    ("herself", Prp),
    ("itself", Prp),
    ("ourselves", Prp),
    ("themselves", Prp),
    ("my", PrpPossessive),
    ("your", PrpPossessive),
    ("his", PrpPossessive),
    ("her", PrpPossessive),
    ("its", PrpPossessive),
    ("our", PrpPossessive),
    ("their", PrpPossessive),
    ("who", Wp),
    ("whom", Wp),
    ("what", Wp),
    ("whose", WpPossessive),
    ("which", Wdt),
    ("when", Wrb),
    ("where", Wrb),
    ("why", Wrb),
    ("how", Wrb),
    // conjunctions
    ("and", Cc),
    ("or", Cc),
    ("but", Cc),
    ("nor", Cc),
    ("plus", Cc),
    // prepositions and subordinators
    ("in", In),
    ("on", In),
    ("at", In),
    ("of", In),
    ("for", In),
    ("with", In),
    ("by", In),
    ("from", In),
    ("about", In),
    ("into", In),
    ("over", In),
    ("under", In),
    ("after", In),
    ("before", In),
    ("between", In),
    ("through", In),
    ("during", In),
    ("without", In),
    ("within", In),
    ("against", In),
    ("among", In),
    ("since", In),
    ("until", In),
    ("because", In),
    ("if", In),
    ("while", In),
    ("although", In),
    ("though", In),
    ("than", In),
    ("as", In),
    ("like", In),
    ("upon", In),
    ("near", In),
    ("across", In),
    ("behind", In),
    ("beyond", In),
    ("per", In),
    ("via", In),
    ("whether", In),
    ("unless", In),
    ("despite", In),
    ("toward", In),
    ("towards", In),
    ("onto", In),
    ("around", In),
    ("out", In),
    ("off", In),
    ("up", Rp),
    ("down", Rp),
    ("to", To),
    // modals
    ("can", Md),
    ("could", Md),
    ("will", Md),
    ("would", Md),
    ("shall", Md),
    ("should", Md),
    ("may", Md),
    ("might", Md),
    ("must", Md),
    ("ca", Md),
    ("wo", Md),
    ("'ll", Md),
    ("'d", Md),
    ("there", Ex),
    // adverbs
    ("not", Rb),
    ("n't", Rb),
    ("very", Rb),
    ("also", Rb),
    ("too", Rb),
    ("so", Rb),
    ("just", Rb),
    ("only", Rb),
    ("then", Rb),
    ("now", Rb),
    ("here", Rb),
    ("always", Rb),
    ("never", Rb),
    ("often", Rb),
    ("already", Rb),
    ("still", Rb),
    ("again", Rb),
    ("even", Rb),
    ("soon", Rb),
    ("quite", Rb),
    ("rather", Rb),
    ("almost", Rb),
    ("perhaps", Rb),
    ("ever", Rb),
    ("once", Rb),
    ("however", Rb),
    ("instead", Rb),
    ("together", Rb),
    ("away", Rb),
    ("back", Rb),
    ("ago", Rb),
    ("indeed", Rb),
    ("thus", Rb),
    ("yet", Rb),
    ("worldwide", Rb),
    ("well", Rb),
    // adjectives, including the irregular comparatives
    ("good", Jj),
    ("bad", Jj),
    ("new", Jj),
    ("old", Jj),
    ("great", Jj),
    ("big", Jj),
    ("small", Jj),
    ("large", Jj),
    ("little", Jj),
    ("high", Jj),
    ("low", Jj),
    ("long", Jj),
    ("short", Jj),
    ("young", Jj),
    ("other", Jj),
    ("many", Jj),
    ("much", Jj),
    ("few", Jj),
    ("same", Jj),
    ("own", Jj),
    ("next", Jj),
    ("last", Jj),
    ("first", Jj),
    ("sure", Jj),
    ("real", Jj),
    ("whole", Jj),
    ("main", Jj),
    ("early", Jj),
    ("late", Jj),
    ("free", Jj),
    ("full", Jj),
    ("clear", Jj),
    ("hard", Jj),
    ("easy", Jj),
    ("safe", Jj),
    ("red", Jj),
    ("likely", Jj),
    ("daily", Jj),
    ("friendly", Jj),
    ("ugly", Jj),
    ("better", Jjr),
    ("worse", Jjr),
    ("more", Jjr),
    ("less", Jjr),
    ("best", Jjs),
    ("worst", Jjs),
    ("most", Jjs),
    ("least", Jjs),
    // numbers
    ("one", Cd),
    ("two", Cd),
    ("three", Cd),
    ("four", Cd),
    ("five", Cd),
    ("six", Cd),
    ("seven", Cd),
    ("eight", Cd),
    ("nine", Cd),
    ("ten", Cd),
    ("hundred", Cd),
    ("thousand", Cd),
    ("million", Cd),
    ("billion", Cd),
    // interjections
    ("oh", Uh),
    ("yes", Uh),
    ("hello", Uh),
    ("wow", Uh),
    // be / have / do
    ("be", Vb),
    ("am", Vbp),
    ("are", Vbp),
    ("'re", Vbp),
    ("'m", Vbp),
    ("is", Vbz),
    ("was", Vbd),
    ("were", Vbd),
    ("been", Vbn),
    ("being", Vbg),
    ("have", Vbp),
    ("'ve", Vbp),
    ("has", Vbz),
    ("had", Vbd),
    ("having", Vbg),
    ("do", Vbp),
    ("does", Vbz),
    ("did", Vbd),
    ("done", Vbn),
    ("doing", Vbg),
    // irregular past tense
    ("said", Vbd),
    ("went", Vbd),
    ("came", Vbd),
    ("made", Vbd),
    ("took", Vbd),
    ("got", Vbd),
    ("saw", Vbd),
    ("knew", Vbd),
    ("thought", Vbd),
    ("told", Vbd),
    ("became", Vbd),
    ("began", Vbd),
    ("gave", Vbd),
    ("found", Vbd),
    ("left", Vbd),
    ("felt", Vbd),
    ("kept", Vbd),
    ("held", Vbd),
    ("brought", Vbd),
    ("bought", Vbd),
    ("ran", Vbd),
    ("wrote", Vbd),
    ("stood", Vbd),
    ("sat", Vbd),
    ("grew", Vbd),
    ("built", Vbd),
    ("sent", Vbd),
    ("spent", Vbd),
    ("won", Vbd),
    // irregular past participles
    ("born", Vbn),
    ("gone", Vbn),
    ("seen", Vbn),
    ("known", Vbn),
    ("taken", Vbn),
    ("given", Vbn),
    ("written", Vbn),
    ("shown", Vbn),
    ("grown", Vbn),
    ("begun", Vbn),
    ("eaten", Vbn),
    ("fallen", Vbn),
    ("chosen", Vbn),
    ("driven", Vbn),
    ("spoken", Vbn),
    ("broken", Vbn),
    ("forgotten", Vbn),
    ("gotten", Vbn),
    // base forms the suffix rules would miss
    ("go", Vb),
    ("get", Vb),
    ("make", Vb),
    ("take", Vb),
    ("see", Vb),
    ("know", Vb),
    ("need", Vb),
    ("bring", Vb),
    ("sing", Vb),
    ("apply", Vb),
    ("fly", Vb),
    ("let", Vb),
    ("please", Vb),
    ("'s", Pos),
    // irregular plurals and nouns the suffix rules would miss
    ("feet", Nns),
    ("teeth", Nns),
    ("men", Nns),
    ("women", Nns),
    ("children", Nns),
    ("people", Nns),
    ("mice", Nns),
    ("geese", Nns),
    ("data", Nns),
    ("thing", Nn),
    ("nothing", Nn),
    ("something", Nn),
    ("everything", Nn),
    ("anything", Nn),
    ("morning", Nn),
    ("evening", Nn),
    ("king", Nn),
    ("ring", Nn),
    ("spring", Nn),
    ("string", Nn),
    ("wing", Nn),
    ("ceiling", Nn),
    ("bed", Nn),
    ("speed", Nn),
    ("seed", Nn),
    ("family", Nn),
    ("supply", Nn),
    ("reply", Nn),
    ("news", Nn),
    ("series", Nn),
    ("species", Nn),
    ("time", Nn),
];

static LEXICON: LazyLock<AHashMap<&'static str, PosTag>> =
    LazyLock::new(|| ENTRIES.iter().copied().collect());

/// Look up the lexicon tag of a lowercase word.
pub fn lookup(word: &str) -> Option<PosTag> {
    LEXICON.get(word).copied()
}

/// Whether the lowercase word is a form of *be*.
pub fn is_be(word: &str) -> bool {
    matches!(
        word,
        "be" | "am" | "is" | "are" | "was" | "were" | "been" | "being" | "'re" | "'m"
    )
}

/// Whether the lowercase word is a form of *have*.
pub fn is_have(word: &str) -> bool {
    matches!(word, "have" | "has" | "had" | "having" | "'ve")
}

/// Number of lexicon entries.
pub fn len() -> usize {
    LEXICON.len()
}
