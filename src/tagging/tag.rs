//! Penn Treebank part-of-speech tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SaplingError;

/// A Penn Treebank part-of-speech tag.
///
/// Serialized as its treebank string (`"NN"`, `"PRP$"`, `"."`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PosTag {
    /// Coordinating conjunction
    Cc,
    /// Cardinal number
    Cd,
    /// Determiner
    Dt,
    /// Existential *there*
    Ex,
    /// Foreign word
    Fw,
    /// Preposition or subordinating conjunction
    In,
    /// Adjective
    Jj,
    /// Adjective, comparative
    Jjr,
    /// Adjective, superlative
    Jjs,
    /// List item marker
    Ls,
    /// Modal
    Md,
    /// Noun, singular or mass
    Nn,
    /// Noun, plural
    Nns,
    /// Proper noun, singular
    Nnp,
    /// Proper noun, plural
    Nnps,
    /// Predeterminer
    Pdt,
    /// Possessive ending
    Pos,
    /// Personal pronoun
    Prp,
    /// Possessive pronoun
    PrpPossessive,
    /// Adverb
    Rb,
    /// Adverb, comparative
    Rbr,
    /// Adverb, superlative
    Rbs,
    /// Particle
    Rp,
    /// Symbol
    Sym,
    /// *to*
    To,
    /// Interjection
    Uh,
    /// Verb, base form
    Vb,
    /// Verb, past tense
    Vbd,
    /// Verb, gerund or present participle
    Vbg,
    /// Verb, past participle
    Vbn,
    /// Verb, non-3rd person singular present
    Vbp,
    /// Verb, 3rd person singular present
    Vbz,
    /// Wh-determiner
    Wdt,
    /// Wh-pronoun
    Wp,
    /// Possessive wh-pronoun
    WpPossessive,
    /// Wh-adverb
    Wrb,
    /// Sentence-final punctuation
    Period,
    Comma,
    /// Colon, semicolon, dash, ellipsis
    Colon,
    OpenBracket,
    CloseBracket,
    OpenQuote,
    CloseQuote,
    Pound,
    Dollar,
}

const ALL_TAGS: [PosTag; 45] = [
    PosTag::Cc,
    PosTag::Cd,
    PosTag::Dt,
    PosTag::Ex,
    PosTag::Fw,
    PosTag::In,
    PosTag::Jj,
    PosTag::Jjr,
    PosTag::Jjs,
    PosTag::Ls,
    PosTag::Md,
    PosTag::Nn,
    PosTag::Nns,
    PosTag::Nnp,
    PosTag::Nnps,
    PosTag::Pdt,
    PosTag::Pos,
    PosTag::Prp,
    PosTag::PrpPossessive,
    PosTag::Rb,
    PosTag::Rbr,
    PosTag::Rbs,
    PosTag::Rp,
    PosTag::Sym,
    PosTag::To,
    PosTag::Uh,
    PosTag::Vb,
    PosTag::Vbd,
    PosTag::Vbg,
    PosTag::Vbn,
    PosTag::Vbp,
    PosTag::Vbz,
    PosTag::Wdt,
    PosTag::Wp,
    PosTag::WpPossessive,
    PosTag::Wrb,
    PosTag::Period,
    PosTag::Comma,
    PosTag::Colon,
    PosTag::OpenBracket,
    PosTag::CloseBracket,
    PosTag::OpenQuote,
    PosTag::CloseQuote,
    PosTag::Pound,
    PosTag::Dollar,
];

impl PosTag {
    /// The treebank spelling of this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Cc => "CC",
            PosTag::Cd => "CD",
            PosTag::Dt => "DT",
            PosTag::Ex => "EX",
            PosTag::Fw => "FW",
            PosTag::In => "IN",
            PosTag::Jj => "JJ",
            PosTag::Jjr => "JJR",
            PosTag::Jjs => "JJS",
            PosTag::Ls => "LS",
            PosTag::Md => "MD",
            PosTag::Nn => "NN",
            PosTag::Nns => "NNS",
            PosTag::Nnp => "NNP",
            PosTag::Nnps => "NNPS",
            PosTag::Pdt => "PDT",
            PosTag::Pos => "POS",
            PosTag::Prp => "PRP",
            PosTag::PrpPossessive => "PRP$",
            PosTag::Rb => "RB",
            PosTag::Rbr => "RBR",
            PosTag::Rbs => "RBS",
            PosTag::Rp => "RP",
            PosTag::Sym => "SYM",
            PosTag::To => "TO",
            PosTag::Uh => "UH",
            PosTag::Vb => "VB",
            PosTag::Vbd => "VBD",
            PosTag::Vbg => "VBG",
            PosTag::Vbn => "VBN",
            PosTag::Vbp => "VBP",
            PosTag::Vbz => "VBZ",
            PosTag::Wdt => "WDT",
            PosTag::Wp => "WP",
            PosTag::WpPossessive => "WP$",
            PosTag::Wrb => "WRB",
            PosTag::Period => ".",
            PosTag::Comma => ",",
            PosTag::Colon => ":",
            PosTag::OpenBracket => "(",
            PosTag::CloseBracket => ")",
            PosTag::OpenQuote => "``",
            PosTag::CloseQuote => "''",
            PosTag::Pound => "#",
            PosTag::Dollar => "$",
        }
    }

    /// `NN`, `NNS`, `NNP` or `NNPS`.
    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::Nn | PosTag::Nns | PosTag::Nnp | PosTag::Nnps)
    }

    /// `NNP` or `NNPS`.
    pub fn is_proper_noun(&self) -> bool {
        matches!(self, PosTag::Nnp | PosTag::Nnps)
    }

    /// Any `VB*` tag.
    pub fn is_verb(&self) -> bool {
        matches!(
            self,
            PosTag::Vb | PosTag::Vbd | PosTag::Vbg | PosTag::Vbn | PosTag::Vbp | PosTag::Vbz
        )
    }

    /// A finite verb: past tense or present tense.
    pub fn is_finite_verb(&self) -> bool {
        matches!(self, PosTag::Vbd | PosTag::Vbp | PosTag::Vbz)
    }

    /// `JJ`, `JJR` or `JJS`.
    pub fn is_adjective(&self) -> bool {
        matches!(self, PosTag::Jj | PosTag::Jjr | PosTag::Jjs)
    }

    /// `RB`, `RBR` or `RBS`.
    pub fn is_adverb(&self) -> bool {
        matches!(self, PosTag::Rb | PosTag::Rbr | PosTag::Rbs)
    }

    /// Tags assigned to punctuation tokens.
    pub fn is_punctuation(&self) -> bool {
        matches!(
            self,
            PosTag::Period
                | PosTag::Comma
                | PosTag::Colon
                | PosTag::OpenBracket
                | PosTag::CloseBracket
                | PosTag::OpenQuote
                | PosTag::CloseQuote
        )
    }

    /// Every tag in the set.
    pub fn all() -> &'static [PosTag] {
        &ALL_TAGS
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PosTag {
    type Err = SaplingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_TAGS
            .iter()
            .copied()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| SaplingError::tagging(format!("Unknown POS tag: {s}")))
    }
}

impl From<PosTag> for String {
    fn from(tag: PosTag) -> Self {
        tag.as_str().to_string()
    }
}

impl TryFrom<String> for PosTag {
    type Error = SaplingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
