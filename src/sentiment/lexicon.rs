//! Valence lexicon for VADER scoring.
//!
//! The built-in table is a subset of the public VADER lexicon covering common
//! review and conversational vocabulary. The full list can be loaded from its
//! tab separated distribution file with [`VaderLexicon::from_file`]:
//!
//! ```text
//! good	1.9	0.9434	[2, 1, 1, 3, 2, 4, 2, 2, 1, 1]
//! ```
//!
//! Only the first two columns (token and mean valence) are read.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;

use crate::error::{Result, SaplingError};

const ENTRIES: &[(&str, f64)] = &[
    ("abandon", -1.9),
    ("abuse", -3.2),
    ("accept", 1.6),
    ("admire", 2.4),
    ("adorable", 2.2),
    ("afraid", -2.2),
    ("aggressive", -0.6),
    ("agree", 1.5),
    ("alarm", -1.4),
    ("alone", -1.0),
    ("amazing", 2.8),
    ("anger", -2.7),
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("annoying", -1.7),
    ("anxious", -1.0),
    ("appreciate", 1.7),
    ("ashamed", -2.1),
    ("attack", -2.1),
    ("awesome", 3.1),
    ("awful", -2.0),
    ("awkward", -0.6),
    ("bad", -2.5),
    ("beautiful", 2.9),
    ("benefit", 2.0),
    ("best", 3.2),
    ("better", 1.9),
    ("bitter", -1.8),
    ("blame", -1.4),
    ("bless", 1.8),
    ("bored", -1.1),
    ("boring", -1.3),
    ("brave", 2.4),
    ("brilliant", 2.8),
    ("broken", -2.1),
    ("calm", 1.3),
    ("care", 2.2),
    ("careful", 0.6),
    ("charming", 2.8),
    ("cheat", -2.0),
    ("cheerful", 2.5),
    ("clean", 1.7),
    ("clever", 2.0),
    ("comfortable", 2.3),
    ("confident", 2.2),
    ("confused", -1.3),
    ("congratulations", 2.9),
    ("cool", 1.3),
    ("crap", -1.6),
    ("crazy", -1.4),
    ("crisis", -3.1),
    ("cruel", -2.8),
    ("cry", -2.1),
    ("cute", 2.0),
    ("damage", -2.2),
    ("damn", -1.7),
    ("danger", -2.4),
    ("dangerous", -2.1),
    ("dead", -3.3),
    ("death", -2.9),
    ("delight", 2.9),
    ("delightful", 2.9),
    ("depressed", -2.3),
    ("depressing", -1.6),
    ("destroy", -2.5),
    ("difficult", -1.5),
    ("dirty", -1.9),
    ("disappoint", -1.7),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disaster", -3.1),
    ("disgusting", -2.4),
    ("dislike", -1.6),
    ("dull", -1.7),
    ("dumb", -2.3),
    ("easy", 1.9),
    ("effective", 2.1),
    ("elegant", 2.1),
    ("embarrassed", -1.5),
    ("encourage", 2.3),
    ("energetic", 1.8),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("enjoying", 2.4),
    ("entertaining", 1.9),
    ("enthusiastic", 1.9),
    ("evil", -3.4),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("fair", 1.3),
    ("fake", -2.1),
    ("fantastic", 2.6),
    ("fear", -2.2),
    ("fine", 0.8),
    ("flawless", 2.3),
    ("fool", -1.9),
    ("fortunate", 1.9),
    ("free", 2.3),
    ("friendly", 2.2),
    ("frustrated", -2.4),
    ("frustrating", -1.9),
    ("fun", 2.3),
    ("funny", 1.9),
    ("generous", 2.3),
    ("gentle", 1.9),
    ("glad", 2.0),
    ("good", 1.9),
    ("gorgeous", 3.0),
    ("grateful", 2.0),
    ("great", 3.1),
    ("gross", -2.1),
    ("guilty", -1.8),
    ("handsome", 2.2),
    ("happy", 2.7),
    ("harm", -2.5),
    ("hate", -2.7),
    ("hated", -3.2),
    ("hates", -1.9),
    ("healthy", 1.7),
    ("hell", -3.6),
    ("help", 1.7),
    ("helpful", 1.8),
    ("hilarious", 1.7),
    ("honest", 2.3),
    ("hope", 1.9),
    ("hopeless", -2.0),
    ("horrible", -2.5),
    ("hurt", -2.4),
    ("hurts", -2.1),
    ("ignorant", -1.1),
    ("ill", -1.8),
    ("impressive", 2.3),
    ("improve", 1.9),
    ("improved", 2.1),
    ("insult", -2.3),
    ("intelligent", 2.0),
    ("interesting", 1.7),
    ("jealous", -2.0),
    ("joke", 1.2),
    ("joy", 2.8),
    ("kill", -3.7),
    ("killed", -3.5),
    ("kind", 2.4),
    ("lame", -1.8),
    ("laugh", 2.6),
    ("lazy", -1.5),
    ("liar", -2.8),
    ("like", 2.0),
    ("liked", 1.8),
    ("likes", 1.8),
    ("lonely", -1.5),
    ("lose", -1.3),
    ("loser", -2.4),
    ("lost", -1.3),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("loves", 2.7),
    ("loving", 2.9),
    ("lucky", 1.8),
    ("mad", -2.2),
    ("magnificent", 3.4),
    ("masterpiece", 3.1),
    ("mediocre", -1.0),
    ("mess", -1.5),
    ("miserable", -2.2),
    ("miss", -0.6),
    ("mistake", -1.4),
    ("nasty", -2.6),
    ("nice", 1.8),
    ("no", -1.2),
    ("ok", 1.2),
    ("okay", 0.9),
    ("outstanding", 3.0),
    ("pain", -2.3),
    ("painful", -1.9),
    ("pathetic", -2.7),
    ("peace", 2.5),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("please", 1.3),
    ("pleased", 1.9),
    ("poor", -2.1),
    ("popular", 1.8),
    ("positive", 2.6),
    ("powerful", 1.8),
    ("pretty", 2.2),
    ("problem", -1.7),
    ("problems", -1.7),
    ("progress", 1.8),
    ("proud", 2.1),
    ("rich", 2.6),
    ("ridiculous", -1.5),
    ("risk", -1.1),
    ("romantic", 2.3),
    ("rude", -2.0),
    ("sad", -2.1),
    ("safe", 1.9),
    ("safety", 1.8),
    ("scared", -1.9),
    ("secure", 1.4),
    ("shame", -2.1),
    ("shit", -2.6),
    ("shock", -1.6),
    ("sick", -2.3),
    ("smart", 1.7),
    ("smile", 1.5),
    ("sorry", -0.3),
    ("stolen", -2.2),
    ("strong", 2.3),
    ("stupid", -2.4),
    ("success", 2.7),
    ("successful", 2.8),
    ("sucks", -1.5),
    ("superb", 3.1),
    ("support", 1.7),
    ("sweet", 2.0),
    ("terrible", -2.1),
    ("terrific", 2.1),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("threat", -2.4),
    ("thrilling", 2.1),
    ("tired", -1.9),
    ("tragedy", -3.4),
    ("tragic", -3.4),
    ("trust", 2.3),
    ("ugly", -2.3),
    ("unfortunately", -1.4),
    ("unhappy", -1.8),
    ("unpleasant", -2.1),
    ("upset", -1.6),
    ("useful", 1.9),
    ("useless", -1.8),
    ("violence", -3.1),
    ("war", -2.9),
    ("warm", 0.9),
    ("waste", -1.8),
    ("weak", -1.9),
    ("weakness", -1.8),
    ("weird", -0.7),
    ("welcome", 2.0),
    ("win", 2.8),
    ("winner", 2.8),
    ("wise", 1.8),
    ("won", 2.7),
    ("wonderful", 2.7),
    ("worried", -1.2),
    ("worry", -1.9),
    ("worse", -2.1),
    ("worst", -3.1),
    ("worth", 0.9),
    ("worthless", -1.9),
    ("wow", 2.8),
    ("wrong", -2.1),
    ("yes", 1.7),
];

/// Word to mean valence mapping. Keys are lowercase.
#[derive(Clone, Debug)]
pub struct VaderLexicon {
    entries: AHashMap<String, f64>,
}

impl VaderLexicon {
    /// The built-in lexicon.
    pub fn builtin() -> Self {
        VaderLexicon {
            entries: ENTRIES
                .iter()
                .map(|&(word, valence)| (word.to_string(), valence))
                .collect(),
        }
    }

    /// An empty lexicon.
    pub fn empty() -> Self {
        VaderLexicon {
            entries: AHashMap::new(),
        }
    }

    /// Load a lexicon in the `token<TAB>mean<TAB>...` format.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            SaplingError::corpus(format!("Cannot open lexicon {}: {e}", path.display()))
        })?;
        let lexicon = Self::from_reader(BufReader::new(file))?;
        log::info!(
            "Loaded {} lexicon entries from {}",
            lexicon.len(),
            path.display()
        );
        Ok(lexicon)
    }

    /// Parse a lexicon from any buffered reader. Blank lines are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut entries = AHashMap::new();

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let mut fields = line.split('\t');
            let token = fields.next().unwrap_or_default();
            let mean = fields.next().ok_or_else(|| {
                SaplingError::corpus(format!("line {}: missing valence column", number + 1))
            })?;
            let valence: f64 = mean.trim().parse().map_err(|_| {
                SaplingError::corpus(format!(
                    "line {}: invalid valence {mean:?} for {token:?}",
                    number + 1
                ))
            })?;

            if token.is_empty() {
                return Err(SaplingError::corpus(format!(
                    "line {}: empty token",
                    number + 1
                )));
            }
            entries.insert(token.to_string(), valence);
        }

        Ok(VaderLexicon { entries })
    }

    /// Valence of a word. Keys are matched exactly as written in the lexicon.
    pub fn get(&self, word: &str) -> Option<f64> {
        self.entries.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Add or replace an entry.
    pub fn insert<S: Into<String>>(&mut self, word: S, valence: f64) {
        self.entries.insert(word.into(), valence);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for VaderLexicon {
    fn default() -> Self {
        Self::builtin()
    }
}
