//! Sentiment lexicon: word valences, boosters and negations.
//!
//! Valences use the VADER scale of roughly -4.0 (most negative) to 4.0
//! (most positive). The built-in table covers general sentiment vocabulary
//! plus the wording that shows up in weekly finance notes. A full
//! tab-separated lexicon (`word<TAB>mean[<TAB>...]`) can be loaded instead.

use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Scalar added to or removed from a valence by a booster word.
pub const BOOST_INCREMENT: f64 = 0.293;

/// Scalar removed from or added to a valence by a dampener word.
pub const BOOST_DECREMENT: f64 = -0.293;

const BUILTIN_VALENCES: &[(&str, f64)] = &[
    // General positive
    ("good", 1.9),
    ("great", 3.1),
    ("excellent", 2.7),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("fantastic", 2.6),
    ("outstanding", 3.0),
    ("wonderful", 2.7),
    ("best", 3.2),
    ("better", 1.9),
    ("nice", 1.8),
    ("happy", 2.7),
    ("glad", 2.0),
    ("pleased", 1.9),
    ("love", 3.2),
    ("win", 2.8),
    ("won", 2.7),
    ("success", 2.7),
    ("successful", 2.8),
    ("solid", 1.3),
    ("stable", 1.2),
    ("strong", 2.3),
    ("strength", 2.2),
    ("positive", 2.6),
    ("improve", 1.9),
    ("improved", 2.1),
    ("improvement", 2.0),
    ("improving", 1.8),
    ("growth", 1.6),
    ("grow", 1.4),
    ("growing", 1.3),
    ("gain", 2.4),
    ("gains", 1.8),
    ("profit", 1.9),
    ("profitable", 1.9),
    ("benefit", 2.0),
    ("opportunity", 1.8),
    ("promising", 2.1),
    ("efficient", 1.8),
    ("confident", 2.2),
    ("optimistic", 1.3),
    ("recovery", 1.4),
    ("recovered", 1.4),
    ("record", 0.9),
    ("exceeded", 1.3),
    ("beat", 0.9),
    ("smooth", 1.4),
    ("ok", 1.2),
    ("okay", 0.9),
    ("fine", 0.8),
    ("helpful", 1.8),
    ("healthy", 1.7),
    ("secure", 1.4),
    ("safe", 1.9),
    ("reward", 2.0),
    ("thanks", 1.9),
    ("congratulations", 2.9),
    ("impressive", 2.3),
    ("favorable", 2.1),
    ("boost", 1.7),
    ("boosted", 1.5),
    ("surge", 1.1),
    ("upbeat", 1.7),
    ("encouraging", 2.4),
    // General negative
    ("bad", -2.5),
    ("worse", -2.1),
    ("worst", -3.1),
    ("poor", -2.1),
    ("terrible", -2.1),
    ("awful", -2.0),
    ("horrible", -2.5),
    ("disappointing", -2.2),
    ("disappointed", -1.9),
    ("disaster", -3.1),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("problem", -1.7),
    ("problems", -1.7),
    ("issue", -1.1),
    ("issues", -1.2),
    ("concern", -1.3),
    ("concerns", -1.2),
    ("concerned", -1.4),
    ("worry", -1.9),
    ("worried", -1.2),
    ("risk", -1.1),
    ("risky", -1.4),
    ("loss", -1.3),
    ("losses", -1.7),
    ("lose", -1.7),
    ("lost", -1.3),
    ("decline", -1.1),
    ("declined", -1.1),
    ("declining", -1.4),
    ("drop", -1.1),
    ("dropped", -1.0),
    ("weak", -1.9),
    ("weakness", -1.6),
    ("negative", -2.7),
    ("crisis", -3.1),
    ("crash", -1.7),
    ("delay", -1.3),
    ("delayed", -0.9),
    ("late", -0.5),
    ("missed", -1.2),
    ("miss", -0.6),
    ("shortfall", -1.6),
    ("overdue", -1.3),
    ("overspend", -1.5),
    ("overspending", -1.5),
    ("debt", -1.5),
    ("unpaid", -1.4),
    ("dispute", -1.7),
    ("fraud", -2.8),
    ("error", -1.7),
    ("errors", -1.4),
    ("mistake", -1.4),
    ("hurt", -2.4),
    ("damage", -2.2),
    ("sad", -2.1),
    ("angry", -2.3),
    ("unhappy", -1.8),
    ("hate", -2.7),
    ("difficult", -1.5),
    ("struggle", -1.3),
    ("struggling", -1.6),
    ("volatile", -1.0),
    ("uncertain", -1.2),
    ("uncertainty", -1.4),
    ("expensive", -0.9),
    ("costly", -1.4),
    ("slow", -0.7),
    ("slowdown", -1.1),
    ("down", -0.7),
    ("cut", -1.1),
    ("cuts", -1.2),
    ("layoffs", -2.2),
    ("bankrupt", -2.6),
    ("penalty", -2.0),
    ("warning", -1.4),
];

const BUILTIN_BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", BOOST_INCREMENT),
    ("amazingly", BOOST_INCREMENT),
    ("awfully", BOOST_INCREMENT),
    ("completely", BOOST_INCREMENT),
    ("considerably", BOOST_INCREMENT),
    ("decidedly", BOOST_INCREMENT),
    ("deeply", BOOST_INCREMENT),
    ("enormously", BOOST_INCREMENT),
    ("entirely", BOOST_INCREMENT),
    ("especially", BOOST_INCREMENT),
    ("exceptionally", BOOST_INCREMENT),
    ("extremely", BOOST_INCREMENT),
    ("greatly", BOOST_INCREMENT),
    ("highly", BOOST_INCREMENT),
    ("hugely", BOOST_INCREMENT),
    ("incredibly", BOOST_INCREMENT),
    ("intensely", BOOST_INCREMENT),
    ("more", BOOST_INCREMENT),
    ("most", BOOST_INCREMENT),
    ("particularly", BOOST_INCREMENT),
    ("quite", BOOST_INCREMENT),
    ("really", BOOST_INCREMENT),
    ("remarkably", BOOST_INCREMENT),
    ("so", BOOST_INCREMENT),
    ("significantly", BOOST_INCREMENT),
    ("substantially", BOOST_INCREMENT),
    ("thoroughly", BOOST_INCREMENT),
    ("totally", BOOST_INCREMENT),
    ("tremendously", BOOST_INCREMENT),
    ("unbelievably", BOOST_INCREMENT),
    ("unusually", BOOST_INCREMENT),
    ("utterly", BOOST_INCREMENT),
    ("very", BOOST_INCREMENT),
    ("almost", BOOST_DECREMENT),
    ("barely", BOOST_DECREMENT),
    ("hardly", BOOST_DECREMENT),
    ("kinda", BOOST_DECREMENT),
    ("less", BOOST_DECREMENT),
    ("little", BOOST_DECREMENT),
    ("marginally", BOOST_DECREMENT),
    ("occasionally", BOOST_DECREMENT),
    ("partly", BOOST_DECREMENT),
    ("scarcely", BOOST_DECREMENT),
    ("slightly", BOOST_DECREMENT),
    ("somewhat", BOOST_DECREMENT),
];

const BUILTIN_NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont", "hadnt",
    "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "neednt", "never", "none", "nope",
    "nor", "not", "nothing", "nowhere", "oughtnt", "shant", "shouldnt", "wasnt", "werent",
    "without", "wont", "wouldnt", "rarely", "seldom", "despite",
];

/// Word valences plus the modifier vocabulary the scorer needs.
#[derive(Debug, Clone)]
pub struct Lexicon {
    valences: HashMap<String, f64>,
    boosters: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Lexicon {
    /// The lexicon compiled into the crate.
    pub fn builtin() -> Self {
        let valences = BUILTIN_VALENCES
            .iter()
            .map(|(word, valence)| (word.to_string(), *valence))
            .collect();
        Self::with_valences(valences)
    }

    /// Load valences from a tab-separated lexicon, one word per line.
    ///
    /// Blank lines and lines starting with `#` are skipped. Only the first two
    /// columns are read. Boosters and negations stay built in.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut valences = HashMap::new();

        for (idx, line) in reader.lines().enumerate() {
            let line_number = idx + 1;
            let line = line.map_err(|e| {
                Error::ModelUnavailable(format!("Failed to read lexicon line {}: {}", line_number, e))
            })?;
            let trimmed = line.trim_end();
            if trimmed.trim().is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut columns = trimmed.split('\t');
            let word = columns.next().unwrap_or_default();
            let valence = columns.next().ok_or_else(|| Error::LexiconParse {
                line: line_number,
                reason: format!("missing valence for '{}'", word),
            })?;
            let raw = valence.trim();
            let valence: f64 = raw.parse().map_err(|_| Error::LexiconParse {
                line: line_number,
                reason: format!("invalid valence '{}'", raw),
            })?;
            if !valence.is_finite() {
                return Err(Error::LexiconParse {
                    line: line_number,
                    reason: format!("non-finite valence '{}'", raw),
                });
            }

            valences.insert(word.to_lowercase(), valence);
        }

        if valences.is_empty() {
            return Err(Error::ModelUnavailable("lexicon contains no entries".to_string()));
        }

        log::debug!("Loaded {} lexicon entries", valences.len());
        Ok(Self::with_valences(valences))
    }

    /// Load a lexicon file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            Error::ModelUnavailable(format!("Failed to open lexicon {}: {}", path.display(), e))
        })?;
        Self::from_reader(BufReader::new(file))
    }

    fn with_valences(valences: HashMap<String, f64>) -> Self {
        Self {
            valences,
            boosters: BUILTIN_BOOSTERS
                .iter()
                .map(|(word, scalar)| (word.to_string(), *scalar))
                .collect(),
            negations: BUILTIN_NEGATIONS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Valence of a lowercased word.
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(word).copied()
    }

    /// Booster scalar of a lowercased word.
    pub fn booster(&self, word: &str) -> Option<f64> {
        self.boosters.get(word).copied()
    }

    /// Whether a lowercased word negates what follows.
    pub fn is_negation(&self, word: &str) -> bool {
        let bare: String = word.chars().filter(|c| *c != '\'').collect();
        self.negations.contains(&bare) || word.contains("n't")
    }

    /// Add or replace a word valence.
    pub fn add_word(&mut self, word: &str, valence: f64) {
        self.valences.insert(word.to_lowercase(), valence);
    }

    /// Number of words with a valence.
    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}
