//! Sentiment scoring for report notes.
//!
//! [`VaderAnalyzer`] is a rule-based scorer in the style of VADER: lexicon
//! valences adjusted for capitalization, boosters, negation, contrastive
//! "but" and exclamation marks, then squashed into a compound score in
//! `[-1, 1]`. [`SentimentScorer`] wraps any [`SentimentModel`] and applies
//! the neutral placeholder for notes that are not text.

use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::normalize::TextNormalizer;
use crate::types::{Note, SentimentScore};
use std::sync::Arc;

/// Added to a valence written in ALL CAPS when the note mixes case.
const CAPS_INCREMENT: f64 = 0.733;

/// Multiplier for a valence preceded by a negation.
const NEGATION_SCALAR: f64 = -0.74;

/// Normalization constant for the compound score.
const COMPOUND_ALPHA: f64 = 15.0;

/// How many preceding tokens can modify a sentiment word.
const MODIFIER_WINDOW: usize = 3;

const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_INCREMENT: f64 = 0.18;
const MAX_QUESTION_EMPHASIS: f64 = 0.96;

/// A model that turns text into a sentiment score.
pub trait SentimentModel {
    /// Score one well-formed text value.
    fn polarity_scores(&self, text: &str) -> Result<SentimentScore>;
}

impl<M: SentimentModel + ?Sized> SentimentModel for &M {
    fn polarity_scores(&self, text: &str) -> Result<SentimentScore> {
        (**self).polarity_scores(text)
    }
}

impl<M: SentimentModel + ?Sized> SentimentModel for Arc<M> {
    fn polarity_scores(&self, text: &str) -> Result<SentimentScore> {
        (**self).polarity_scores(text)
    }
}

/// Lexicon and rule based sentiment analyzer.
#[derive(Debug, Clone, Default)]
pub struct VaderAnalyzer {
    lexicon: Lexicon,
    normalizer: TextNormalizer,
}

impl VaderAnalyzer {
    /// Create an analyzer over the given lexicon.
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            normalizer: TextNormalizer::new(),
        }
    }

    /// The lexicon in use.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score a text value.
    pub fn analyze(&self, text: &str) -> SentimentScore {
        let text = self.normalizer.normalize(text);
        let tokens = tokenize(&text);
        if tokens.is_empty() {
            return SentimentScore::neutral();
        }

        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let cap_diff = is_cap_differential(&tokens);

        let mut sentiments: Vec<f64> = (0..tokens.len())
            .map(|i| {
                if self.lexicon.booster(&lowered[i]).is_some() {
                    0.0
                } else {
                    self.valence_at(&tokens, &lowered, i, cap_diff)
                }
            })
            .collect();

        apply_contrast(&lowered, &mut sentiments);

        score_valence(&sentiments, &text)
    }

    /// Valence of the token at `i` after modifiers in the preceding window.
    fn valence_at(&self, tokens: &[&str], lowered: &[String], i: usize, cap_diff: bool) -> f64 {
        let Some(mut valence) = self.lexicon.valence(&lowered[i]) else {
            return 0.0;
        };

        if cap_diff && is_all_caps(tokens[i]) {
            valence += CAPS_INCREMENT.copysign(valence);
        }

        for distance in 1..=MODIFIER_WINDOW.min(i) {
            let prior = &lowered[i - distance];
            if self.lexicon.valence(prior).is_some() {
                continue;
            }

            let boost = self.boost_scalar(prior, tokens[i - distance], valence, cap_diff);
            valence += match distance {
                1 => boost,
                2 => boost * 0.95,
                _ => boost * 0.9,
            };

            if self.lexicon.is_negation(prior) {
                valence *= NEGATION_SCALAR;
            }
        }

        valence
    }

    fn boost_scalar(&self, lowered: &str, original: &str, valence: f64, cap_diff: bool) -> f64 {
        let Some(mut scalar) = self.lexicon.booster(lowered) else {
            return 0.0;
        };

        if valence < 0.0 {
            scalar = -scalar;
        }
        if cap_diff && is_all_caps(original) {
            scalar += CAPS_INCREMENT.copysign(valence);
        }

        scalar
    }
}

impl SentimentModel for VaderAnalyzer {
    fn polarity_scores(&self, text: &str) -> Result<SentimentScore> {
        Ok(self.analyze(text))
    }
}

/// Scores notes, bypassing the model for anything that is not text.
#[derive(Debug, Clone)]
pub struct SentimentScorer<M> {
    model: M,
}

impl<M: SentimentModel> SentimentScorer<M> {
    /// Create a scorer around an already-loaded model.
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Score a single note. Non-text notes get the neutral placeholder.
    pub fn score(&self, note: &Note) -> Result<SentimentScore> {
        match note {
            Note::Text(text) => self.model.polarity_scores(text),
            Note::Other(_) => Ok(SentimentScore::neutral()),
        }
    }

    /// Score every note, one result per input in the same order.
    pub fn score_all(&self, notes: &[Note]) -> Result<Vec<SentimentScore>> {
        notes.iter().map(|note| self.score(note)).collect()
    }
}

/// Split on whitespace, stripping edge punctuation from words.
///
/// Short punctuation-heavy tokens such as `:)` are kept as-is; anything of
/// one character is dropped.
fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|token| {
            let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.chars().count() <= 2 {
                token
            } else {
                stripped
            }
        })
        .filter(|token| token.chars().count() > 1)
        .collect()
}

fn is_all_caps(token: &str) -> bool {
    token.chars().any(char::is_alphabetic)
        && token
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(char::is_uppercase)
}

/// True when some, but not all, tokens are written in ALL CAPS.
fn is_cap_differential(tokens: &[&str]) -> bool {
    let caps = tokens.iter().filter(|t| is_all_caps(t)).count();
    caps > 0 && caps < tokens.len()
}

/// Weight sentiment after the first "but" over sentiment before it.
fn apply_contrast(lowered: &[String], sentiments: &mut [f64]) {
    let Some(pivot) = lowered.iter().position(|t| t == "but") else {
        return;
    };

    for (idx, sentiment) in sentiments.iter_mut().enumerate() {
        if idx < pivot {
            *sentiment *= 0.5;
        } else if idx > pivot {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let exclamation_emphasis = exclamations as f64 * EXCLAMATION_INCREMENT;

    let questions = text.matches('?').count();
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCREMENT,
        _ => MAX_QUESTION_EMPHASIS,
    };

    exclamation_emphasis + question_emphasis
}

fn normalize_compound(score: f64) -> f64 {
    (score / (score * score + COMPOUND_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn score_valence(sentiments: &[f64], text: &str) -> SentimentScore {
    if sentiments.is_empty() {
        return SentimentScore::neutral();
    }

    let emphasis = punctuation_emphasis(text);

    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = normalize_compound(sum);

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

    SentimentScore {
        pos: round_to((pos_sum / total).abs(), 3),
        neg: round_to((neg_sum / total).abs(), 3),
        neu: round_to((neu_count as f64 / total).abs(), 3),
        compound: round_to(compound, 4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::{CellValue, Polarity};

    fn analyzer() -> VaderAnalyzer {
        VaderAnalyzer::default()
    }

    #[test]
    fn test_positive_note() {
        let score = analyzer().analyze("Great results this month!");
        assert!(score.compound > 0.0);
        assert_eq!(score.polarity(), Polarity::Positive);
        assert_eq!(score.neg, 0.0);
    }

    #[test]
    fn test_negative_note() {
        let score = analyzer().analyze("Terrible week, big losses");
        assert!(score.compound < 0.0);
        assert_eq!(score.polarity(), Polarity::Negative);
    }

    #[test]
    fn test_no_lexicon_words_is_neutral() {
        let score = analyzer().analyze("Costs were too high");
        assert_eq!(score.compound, 0.0);
        assert_eq!(score.neu, 1.0);
    }

    #[test]
    fn test_empty_text_is_neutral() {
        assert_eq!(analyzer().analyze(""), SentimentScore::neutral());
        assert_eq!(analyzer().analyze("   "), SentimentScore::neutral());
    }

    #[test]
    fn test_negation_flips_polarity() {
        let plain = analyzer().analyze("The quarter was good");
        let negated = analyzer().analyze("The quarter was not good");
        assert!(plain.compound > 0.0);
        assert!(negated.compound < 0.0);
    }

    #[test]
    fn test_contraction_negation() {
        let score = analyzer().analyze("Sales didn\u{2019}t improve");
        assert!(score.compound < 0.0);
    }

    #[test]
    fn test_booster_increases_intensity() {
        let plain = analyzer().analyze("Margins look good");
        let boosted = analyzer().analyze("Margins look very good");
        assert!(boosted.compound > plain.compound);
    }

    #[test]
    fn test_dampener_decreases_intensity() {
        let plain = analyzer().analyze("Margins look good");
        let dampened = analyzer().analyze("Margins look slightly good");
        assert!(dampened.compound < plain.compound);
        assert!(dampened.compound > 0.0);
    }

    #[test]
    fn test_caps_emphasis() {
        let plain = analyzer().analyze("Revenue was great this week");
        let shouted = analyzer().analyze("Revenue was GREAT this week");
        assert!(shouted.compound > plain.compound);
    }

    #[test]
    fn test_exclamation_emphasis() {
        let plain = analyzer().analyze("Revenue was great");
        let excited = analyzer().analyze("Revenue was great!!!");
        assert!(excited.compound > plain.compound);
    }

    #[test]
    fn test_but_shifts_weight() {
        let score = analyzer().analyze("Sales were good but margins were terrible");
        assert!(score.compound < 0.0);
    }

    #[test]
    fn test_proportions_sum_to_one() {
        let score = analyzer().analyze("Good growth but some concerns about debt");
        let total = score.pos + score.neg + score.neu;
        assert!((total - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_compound_in_range() {
        let score = analyzer().analyze(
            "GREAT great GREAT amazing excellent outstanding best wonderful love!!!!",
        );
        assert!(score.compound <= 1.0);
        assert!(score.compound > 0.9);
    }

    #[test]
    fn test_deterministic() {
        let a = analyzer().analyze("Stable performance, slightly weak demand");
        let b = analyzer().analyze("Stable performance, slightly weak demand");
        assert_eq!(a, b);
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("Great results, month!"), vec!["Great", "results", "month"]);
        assert_eq!(tokenize("ok :) a"), vec!["ok", ":)"]);
    }

    #[test]
    fn test_scorer_bypasses_non_text() {
        let scorer = SentimentScorer::new(analyzer());

        let score = scorer.score(&Note::Other(CellValue::Number(42.0))).unwrap();
        assert_eq!(score, SentimentScore::neutral());

        let score = scorer.score(&Note::Other(CellValue::Empty)).unwrap();
        assert_eq!(score.compound, 0.0);
    }

    #[test]
    fn test_scorer_one_score_per_note() {
        let scorer = SentimentScorer::new(analyzer());
        let notes = vec![
            Note::from("Great results this month!"),
            Note::Other(CellValue::Bool(true)),
            Note::from(""),
        ];

        let scores = scorer.score_all(&notes).unwrap();
        assert_eq!(scores.len(), notes.len());
        assert_eq!(scores[0].polarity(), Polarity::Positive);
        assert_eq!(scores[1].polarity(), Polarity::Neutral);
        assert_eq!(scores[2].polarity(), Polarity::Neutral);
    }

    struct BrokenModel;

    impl SentimentModel for BrokenModel {
        fn polarity_scores(&self, _text: &str) -> Result<SentimentScore> {
            Err(Error::ModelUnavailable("lexicon not loaded".to_string()))
        }
    }

    #[test]
    fn test_scorer_surfaces_model_failure() {
        let scorer = SentimentScorer::new(BrokenModel);

        assert!(scorer.score(&Note::Other(CellValue::Empty)).is_ok());
        assert!(matches!(
            scorer.score_all(&[Note::from("text")]),
            Err(Error::ModelUnavailable(_))
        ));
    }

    #[test]
    fn test_shared_model() {
        let model = Arc::new(analyzer());
        let first = SentimentScorer::new(Arc::clone(&model));
        let second = SentimentScorer::new(&*model);

        let note = Note::from("Good week");
        assert_eq!(first.score(&note).unwrap(), second.score(&note).unwrap());
    }
}
