//! Observation summaries: sentiment counts plus key topics.

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::keywords::{KeywordExtractor, KeywordModel, TermFrequencyExtractor};
use crate::sentiment::{SentimentModel, SentimentScorer, VaderAnalyzer};
use crate::types::{Note, ObservationSummary, Polarity, SentimentScore};

/// Combines a sentiment scorer and a keyword extractor into one summary.
///
/// Both models are injected, so one loaded lexicon can back many
/// summarizers (pass `&model` or an `Arc`).
#[derive(Debug, Clone)]
pub struct ObservationSummarizer<S, K> {
    scorer: SentimentScorer<S>,
    extractor: KeywordExtractor<K>,
}

impl<S: SentimentModel, K: KeywordModel> ObservationSummarizer<S, K> {
    /// Create a summarizer reporting up to five topics.
    pub fn new(sentiment_model: S, keyword_model: K) -> Self {
        Self {
            scorer: SentimentScorer::new(sentiment_model),
            extractor: KeywordExtractor::new(keyword_model),
        }
    }

    /// Create a summarizer from analysis options.
    pub fn from_config(sentiment_model: S, keyword_model: K, config: &AnalysisConfig) -> Self {
        Self::new(sentiment_model, keyword_model).with_top_n(config.top_n)
    }

    /// Set the maximum number of key topics.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.extractor = self.extractor.with_top_n(top_n);
        self
    }

    /// One sentiment score per note, in input order.
    pub fn score_all(&self, notes: &[Note]) -> Result<Vec<SentimentScore>> {
        self.scorer.score_all(notes)
    }

    /// Summarize a notes collection.
    ///
    /// Any model failure aborts the whole summary.
    pub fn summarize(&self, notes: &[Note]) -> Result<ObservationSummary> {
        let scores = self.score_all(notes)?;

        let mut summary = ObservationSummary {
            total: scores.len(),
            ..ObservationSummary::default()
        };
        for score in &scores {
            match score.polarity() {
                Polarity::Positive => summary.positive += 1,
                Polarity::Negative => summary.negative += 1,
                Polarity::Neutral => summary.neutral += 1,
            }
        }

        summary.key_topics = self.extractor.extract(notes)?;

        log::debug!(
            "Summarized {} notes: {} positive, {} negative, {} neutral",
            summary.total,
            summary.positive,
            summary.negative,
            summary.neutral
        );

        Ok(summary)
    }
}

impl Default for ObservationSummarizer<VaderAnalyzer, TermFrequencyExtractor> {
    fn default() -> Self {
        Self::new(VaderAnalyzer::default(), TermFrequencyExtractor::new())
    }
}
