//! Keyword extraction over the notes corpus.

use crate::config::DEFAULT_TOP_N;
use crate::error::Result;
use crate::normalize::TextNormalizer;
use crate::stopwords::is_stop_word;
use crate::types::{KeywordSet, Note};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// A model that picks the most prominent terms from a corpus.
pub trait KeywordModel {
    /// Return at most `max_terms` terms ranked by prominence.
    fn top_terms(&self, documents: &[&str], max_terms: usize) -> Result<Vec<String>>;
}

impl<K: KeywordModel + ?Sized> KeywordModel for &K {
    fn top_terms(&self, documents: &[&str], max_terms: usize) -> Result<Vec<String>> {
        (**self).top_terms(documents, max_terms)
    }
}

impl<K: KeywordModel + ?Sized> KeywordModel for Arc<K> {
    fn top_terms(&self, documents: &[&str], max_terms: usize) -> Result<Vec<String>> {
        (**self).top_terms(documents, max_terms)
    }
}

/// Ranks terms by how often they occur across the whole corpus.
///
/// Terms are lowercased runs of two or more word characters with English
/// stopwords removed. Equal counts fall back to alphabetical order.
#[derive(Debug, Clone, Default)]
pub struct TermFrequencyExtractor {
    normalizer: TextNormalizer,
    extra_stop_words: HashSet<String>,
}

impl TermFrequencyExtractor {
    /// Create an extractor using the English stopword list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also ignore these terms (matched case-insensitively).
    pub fn with_extra_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra_stop_words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    fn is_excluded(&self, term: &str) -> bool {
        is_stop_word(term) || self.extra_stop_words.contains(term)
    }

    /// Count every eligible term across the corpus.
    pub fn term_counts(&self, documents: &[&str]) -> HashMap<String, usize> {
        let mut counts = HashMap::new();

        for document in documents {
            for term in self.normalizer.terms(document) {
                if !self.is_excluded(&term) {
                    *counts.entry(term).or_insert(0) += 1;
                }
            }
        }

        counts
    }
}

impl KeywordModel for TermFrequencyExtractor {
    fn top_terms(&self, documents: &[&str], max_terms: usize) -> Result<Vec<String>> {
        let mut ranked: Vec<(String, usize)> = self.term_counts(documents).into_iter().collect();

        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(max_terms);

        Ok(ranked.into_iter().map(|(term, _)| term).collect())
    }
}

/// Extracts key topics from notes, ignoring anything that is not text.
#[derive(Debug, Clone)]
pub struct KeywordExtractor<K> {
    model: K,
    top_n: usize,
}

impl<K: KeywordModel> KeywordExtractor<K> {
    /// Create an extractor returning up to five topics.
    pub fn new(model: K) -> Self {
        Self {
            model,
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Set the maximum number of topics.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n.max(1);
        self
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Extract up to `top_n` topics from the text notes.
    ///
    /// With no text notes at all the model is never called.
    pub fn extract(&self, notes: &[Note]) -> Result<KeywordSet> {
        let documents: Vec<&str> = notes.iter().filter_map(Note::as_text).collect();

        if documents.is_empty() {
            log::debug!("No text notes among {} notes, skipping keywords", notes.len());
            return Ok(KeywordSet::empty());
        }

        let mut terms = self.model.top_terms(&documents, self.top_n)?;
        terms.truncate(self.top_n);

        log::debug!(
            "Extracted {} keywords from {} text notes",
            terms.len(),
            documents.len()
        );

        Ok(KeywordSet::new(terms))
    }
}
