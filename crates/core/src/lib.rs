//! Core domain types, note ingestion, sentiment scoring, keyword extraction
//! and observation summaries for weekly financial reports.

pub mod config;
pub mod error;
pub mod ingest;
pub mod keywords;
pub mod lexicon;
pub mod normalize;
pub mod sentiment;
pub mod stopwords;
pub mod summary;
pub mod types;

pub use config::AnalysisConfig;
pub use error::{Error, Result};
pub use ingest::WorksheetReader;
pub use keywords::{KeywordExtractor, KeywordModel, TermFrequencyExtractor};
pub use lexicon::Lexicon;
pub use normalize::TextNormalizer;
pub use sentiment::{SentimentModel, SentimentScorer, VaderAnalyzer};
pub use summary::ObservationSummarizer;
pub use types::{
    CellValue, FinancialFigures, KeywordSet, Note, ObservationSummary, Polarity, SentimentScore,
    Worksheet,
};
