//! Error types for note analysis and report assembly.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can surface from the analysis pipeline.
///
/// Malformed notes and empty keyword corpora are recovered inside the
/// pipeline and never show up here.
#[derive(Error, Debug)]
pub enum Error {
    /// A sentiment or keyword model could not be loaded or failed to run.
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// A lexicon file contained a line that could not be parsed.
    #[error("Lexicon parse error on line {line}: {reason}")]
    LexiconParse { line: usize, reason: String },

    /// The worksheet rows could not be interpreted.
    #[error("Invalid worksheet: {0}")]
    InvalidWorksheet(String),

    /// A required financial figure is missing or not numeric.
    #[error("Missing financial figure: {0}")]
    MissingFigure(String),
}
