//! Domain types for worksheet rows, notes and analysis results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single decoded spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Blank cell.
    #[default]
    Empty,
    /// Boolean cell.
    Bool(bool),
    /// Numeric cell (integers are widened).
    Number(f64),
    /// Text cell.
    Text(String),
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

/// Rows of a worksheet keyed by 1-based row number.
///
/// Deserializes from a JSON object such as `{"2": ["Revenue", 1250.0]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Worksheet {
    rows: BTreeMap<u32, Vec<CellValue>>,
}

impl Worksheet {
    /// Create an empty worksheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a row.
    pub fn insert_row(&mut self, number: u32, cells: Vec<CellValue>) {
        self.rows.insert(number, cells);
    }

    /// Look up a cell by 1-based row number and 0-based column index.
    pub fn cell(&self, row: u32, column: usize) -> Option<&CellValue> {
        self.rows.get(&row).and_then(|cells| cells.get(column))
    }

    /// Iterate rows in ascending row order.
    pub fn rows(&self) -> impl Iterator<Item = (u32, &[CellValue])> {
        self.rows.iter().map(|(n, cells)| (*n, cells.as_slice()))
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the worksheet has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<(u32, Vec<CellValue>)> for Worksheet {
    fn from_iter<I: IntoIterator<Item = (u32, Vec<CellValue>)>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// A free-text note, classified when it is read from the worksheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Note {
    /// A well-formed text value (possibly empty).
    Text(String),
    /// Anything else: blank, numeric or boolean cells.
    Other(CellValue),
}

impl Note {
    /// Classify a cell into a note.
    pub fn from_cell(cell: CellValue) -> Self {
        match cell {
            CellValue::Text(text) => Note::Text(text),
            other => Note::Other(other),
        }
    }

    /// The note text, if it is well-formed text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Note::Text(text) => Some(text),
            Note::Other(_) => None,
        }
    }

    /// Whether this note is well-formed text.
    pub fn is_text(&self) -> bool {
        matches!(self, Note::Text(_))
    }
}

impl From<&str> for Note {
    fn from(s: &str) -> Self {
        Note::Text(s.to_string())
    }
}

impl From<String> for Note {
    fn from(s: String) -> Self {
        Note::Text(s)
    }
}

impl From<CellValue> for Note {
    fn from(cell: CellValue) -> Self {
        Note::from_cell(cell)
    }
}

/// Sentiment of a single note.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Proportion of positive signal.
    pub pos: f64,
    /// Proportion of negative signal.
    pub neg: f64,
    /// Proportion of neutral tokens.
    pub neu: f64,
    /// Normalized aggregate in `[-1.0, 1.0]`.
    pub compound: f64,
}

impl SentimentScore {
    /// Placeholder for notes that are not text.
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Classify by the sign of the compound score.
    pub fn polarity(&self) -> Polarity {
        Polarity::from_compound(self.compound)
    }
}

/// Polarity class of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    /// Positive above zero, negative below, neutral at exactly zero.
    pub fn from_compound(compound: f64) -> Self {
        if compound > 0.0 {
            Polarity::Positive
        } else if compound < 0.0 {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }
}

/// Up to N lowercased topic terms.
///
/// The order of equally frequent terms is not part of the contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet {
    terms: Vec<String>,
}

impl KeywordSet {
    /// An empty keyword set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from already-ranked terms.
    pub fn new(terms: Vec<String>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }

    /// Terms joined with `", "`.
    pub fn joined(&self) -> String {
        self.terms.join(", ")
    }
}

/// Counts and topics over one notes collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationSummary {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub key_topics: KeywordSet,
}

impl ObservationSummary {
    /// Render the fixed-format text block placed on the observations slide.
    ///
    /// # Example output
    /// ```text
    /// Observations Summary:
    ///
    /// - Total Notes: 3
    /// - Positive Notes: 1
    /// - Negative Notes: 1
    /// - Neutral Notes: 1
    /// - Key Topics: costs, results
    /// ```
    pub fn render(&self) -> String {
        format!(
            "Observations Summary:\n\n\
             - Total Notes: {}\n\
             - Positive Notes: {}\n\
             - Negative Notes: {}\n\
             - Neutral Notes: {}\n\
             - Key Topics: {}\n",
            self.total,
            self.positive,
            self.negative,
            self.neutral,
            self.key_topics.joined()
        )
    }
}

impl fmt::Display for ObservationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Headline figures read from the report worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialFigures {
    pub revenue: f64,
    pub expenses: f64,
    pub net_profit: f64,
}
