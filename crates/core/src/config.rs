//! Analysis options.

use serde::{Deserialize, Serialize};

/// Default maximum number of key topics.
pub const DEFAULT_TOP_N: usize = 5;

/// Default notes column: index 4, column E in spreadsheet terms.
pub const DEFAULT_NOTES_COLUMN: usize = 4;

/// Options for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Maximum number of key topics to report.
    pub top_n: usize,

    /// 0-based column index holding the notes.
    pub notes_column: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            notes_column: DEFAULT_NOTES_COLUMN,
        }
    }
}

impl AnalysisConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of key topics.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n.max(1); // At least one topic
        self
    }

    /// Set the notes column.
    pub fn with_notes_column(mut self, column: usize) -> Self {
        self.notes_column = column;
        self
    }
}
