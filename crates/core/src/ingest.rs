//! Reading notes and headline figures out of decoded worksheet rows.

use crate::config::{AnalysisConfig, DEFAULT_NOTES_COLUMN};
use crate::error::{Error, Result};
use crate::types::{CellValue, FinancialFigures, Note, Worksheet};

/// Column B, 0-based.
const FIGURES_COLUMN: usize = 1;

/// Rows holding the headline figures, with their spreadsheet labels.
const REVENUE_ROW: (u32, &str) = (2, "Total Revenue (B2)");
const EXPENSES_ROW: (u32, &str) = (3, "Total Expenses (B3)");
const NET_PROFIT_ROW: (u32, &str) = (4, "Net Profit (B4)");

/// Pulls report inputs from a worksheet.
#[derive(Debug, Clone)]
pub struct WorksheetReader {
    /// 0-based column index holding the notes.
    notes_column: usize,

    /// Whether the first row is a header and carries no note.
    skip_header: bool,
}

impl Default for WorksheetReader {
    fn default() -> Self {
        Self {
            notes_column: DEFAULT_NOTES_COLUMN,
            skip_header: false,
        }
    }
}

impl WorksheetReader {
    /// Create a reader for notes in column E.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader from analysis options.
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new().with_notes_column(config.notes_column)
    }

    /// Set the notes column.
    pub fn with_notes_column(mut self, column: usize) -> Self {
        self.notes_column = column;
        self
    }

    /// Set whether to skip the first row.
    pub fn with_skip_header(mut self, skip: bool) -> Self {
        self.skip_header = skip;
        self
    }

    /// One note per row, in row order.
    ///
    /// Rows too short to reach the notes column yield a blank note so the
    /// collection stays aligned with the rows.
    pub fn notes(&self, sheet: &Worksheet) -> Vec<Note> {
        let skip = usize::from(self.skip_header);

        let notes: Vec<Note> = sheet
            .rows()
            .skip(skip)
            .map(|(_, cells)| {
                cells
                    .get(self.notes_column)
                    .cloned()
                    .map(Note::from_cell)
                    .unwrap_or(Note::Other(CellValue::Empty))
            })
            .collect();

        log::debug!(
            "Read {} notes from column {} ({} text)",
            notes.len(),
            self.notes_column,
            notes.iter().filter(|n| n.is_text()).count()
        );

        notes
    }

    /// Revenue, expenses and net profit from B2, B3 and B4.
    pub fn figures(&self, sheet: &Worksheet) -> Result<FinancialFigures> {
        if sheet.is_empty() {
            return Err(Error::InvalidWorksheet("worksheet has no rows".to_string()));
        }

        Ok(FinancialFigures {
            revenue: read_figure(sheet, REVENUE_ROW)?,
            expenses: read_figure(sheet, EXPENSES_ROW)?,
            net_profit: read_figure(sheet, NET_PROFIT_ROW)?,
        })
    }
}

fn read_figure(sheet: &Worksheet, (row, label): (u32, &str)) -> Result<f64> {
    match sheet.cell(row, FIGURES_COLUMN) {
        Some(CellValue::Number(n)) if n.is_finite() => Ok(*n),
        Some(CellValue::Text(text)) => parse_amount(text).ok_or_else(|| {
            Error::MissingFigure(format!("{} is not a number: '{}'", label, text))
        }),
        Some(other) => Err(Error::MissingFigure(format!(
            "{} is not a number: {:?}",
            label, other
        ))),
        None => Err(Error::MissingFigure(format!("{} is empty", label))),
    }
}

/// Parse amounts that were typed as text, such as `$1,250.00`.
fn parse_amount(text: &str) -> Option<f64> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    let amount: f64 = cleaned.parse().ok()?;
    if !amount.is_finite() {
        return None;
    }
    log::warn!("Figure stored as text: '{}'", text);
    Some(amount)
}
