//! Plain-text outline of a report deck.
//!
//! Each slide becomes a block headed by its title, blocks separated by a
//! blank line. Useful for reviewing a deck in a terminal or a diff.

use crate::currency::format_currency;
use crate::deck::{ReportDeck, Slide};

/// Formatter for deck outlines.
#[derive(Debug, Clone, Default)]
pub struct OutlineFormatter {
    /// Prefix each heading with its 1-based slide number.
    number_slides: bool,
}

impl OutlineFormatter {
    /// Create a formatter without slide numbers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether headings carry slide numbers.
    pub fn with_slide_numbers(mut self, number: bool) -> Self {
        self.number_slides = number;
        self
    }

    /// Render a deck.
    ///
    /// # Example output
    /// ```text
    /// # Weekly Financial Report
    /// Data from: week.json
    ///
    /// # Revenue vs Expenses
    /// Revenue: $12,500.00
    /// Expenses: $8,300.50
    /// ```
    pub fn format(&self, deck: &ReportDeck) -> String {
        deck.slides
            .iter()
            .enumerate()
            .map(|(idx, slide)| self.format_slide(idx + 1, slide))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Render a deck with a trailing newline.
    pub fn format_with_newline(&self, deck: &ReportDeck) -> String {
        let formatted = self.format(deck);
        if formatted.is_empty() {
            formatted
        } else {
            format!("{}\n", formatted)
        }
    }

    fn format_slide(&self, number: usize, slide: &Slide) -> String {
        let heading = if self.number_slides {
            format!("# {}. {}", number, slide.title())
        } else {
            format!("# {}", slide.title())
        };

        let body = match slide {
            Slide::Title { subtitle, .. } => subtitle.clone(),
            Slide::Text { body, .. } => body.strip_suffix('\n').unwrap_or(body).to_string(),
            Slide::Chart { chart, .. } => chart
                .series
                .iter()
                .flat_map(|series| {
                    chart
                        .categories
                        .iter()
                        .zip(&series.values)
                        .map(|(category, value)| format!("{}: {}", category, format_currency(*value)))
                })
                .collect::<Vec<_>>()
                .join("\n"),
        };

        if body.is_empty() {
            heading
        } else {
            format!("{}\n{}", heading, body)
        }
    }
}
