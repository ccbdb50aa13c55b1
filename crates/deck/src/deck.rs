//! Slide descriptors for the weekly report deck.
//!
//! A deck is plain data: an external presentation writer maps each
//! [`Slide`] onto a layout (title, title + body, title only + chart).

use crate::currency::financial_summary_text;
use report_core::{FinancialFigures, ObservationSummary};
use serde::{Deserialize, Serialize};

/// Title shown on the first slide.
pub const REPORT_TITLE: &str = "Weekly Financial Report";

pub const FINANCIAL_SUMMARY_TITLE: &str = "Financial Summary";
pub const CHART_TITLE: &str = "Revenue vs Expenses";
pub const OBSERVATIONS_TITLE: &str = "Observations";

/// A complete report deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDeck {
    /// Name of the data source the deck was built from.
    pub source: String,

    /// Slides in presentation order.
    pub slides: Vec<Slide>,
}

impl ReportDeck {
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Titles of all slides, in order.
    pub fn titles(&self) -> Vec<&str> {
        self.slides.iter().map(Slide::title).collect()
    }
}

/// One slide, tagged by the layout it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum Slide {
    /// Title layout with a subtitle placeholder.
    Title { title: String, subtitle: String },

    /// Title and body layout; the body goes into the text placeholder verbatim.
    Text { title: String, body: String },

    /// Title-only layout with a chart placed in `frame`.
    Chart {
        title: String,
        chart: ColumnChart,
        frame: Frame,
    },
}

impl Slide {
    pub fn title(&self) -> &str {
        match self {
            Slide::Title { title, .. } | Slide::Text { title, .. } | Slide::Chart { title, .. } => {
                title
            }
        }
    }
}

/// Build a title and body slide.
pub fn text_slide(title: impl Into<String>, body: impl Into<String>) -> Slide {
    Slide::Text {
        title: title.into(),
        body: body.into(),
    }
}

/// Clustered column chart data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnChart {
    pub categories: Vec<String>,
    pub series: Vec<ChartSeries>,
}

/// A named series of values, one per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<f64>,
}

/// Position and size on the slide, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            x: 2.0,
            y: 2.0,
            width: 6.0,
            height: 4.5,
        }
    }
}

/// Builder for a [`ReportDeck`].
///
/// Starts with the title slide; the other slides are added in call order.
#[derive(Debug, Clone)]
pub struct DeckBuilder {
    source: String,
    slides: Vec<Slide>,
}

impl DeckBuilder {
    /// Start a deck for the given data source.
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let title = Slide::Title {
            title: REPORT_TITLE.to_string(),
            subtitle: format!("Data from: {}", source),
        };

        Self {
            source,
            slides: vec![title],
        }
    }

    /// Append a title and body slide.
    pub fn text_slide(mut self, title: impl Into<String>, body: impl Into<String>) -> Self {
        self.slides.push(text_slide(title, body));
        self
    }

    /// Append the financial summary slide.
    pub fn financial_summary(self, figures: &FinancialFigures) -> Self {
        self.text_slide(FINANCIAL_SUMMARY_TITLE, financial_summary_text(figures))
    }

    /// Append the revenue vs expenses column chart.
    pub fn revenue_vs_expenses(mut self, figures: &FinancialFigures) -> Self {
        self.slides.push(Slide::Chart {
            title: CHART_TITLE.to_string(),
            chart: ColumnChart {
                categories: vec!["Revenue".to_string(), "Expenses".to_string()],
                series: vec![ChartSeries {
                    name: "Amount".to_string(),
                    values: vec![figures.revenue, figures.expenses],
                }],
            },
            frame: Frame::default(),
        });
        self
    }

    /// Append the observations slide.
    pub fn observations(self, summary: &ObservationSummary) -> Self {
        self.text_slide(OBSERVATIONS_TITLE, summary.render())
    }

    /// Finish the deck.
    pub fn build(self) -> ReportDeck {
        log::debug!("Built deck with {} slides for {}", self.slides.len(), self.source);

        ReportDeck {
            source: self.source,
            slides: self.slides,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use report_core::KeywordSet;

    fn figures() -> FinancialFigures {
        FinancialFigures {
            revenue: 12500.0,
            expenses: 8300.5,
            net_profit: 4199.5,
        }
    }

    #[test]
    fn test_title_slide_first() {
        let deck = DeckBuilder::new("weekly_financial_report.xlsx").build();

        assert_eq!(deck.len(), 1);
        assert_eq!(
            deck.slides[0],
            Slide::Title {
                title: "Weekly Financial Report".to_string(),
                subtitle: "Data from: weekly_financial_report.xlsx".to_string(),
            }
        );
    }

    #[test]
    fn test_full_deck_order() {
        let summary = ObservationSummary {
            total: 2,
            positive: 1,
            negative: 1,
            neutral: 0,
            key_topics: KeywordSet::new(vec!["costs".to_string()]),
        };

        let deck = DeckBuilder::new("week.xlsx")
            .financial_summary(&figures())
            .revenue_vs_expenses(&figures())
            .observations(&summary)
            .build();

        assert_eq!(
            deck.titles(),
            vec![
                "Weekly Financial Report",
                "Financial Summary",
                "Revenue vs Expenses",
                "Observations"
            ]
        );
        assert_eq!(deck.slides[3], text_slide("Observations", summary.render()));
    }

    #[test]
    fn test_chart_slide() {
        let deck = DeckBuilder::new("week.xlsx")
            .revenue_vs_expenses(&figures())
            .build();

        match &deck.slides[1] {
            Slide::Chart { chart, frame, .. } => {
                assert_eq!(chart.categories, vec!["Revenue", "Expenses"]);
                assert_eq!(chart.series[0].name, "Amount");
                assert_eq!(chart.series[0].values, vec![12500.0, 8300.5]);
                assert_eq!(frame.width, 6.0);
            }
            other => panic!("expected chart slide, got {:?}", other),
        }
    }

    #[test]
    fn test_slide_json_layout_tag() {
        let json = serde_json::to_value(text_slide("Notes", "body")).unwrap();
        assert_eq!(json["layout"], "text");
        assert_eq!(json["body"], "body");
    }
}
