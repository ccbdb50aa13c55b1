//! Report assembly for weekly financial reports.
//!
//! Turns headline figures and an observation summary into an ordered set of
//! slide descriptors, and renders those as a plain-text outline.

pub mod currency;
pub mod deck;
pub mod outline;

pub use currency::{financial_summary_text, format_currency};
pub use deck::{ChartSeries, ColumnChart, DeckBuilder, Frame, ReportDeck, Slide};
pub use outline::OutlineFormatter;
