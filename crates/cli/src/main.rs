//! CLI tool for summarizing weekly financial report worksheets.

use anyhow::{Context, Result};
use clap::Parser;
use report_core::{
    AnalysisConfig, FinancialFigures, Lexicon, ObservationSummarizer, ObservationSummary,
    TermFrequencyExtractor, VaderAnalyzer, Worksheet, WorksheetReader,
};
use report_deck::{DeckBuilder, OutlineFormatter, ReportDeck};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

/// Summarize weekly report worksheets into a slide outline.
#[derive(Parser, Debug)]
#[command(name = "weekly-report")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input worksheet file(s), as JSON rows keyed by row number
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Emit the full report as JSON instead of a text outline
    #[arg(short, long)]
    json: bool,

    /// Number of key topics to report (default: 5)
    #[arg(short = 'n', long, default_value = "5")]
    top_n: usize,

    /// 0-based column holding the notes (default: 4, column E)
    #[arg(short = 'c', long, default_value = "4")]
    notes_column: usize,

    /// Treat the first row as a header
    #[arg(short, long)]
    skip_header: bool,

    /// Tab-separated sentiment lexicon replacing the built-in one
    #[arg(short, long)]
    lexicon: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Everything produced for one worksheet.
#[derive(Debug, Serialize)]
struct Report {
    figures: FinancialFigures,
    summary: ObservationSummary,
    deck: ReportDeck,
}

type Summarizer = ObservationSummarizer<VaderAnalyzer, TermFrequencyExtractor>;

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let config = AnalysisConfig::new()
        .with_top_n(args.top_n)
        .with_notes_column(args.notes_column);

    let analyzer = load_analyzer(args.lexicon.as_deref())?;
    let reader = WorksheetReader::from_config(&config).with_skip_header(args.skip_header);
    let summarizer = ObservationSummarizer::from_config(analyzer, TermFrequencyExtractor::new(), &config);
    let formatter = OutlineFormatter::new();

    let failed = run(&args, &reader, &summarizer, &formatter);
    if failed > 0 {
        log::warn!("{} of {} files failed", failed, args.input.len());
    }

    Ok(())
}

/// Build the sentiment model, from a lexicon file when one is given.
fn load_analyzer(lexicon: Option<&Path>) -> Result<VaderAnalyzer> {
    match lexicon {
        Some(path) => {
            let lexicon = Lexicon::from_path(path)
                .with_context(|| format!("Failed to load lexicon {}", path.display()))?;
            log::debug!("Loaded {} lexicon entries from {}", lexicon.len(), path.display());
            Ok(VaderAnalyzer::new(lexicon))
        }
        None => Ok(VaderAnalyzer::default()),
    }
}

/// Process every input, reporting failures and moving on. Returns the failure count.
fn run(
    args: &Args,
    reader: &WorksheetReader,
    summarizer: &Summarizer,
    formatter: &OutlineFormatter,
) -> usize {
    let mut failed = 0;

    for input_path in &args.input {
        if args.verbose {
            eprintln!("Processing: {}", input_path.display());
        }

        let result = process_file(input_path, args, reader, summarizer, formatter)
            .and_then(|output| emit_output(input_path, args, &output));

        if let Err(e) = result {
            eprintln!("Error processing {}: {:#}", input_path.display(), e);
            failed += 1;
        }
    }

    failed
}

/// Process a single worksheet file.
fn process_file(
    input_path: &Path,
    args: &Args,
    reader: &WorksheetReader,
    summarizer: &Summarizer,
    formatter: &OutlineFormatter,
) -> Result<String> {
    let file = File::open(input_path)
        .with_context(|| format!("Failed to open {}", input_path.display()))?;
    let sheet: Worksheet = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse worksheet {}", input_path.display()))?;

    let filename = input_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown");

    let figures = reader.figures(&sheet)?;
    let notes = reader.notes(&sheet);

    if args.verbose {
        eprintln!("  Found {} rows, {} notes", sheet.len(), notes.len());
    }

    let summary = summarizer.summarize(&notes)?;

    let deck = DeckBuilder::new(filename)
        .financial_summary(&figures)
        .revenue_vs_expenses(&figures)
        .observations(&summary)
        .build();

    if args.json {
        let report = Report {
            figures,
            summary,
            deck,
        };
        let mut output = serde_json::to_string_pretty(&report)?;
        output.push('\n');
        Ok(output)
    } else {
        Ok(formatter.format_with_newline(&deck))
    }
}

/// Print the output or write it next to the input (or into the output directory).
fn emit_output(input_path: &Path, args: &Args, output: &str) -> Result<()> {
    if args.print {
        print!("{}", output);
        return Ok(());
    }

    let output_path = get_output_path(input_path, args.output.as_ref(), args.json)?;
    write_output(&output_path, output)?;
    if args.verbose {
        eprintln!("Written to: {}", output_path.display());
    }

    Ok(())
}

/// Determine the output path for a processed file.
fn get_output_path(input_path: &Path, output_dir: Option<&PathBuf>, json: bool) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    // Inputs are JSON too, so reports get a distinct suffix
    let extension = if json { "report.json" } else { "txt" };
    let output_filename = format!("{}.{}", stem, extension);

    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => match input_path.parent() {
            Some(parent) => parent.join(output_filename),
            None => PathBuf::from(output_filename),
        },
    };

    Ok(output_path)
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEEKLY_SHEET: &str = r#"{
        "1": ["Metric", "Amount", null, null, "Notes"],
        "2": ["Revenue", 12500, null, null, "Great results this month!"],
        "3": ["Expenses", 8300.5, null, null, "Costs were too high"],
        "4": ["Net Profit", 4199.5, null, null, 42],
        "5": [null, null, null, null, ""],
        "6": [null, null, null, null, "Stable performance"]
    }"#;

    /// A fresh scratch directory under the system temp dir.
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("weekly-report-{}-{}", std::process::id(), name));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn pipeline(args: &Args) -> (WorksheetReader, Summarizer, OutlineFormatter) {
        let config = AnalysisConfig::new()
            .with_top_n(args.top_n)
            .with_notes_column(args.notes_column);
        let reader = WorksheetReader::from_config(&config).with_skip_header(args.skip_header);
        let summarizer = ObservationSummarizer::from_config(
            load_analyzer(args.lexicon.as_deref()).unwrap(),
            TermFrequencyExtractor::new(),
            &config,
        );
        (reader, summarizer, OutlineFormatter::new())
    }

    #[test]
    fn test_process_file_outline() {
        let dir = scratch_dir("outline");
        let input = dir.join("week.json");
        std::fs::write(&input, WEEKLY_SHEET).unwrap();

        let args = Args::parse_from(["weekly-report", "--skip-header", input.to_str().unwrap()]);
        let (reader, summarizer, formatter) = pipeline(&args);
        let output = process_file(&input, &args, &reader, &summarizer, &formatter).unwrap();

        assert!(output.starts_with("# Weekly Financial Report\nData from: week.json\n"));
        assert!(output.contains("Total Revenue: $12,500.00"));
        assert!(output.contains("# Observations\nObservations Summary:\n\n- Total Notes: 5\n"));
        assert!(output.ends_with('\n'));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_process_file_json() {
        let dir = scratch_dir("json");
        let input = dir.join("week.json");
        std::fs::write(&input, WEEKLY_SHEET).unwrap();

        let args = Args::parse_from([
            "weekly-report",
            "--json",
            "--skip-header",
            input.to_str().unwrap(),
        ]);
        let (reader, summarizer, formatter) = pipeline(&args);
        let output = process_file(&input, &args, &reader, &summarizer, &formatter).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["figures"]["revenue"], 12500.0);
        assert_eq!(value["summary"]["total"], 5);
        assert_eq!(value["deck"]["source"], "week.json");
        assert_eq!(value["deck"]["slides"].as_array().unwrap().len(), 4);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_process_file_invalid_input() {
        let dir = scratch_dir("invalid");
        let broken = dir.join("broken.json");
        std::fs::write(&broken, "not a worksheet").unwrap();

        let args = Args::parse_from(["weekly-report", broken.to_str().unwrap()]);
        let (reader, summarizer, formatter) = pipeline(&args);

        assert!(process_file(&broken, &args, &reader, &summarizer, &formatter).is_err());
        assert!(process_file(&dir.join("missing.json"), &args, &reader, &summarizer, &formatter).is_err());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_run_continues_after_failure() {
        let dir = scratch_dir("batch");
        let broken = dir.join("broken.json");
        let good = dir.join("week.json");
        std::fs::write(&broken, "{").unwrap();
        std::fs::write(&good, WEEKLY_SHEET).unwrap();

        let args = Args::parse_from([
            "weekly-report",
            broken.to_str().unwrap(),
            good.to_str().unwrap(),
        ]);
        let (reader, summarizer, formatter) = pipeline(&args);

        assert_eq!(run(&args, &reader, &summarizer, &formatter), 1);
        assert!(dir.join("week.txt").exists());
        assert!(!dir.join("broken.txt").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_run_continues_after_write_failure() {
        let dir = scratch_dir("unwritable");
        let input = dir.join("week.json");
        std::fs::write(&input, WEEKLY_SHEET).unwrap();
        // A regular file where the output directory should be
        let blocked = dir.join("blocked");
        std::fs::write(&blocked, "").unwrap();

        let args = Args::parse_from([
            "weekly-report",
            "--output",
            blocked.to_str().unwrap(),
            input.to_str().unwrap(),
            input.to_str().unwrap(),
        ]);
        let (reader, summarizer, formatter) = pipeline(&args);

        assert_eq!(run(&args, &reader, &summarizer, &formatter), 2);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_analyzer_missing_lexicon() {
        assert!(load_analyzer(Some(Path::new("/nonexistent/vader_lexicon.txt"))).is_err());
        assert!(load_analyzer(None).is_ok());
    }

    #[test]
    fn test_load_analyzer_rejects_non_finite_lexicon() {
        let dir = scratch_dir("lexicon");
        let lexicon = dir.join("lexicon.txt");
        std::fs::write(&lexicon, "great\tinf\n").unwrap();

        let err = load_analyzer(Some(&lexicon)).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to load lexicon"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_output_path_beside_input() {
        let path = get_output_path(Path::new("reports/week.json"), None, false).unwrap();
        assert_eq!(path, PathBuf::from("reports/week.txt"));
    }

    #[test]
    fn test_output_path_json() {
        let path = get_output_path(Path::new("reports/week.json"), None, true).unwrap();
        assert_eq!(path, PathBuf::from("reports/week.report.json"));
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["weekly-report", "week.json"]);
        assert_eq!(args.top_n, 5);
        assert_eq!(args.notes_column, 4);
        assert!(!args.json);
        assert!(args.lexicon.is_none());
    }
}
