// CLI for survey comment analysis: classify a single comment or analyze a
// file/directory of comments and emit a JSON report.
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use walkdir::WalkDir;

use sentimen::analysis::aggregate::{summarize, AggregateSummary};
use sentimen::analysis::classifier::{train, ClassifierModel, Sentiment};
use sentimen::analysis::corpus::bundled_corpus;
use sentimen::analysis::decision::{decide, ClassificationResult};

#[derive(Parser)]
#[command(name = "sentimen", about = "Survey comment sentiment and theme analysis")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single comment and print the result
    Classify {
        #[arg(short, long)]
        text: String,
        /// Emit the raw classification record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Analyze a file or directory of comments (one comment per line)
    Analyze {
        #[arg(short, long)]
        input: PathBuf,
        /// Optional JSON report path
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct AnalyzedComment {
    text: String,
    /// Caller-side metadata; attached here and passed through untouched,
    /// never interpreted by the analysis core.
    source: String,
    result: ClassificationResult,
}

#[derive(Serialize)]
struct Report {
    comments: Vec<AnalyzedComment>,
    summary: AggregateSummary,
}

fn read_file_content(p: &Path) -> Result<String> {
    let ext = p.extension().and_then(|s| s.to_str()).unwrap_or("");
    match ext {
        "txt" | "md" | "csv" => {
            let mut s = String::new();
            let mut f = File::open(p)?;
            f.read_to_string(&mut s)?;
            Ok(s)
        }
        "pdf" => pdf_extract::extract_text(p).map_err(|e| anyhow!("PDF extraction failed: {}", e)),
        _ => Err(anyhow!("Unsupported file format: {}", ext)),
    }
}

fn collect_files(input: &Path) -> Vec<PathBuf> {
    let allowed_exts = ["txt", "md", "csv", "pdf"];
    if input.is_file() {
        return vec![input.to_path_buf()];
    }
    let mut files: Vec<PathBuf> = WalkDir::new(input)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|s| s.to_str())
                .map(|ext| allowed_exts.contains(&ext))
                .unwrap_or(false)
        })
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();
    files
}

// One comment per non-empty line. CSV files are consumed line-wise like any
// text file; column extraction belongs to the ingestion pipeline, not here.
fn load_comments(input: &Path) -> Result<Vec<(String, String)>> {
    let mut comments = Vec::new();
    for path in collect_files(input) {
        let text = read_file_content(&path).unwrap_or_else(|_| String::new());
        let source = path.to_string_lossy().to_string();
        for line in text.lines() {
            let line = line.trim();
            if !line.is_empty() {
                comments.push((source.clone(), line.to_string()));
            }
        }
    }
    Ok(comments)
}

fn sentiment_color(sentiment: Sentiment) -> Color {
    match sentiment {
        Sentiment::Positive => Color::Green,
        Sentiment::Negative => Color::Red,
        Sentiment::Neutral => Color::Yellow,
    }
}

fn print_sentiment(stdout: &mut StandardStream, sentiment: Sentiment) -> Result<()> {
    stdout.set_color(ColorSpec::new().set_fg(Some(sentiment_color(sentiment))).set_bold(true))?;
    write!(stdout, "{}", sentiment)?;
    stdout.reset()?;
    Ok(())
}

fn run_classify(model: &ClassifierModel, text: &str, json: bool) -> Result<()> {
    let result = decide(model, text);
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    write!(stdout, "sentiment: ")?;
    print_sentiment(&mut stdout, result.sentiment)?;
    writeln!(stdout)?;
    writeln!(
        stdout,
        "themes:    {}",
        result.themes.into_iter().collect::<Vec<_>>().join(", ")
    )?;
    writeln!(stdout, "margin:    {:.3}", result.confidence_margin)?;
    writeln!(stdout, "net score: {}", result.rule_net_score)?;
    writeln!(stdout, "method:    {}", result.method)?;
    Ok(())
}

fn print_summary(summary: &AggregateSummary) -> Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    writeln!(stdout, "--- summary ---")?;
    write!(stdout, "comments: {}  (", summary.sentiment.total)?;
    print_sentiment(&mut stdout, Sentiment::Positive)?;
    write!(stdout, " {} / ", summary.sentiment.positive)?;
    print_sentiment(&mut stdout, Sentiment::Negative)?;
    write!(stdout, " {} / ", summary.sentiment.negative)?;
    print_sentiment(&mut stdout, Sentiment::Neutral)?;
    writeln!(stdout, " {})", summary.sentiment.neutral)?;

    let top_words: Vec<String> = summary
        .word_cloud
        .iter()
        .take(10)
        .map(|w| format!("{} ({})", w.text, w.count))
        .collect();
    writeln!(stdout, "top words: {}", top_words.join(", "))?;

    for theme in &summary.themes {
        writeln!(
            stdout,
            "theme {}: {} mentions, sentiment {:+}",
            theme.name, theme.count, theme.signed_sentiment
        )?;
    }
    Ok(())
}

fn run_analyze(model: &ClassifierModel, input: &Path, out: Option<&Path>) -> Result<()> {
    let comments = load_comments(input)?;

    let pb = ProgressBar::new(comments.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {wide_bar} {pos}/{len} {msg}")?
            .progress_chars("=>-"),
    );

    // Classification is a pure function of (model, text), so comments are
    // classified in parallel.
    let analyzed: Vec<AnalyzedComment> = comments
        .par_iter()
        .map(|(source, text)| {
            let result = decide(model, text);
            pb.inc(1);
            AnalyzedComment {
                text: text.clone(),
                source: source.clone(),
                result,
            }
        })
        .collect();
    pb.finish_with_message("classified comments");

    let summary = summarize(analyzed.iter().map(|c| (c.text.as_str(), &c.result)));
    print_summary(&summary)?;

    if let Some(out) = out {
        let fout = File::create(out)?;
        serde_json::to_writer_pretty(fout, &Report { comments: analyzed, summary })?;
        println!("Wrote report to {}", out.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let corpus = bundled_corpus()?;
    let model = train(&corpus);
    match cli.command {
        Commands::Classify { text, json } => run_classify(&model, &text, json)?,
        Commands::Analyze { input, out } => run_analyze(&model, &input, out.as_deref())?,
    }
    Ok(())
}
