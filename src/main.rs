//! tallyfile - line statistics for text files and size summaries for trees.
//!
//! Usage:
//!   tally analyze FILE [FIND]...   Classify lines, print numeric statistics
//!   tally scan [PATH]              Count files, directories and bytes
//!   tally --help                   Show help

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing::Level;

use tallyfile_analyze::{AnalysisReport, AnalysisResult, AnalyzeConfig, ContentAnalyzer, render};
use tallyfile_core::decimal::{DISPLAY_SCALE, to_fixed_string};
use tallyfile_scan::{DirectoryScanner, ScanConfig, ScanSummary};

#[derive(Parser)]
#[command(
    name = "tallyfile",
    version,
    about = "Line statistics for text files and size summaries for directory trees",
    long_about = "tallyfile classifies every line of a file as a decimal number or text \
                  and reports exact sums, averages and medians, or scans a directory \
                  tree and totals its files and bytes."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze the lines of a file
    Analyze {
        /// File to analyze
        file: PathBuf,

        /// Strings to look up among the non-numeric lines
        find: Vec<String>,

        /// Replace invalid UTF-8 instead of failing
        #[arg(long)]
        lossy: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Scan a directory tree and summarize file sizes
    Scan {
        /// Path to scan
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Maximum depth to traverse
        #[arg(short = 'd', long)]
        max_depth: Option<u32>,

        /// Skip hidden files and directories
        #[arg(long)]
        no_hidden: bool,

        /// Number of traversal threads (0 = auto)
        #[arg(short = 'j', long, default_value = "0")]
        threads: usize,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Analyze {
            file,
            find,
            lossy,
            format,
        } => run_analyze(file, &find, lossy, format)?,
        Command::Scan {
            path,
            max_depth,
            no_hidden,
            threads,
            format,
        } => run_scan(path, max_depth, !no_hidden, threads, format)?,
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Analyze a file and print its statistics.
fn run_analyze(file: PathBuf, find: &[String], lossy: bool, format: OutputFormat) -> Result<()> {
    let config = AnalyzeConfig::builder()
        .path(file)
        .lossy_utf8(lossy)
        .build()
        .context("Invalid arguments")?;

    let result = ContentAnalyzer::new()
        .analyze(&config)
        .with_context(|| format!("Analysis of {} failed", config.path.display()))?;

    match format {
        OutputFormat::Text => print_analysis(&result, find),
        OutputFormat::Json => {
            let lookups: Vec<(&str, bool)> = find
                .iter()
                .map(|s| (s.as_str(), result.contains(s.as_str())))
                .collect();
            let output = serde_json::json!({
                "report": AnalysisReport::from_result(&result),
                "strings_present": lookups
                    .into_iter()
                    .map(|(s, found)| serde_json::json!({ "value": s, "present": found }))
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn print_analysis(result: &AnalysisResult, find: &[String]) {
    println!("Analysis of file, {}", result.file_name());
    print!("{}", render(result));

    println!();
    println!("Sum: {}", to_fixed_string(&result.total(), DISPLAY_SCALE));
    println!("Number of Numbers: {}", result.count_of_numbers());

    if !find.is_empty() {
        println!();
        println!("Strings Present?");
        for candidate in find {
            println!("  \"{}\":  {}", candidate, result.contains(candidate.as_str()));
        }
    }
}

/// Scan a path and print the summary.
fn run_scan(
    path: PathBuf,
    max_depth: Option<u32>,
    include_hidden: bool,
    threads: usize,
    format: OutputFormat,
) -> Result<()> {
    let config = ScanConfig::builder()
        .root(path)
        .max_depth(max_depth)
        .include_hidden(include_hidden)
        .threads(threads)
        .build()
        .context("Invalid arguments")?;

    eprintln!("Scanning {}...", config.root.display());

    let summary = DirectoryScanner::new()
        .scan(&config)
        .context("Scan failed")?;

    match format {
        OutputFormat::Text => print_scan(&summary),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "summary": &summary,
                "avg_bytes": summary.avg_bytes(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn print_scan(summary: &ScanSummary) {
    println!("Number of files scanned: {}", summary.num_files);
    println!("Number of directories scanned: {}", summary.num_directories);
    println!(
        "Total size (in B) of all scanned files: {} ({})",
        summary.total_bytes,
        format_size(summary.total_bytes)
    );
    println!(
        "Average size (in B) of all scanned files: {}",
        summary.avg_bytes()
    );

    if summary.num_other > 0 {
        println!("Entries not counted (links, devices, ...): {}", summary.num_other);
    }
    if summary.has_warnings() {
        println!();
        println!("{} warning(s) during scan", summary.warnings.len());
    }
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}
