//! Rezoning tracker CLI entrypoint.
//! Loads documents (file or bundled sample), runs the pipeline, and prints a
//! report, CSV or JSON.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use rezoning_tracker::config::TrackerConfig;
use rezoning_tracker::summary::Summary;
use rezoning_tracker::{document, export, report, sample, telemetry, RezoningTracker};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Report,
    Csv,
    Json,
}

/// Rank planning corridors by rezoning signals.
///
/// Examples:
///   rezoning-tracker --sample
///   rezoning-tracker --input docs.json --format csv --output out.csv
#[derive(Parser, Debug)]
#[command(name = "rezoning-tracker")]
#[command(version)]
#[command(about, long_about = None)]
struct Cli {
    /// JSON array of {name, date, text} documents
    #[arg(short, long, value_name = "FILE", conflicts_with = "sample")]
    input: Option<PathBuf>,

    /// Analyze the bundled sample corpus
    #[arg(long)]
    sample: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "report")]
    format: Format,

    /// Number of corridors shown in the report
    #[arg(short = 'n', long, default_value = "10")]
    top: usize,

    /// Config file (TOML or JSON); default discovery otherwise
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write output here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Append summary statistics to the report
    #[arg(long)]
    summary: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    telemetry::init_tracing();

    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(p) => TrackerConfig::load_from(p)
            .and_then(|c| c.with_env_overrides().validated())
            .with_context(|| format!("loading config from {}", p.display()))?,
        None => TrackerConfig::load_default().context("loading default config")?,
    };

    if cli.print_config {
        let s = toml::to_string_pretty(&cfg).context("serializing config")?;
        return emit(cli.output.as_ref(), &s);
    }

    let docs = match (&cli.input, cli.sample) {
        (Some(p), _) => document::load_documents(p)
            .with_context(|| format!("loading documents from {}", p.display()))?,
        (None, true) => sample::documents(),
        (None, false) => bail!("nothing to analyze: pass --input <FILE> or --sample"),
    };
    info!(target: "rezoning", documents = docs.len(), "documents loaded");

    let tracker = RezoningTracker::new(&cfg).context("building tracker")?;
    let ranked = tracker.analyze_documents(&docs);

    let rendered = match cli.format {
        Format::Report => {
            let mut s = report::render(&ranked, cli.top);
            if cli.summary {
                s.push('\n');
                s.push_str(&Summary::from_ranked(&ranked).to_string());
            }
            s
        }
        Format::Csv => export::to_csv_string(&ranked)?,
        Format::Json => export::to_json_pretty(&ranked)?,
    };

    emit(cli.output.as_ref(), &rendered)
}

fn emit(path: Option<&PathBuf>, content: &str) -> Result<()> {
    match path {
        Some(p) => {
            fs::write(p, content).with_context(|| format!("writing {}", p.display()))?;
            info!(target: "rezoning", path = %p.display(), "output written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}
