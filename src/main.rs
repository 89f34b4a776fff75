use analytics::{AnalyticsError, MetricsSummary, compute_metrics};
use analyzer::TrendAnalyzer;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use configuration::Settings;
use core_types::{DailyRecord, TimeWindow};
use data_source::{FileSource, HistorySource, HttpSource};
use futures::future::join_all;
use insights::InsightGenerator;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod output;

/// The main entry point for the Stocklens command-line dashboard.
#[tokio::main]
async fn main() -> Result<()> {
    // STOCKLENS_* overrides may live in a .env file.
    dotenvy::dotenv().ok();

    // Logs go to stderr so `--json` output on stdout stays clean.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let settings = configuration::load_config(cli.config.as_deref())
        .context("Failed to load configuration")?;

    match cli.command {
        Commands::Analyze(args) => handle_analyze(args, settings).await,
        Commands::Compare(args) => handle_compare(args).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Historical stock price analysis: metrics, trends and narrative insights.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (defaults to ./stocklens.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse one time window: metrics, yearly performance, trends and insights.
    Analyze(AnalyzeArgs),
    /// Compare summary metrics across all time windows.
    Compare(CompareArgs),
}

/// Where to read the CSV price history from.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct SourceArgs {
    /// A local CSV file with Date,Open,High,Low,Close,Adj Close,Volume columns.
    #[arg(long)]
    file: Option<PathBuf>,

    /// An HTTP(S) URL serving the same CSV layout.
    #[arg(long)]
    url: Option<String>,
}

impl SourceArgs {
    fn into_source(self) -> Result<Box<dyn HistorySource>> {
        match (self.file, self.url) {
            (Some(path), _) => Ok(Box::new(FileSource::new(path))),
            (None, Some(url)) => Ok(Box::new(HttpSource::new(url))),
            (None, None) => anyhow::bail!("one of --file or --url is required"),
        }
    }
}

#[derive(Parser)]
struct AnalyzeArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// The look-back window measured from the latest trading day.
    #[arg(long, value_enum, default_value_t = TimeWindow::All)]
    window: TimeWindow,

    /// The name used in generated text (overrides `display.subject`).
    #[arg(long)]
    symbol: Option<String>,

    /// Print a single JSON document instead of tables.
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct CompareArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Print a single JSON document instead of a table.
    #[arg(long)]
    json: bool,
}

// ==============================================================================
// Command Logic
// ==============================================================================

async fn load(source: SourceArgs) -> Result<Vec<DailyRecord>> {
    let source = source.into_source()?;
    source
        .load_records()
        .await
        .with_context(|| format!("Failed to load stock data from {}", source.describe()))
}

/// Metrics for a view, treating an empty view as "no metrics available".
fn metrics_for(records: &[DailyRecord]) -> Result<Option<MetricsSummary>> {
    match compute_metrics(records) {
        Ok(summary) => Ok(Some(summary)),
        Err(AnalyticsError::EmptyInput) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Handles the `analyze` command.
async fn handle_analyze(args: AnalyzeArgs, mut settings: Settings) -> Result<()> {
    if let Some(symbol) = args.symbol {
        settings.display.subject = symbol;
    }

    let records = load(args.source).await?;
    let filtered = args.window.apply(&records);
    tracing::info!(
        window = %args.window,
        total = records.len(),
        kept = filtered.len(),
        "Applied time window"
    );

    let metrics = metrics_for(&filtered)?;
    let trends = TrendAnalyzer::new(settings.trends.clone(), &settings.display).analyze(&filtered);
    let insights =
        InsightGenerator::new(settings.insights.clone(), &settings.display).generate(&filtered);

    let analysis = output::Analysis {
        subject: settings.display.subject,
        window: args.window,
        records: filtered.len(),
        metrics,
        trends,
        insights,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        output::print_analysis(&analysis);
    }
    Ok(())
}

/// Handles the `compare` command.
///
/// Each window is an independent pure computation over the shared records,
/// so the windows are evaluated side by side on the blocking pool.
async fn handle_compare(args: CompareArgs) -> Result<()> {
    let records = Arc::new(load(args.source).await?);

    let tasks = TimeWindow::ALL.into_iter().map(|window| {
        let records = Arc::clone(&records);
        tokio::task::spawn_blocking(move || {
            let filtered = window.apply(&records);
            metrics_for(&filtered).map(|metrics| output::WindowMetrics {
                window,
                records: filtered.len(),
                metrics,
            })
        })
    });

    let mut rows = Vec::with_capacity(TimeWindow::ALL.len());
    for result in join_all(tasks).await {
        rows.push(result.context("A window computation panicked")??);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        output::print_comparison(&rows);
    }
    Ok(())
}
