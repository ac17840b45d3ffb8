//! courtfetch CLI - court case record retrieval
//!
//! Usage:
//!   courtfetch search <TYPE> <NUMBER> <YEAR>   Run a case search
//!   courtfetch case-types                      List known case-type codes
//!   courtfetch history                         Show recent search attempts
//!   courtfetch fetch-document <URL>            Download a linked order/judgment

mod history;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use courtfetch_core::{is_known_case_type, Outcome, ScraperConfig, SearchQuery, SearchSink, CASE_TYPES};
use courtfetch_scraper::{CaseScraper, DocumentFetcher};
use history::JsonlHistory;
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use uuid::Uuid;

const DEFAULT_HISTORY_FILE: &str = "courtfetch_history.jsonl";

#[derive(Parser)]
#[command(name = "courtfetch")]
#[command(author, version, about = "Court case record retrieval")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file (defaults to ./courtfetch.toml when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a case and print the extracted record
    Search {
        /// Case-type code, e.g. "W.P.(C)"
        case_type: String,

        /// Case number
        case_number: String,

        /// Filing year, e.g. 2024
        year: String,

        /// Challenge-response code, if re-running after a challenge
        #[arg(long)]
        challenge_code: Option<String>,

        /// Print the record as JSON instead of a summary
        #[arg(long)]
        json: bool,

        /// Run the browser with a visible window
        #[arg(long)]
        no_headless: bool,
    },

    /// List known case-type codes
    CaseTypes,

    /// Show recent search attempts
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
    },

    /// Download a linked order/judgment document
    FetchDocument {
        /// Resolved document URL (from a parsed record)
        url: String,

        /// Output file (defaults to the URL's filename)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set up logging")?;

    let config_path = cli.config.unwrap_or_else(|| PathBuf::from("courtfetch.toml"));
    let config = ScraperConfig::load_or_default(&config_path)?;

    match cli.command {
        Commands::Search {
            case_type,
            case_number,
            year,
            challenge_code,
            json,
            no_headless,
        } => {
            let mut config = config;
            if no_headless {
                config.headless = false;
            }
            run_search(config, case_type, case_number, year, challenge_code, json).await
        }
        Commands::CaseTypes => {
            for case_type in CASE_TYPES {
                println!("{}", case_type);
            }
            Ok(())
        }
        Commands::History { limit } => show_history(limit),
        Commands::FetchDocument { url, output } => fetch_document(&url, output).await,
    }
}

async fn run_search(
    config: ScraperConfig,
    case_type: String,
    case_number: String,
    year: String,
    challenge_code: Option<String>,
    json: bool,
) -> Result<()> {
    if case_type.trim().is_empty() || case_number.trim().is_empty() || year.trim().is_empty() {
        bail!("Case type, case number, and year are all required");
    }
    if !is_known_case_type(&case_type) {
        warn!("'{}' is not a known case-type code, submitting anyway", case_type);
    }
    match year.parse::<u16>() {
        Ok(y) if courtfetch_core::search_years().contains(&y) => {}
        _ => warn!("'{}' is outside the expected year range, submitting anyway", year),
    }

    let mut query = SearchQuery::new(case_type, case_number, year);
    if let Some(code) = challenge_code {
        query = query.with_challenge_code(code);
    }

    let history = JsonlHistory::new(DEFAULT_HISTORY_FILE);
    let search_id = Uuid::new_v4();
    history.record_search(search_id, &query).await?;
    info!("Search {} for {}", search_id, query.reference());

    let mut scraper = CaseScraper::launch(config)
        .await
        .context("Failed to launch browser session")?;

    let outcome = scraper.search(&query).await;

    // Release the browser before reporting, whatever the outcome
    scraper.close().await?;

    match outcome {
        Outcome::Parsed(record) => {
            history.record_parsed(search_id, &record).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                print_record_summary(&record);
            }
            Ok(())
        }
        Outcome::ChallengeRequired => {
            history
                .record_failure(search_id, "challenge verification required")
                .await?;
            println!("Challenge verification required.");
            println!("Re-run with --challenge-code <CODE> after reading the code from the site.");
            Ok(())
        }
        Outcome::Failure { reason } => {
            history.record_failure(search_id, &reason).await?;
            bail!("Search failed: {}", reason);
        }
    }
}

fn print_record_summary(record: &courtfetch_core::CaseRecord) {
    let show = |value: &Option<String>| value.as_deref().unwrap_or("-").to_string();

    println!("Title:         {}", show(&record.title));
    println!("Petitioner:    {}", show(&record.petitioner));
    println!("Respondent:    {}", show(&record.respondent));
    println!("Filing date:   {}", show(&record.filing_date));
    println!("Next hearing:  {}", show(&record.next_hearing_date));
    println!("Status:        {}", show(&record.status));
    println!("Bench:         {}", show(&record.bench_info));

    if record.orders.is_empty() {
        println!("Orders:        none");
    } else {
        println!("Orders:");
        for order in &record.orders {
            println!(
                "  {} {} {}",
                order.date.as_deref().unwrap_or("-"),
                order.kind,
                order.document_url.as_deref().unwrap_or("(no document)")
            );
        }
    }
}

fn show_history(limit: usize) -> Result<()> {
    let history = JsonlHistory::new(DEFAULT_HISTORY_FILE);
    let entries = history.recent(limit)?;

    if entries.is_empty() {
        println!("No search history.");
        return Ok(());
    }

    for entry in entries {
        let detail = match entry.event.as_str() {
            "search" => entry
                .query
                .as_ref()
                .map(|q| q.reference())
                .unwrap_or_default(),
            "failure" => entry.message.clone().unwrap_or_default(),
            _ => String::new(),
        };
        println!(
            "{}  {}  {:8}  {}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
            entry.search_id,
            entry.event,
            detail
        );
    }
    Ok(())
}

async fn fetch_document(url: &str, output: Option<PathBuf>) -> Result<()> {
    let fetcher = DocumentFetcher::new()?;
    let bytes = fetcher.fetch(url).await?;

    let path = output.unwrap_or_else(|| PathBuf::from(DocumentFetcher::filename_from_url(url)));
    std::fs::write(&path, &bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Saved {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
