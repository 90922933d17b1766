//! renfe-cli: renfe timetables in your terminal.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use renfe_timetable::domain::{TimetableEntry, date_after, days_between};
use renfe_timetable::scrape::{BrowserKind, ScrapeConfig, SearchRequest};
use renfe_timetable::stations::{StationClient, StationClientConfig, StationDirectory};
use renfe_timetable::timetable::fetch_timetable;

#[derive(Parser)]
#[command(name = "renfe-cli", version, about = "Get Renfe train timetables from your terminal")]
struct Cli {
    /// Origin station id
    #[arg(short, long)]
    origin: Option<String>,

    /// Destination station id
    #[arg(short, long)]
    to: Option<String>,

    /// Travel date, YYYY-MM-DD
    #[arg(short, long, conflicts_with = "days")]
    date: Option<String>,

    /// Days from today
    #[arg(long, default_value_t = 0)]
    days: i64,

    /// Browser to automate
    #[arg(short, long, value_enum, default_value_t = BrowserKind::Firefox)]
    browser: BrowserKind,

    /// Seconds to let the results page render
    #[arg(short = 'e', long, default_value_t = 3)]
    search_timeout: u64,

    /// Search stations by name instead of fetching a timetable
    #[arg(short, long)]
    search: Option<String>,

    /// Write the timetable as JSON to this file
    #[arg(long)]
    output: Option<PathBuf>,

    /// WebDriver endpoint (defaults to the browser's local driver port)
    #[arg(long)]
    webdriver_url: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("please provide origin and destination station ids (or use --search)")]
    MissingStations,

    #[error("please provide right values for origin and destination station ids")]
    InvalidStations,

    #[error(transparent)]
    Station(#[from] renfe_timetable::stations::StationError),

    #[error(transparent)]
    Scrape(#[from] renfe_timetable::scrape::ScrapeError),

    #[error(transparent)]
    Date(#[from] renfe_timetable::domain::InvalidDate),

    #[error("failed to serialize timetable: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output file: {0}")]
    Output(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let today = Local::now().date_naive();
    println!("Today is: {today}");

    let searching_stations = cli.search.is_some();
    if let Err(e) = run(cli, today).await {
        error!("{e}");
        if searching_stations {
            error!("Error searching station ids. Check your inputs and retry with RUST_LOG=debug.");
        } else {
            error!(
                "No timetables found. Check your inputs and retry with RUST_LOG=debug; \
                 if the problem persists the site may have changed."
            );
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli, today: NaiveDate) -> Result<(), CliError> {
    let station_client = StationClient::new(StationClientConfig::default())?;
    let directory = StationDirectory::fetch(station_client).await?;

    if let Some(query) = cli.search.as_deref() {
        search_stations(&directory, query).await;
        return Ok(());
    }

    let (Some(origin_id), Some(to_id)) = (cli.origin.as_deref(), cli.to.as_deref()) else {
        return Err(CliError::MissingStations);
    };
    if !(directory.exists(origin_id).await && directory.exists(to_id).await) {
        return Err(CliError::InvalidStations);
    }
    let origin = directory.name_for_id(origin_id).await?;
    let destination = directory.name_for_id(to_id).await?;

    let days_from_today = match cli.date.as_deref() {
        Some(date) => days_between(today, date)?,
        None => cli.days,
    };
    let search_date = cli
        .date
        .clone()
        .unwrap_or_else(|| date_after(today, cli.days));

    println!("Searching timetable for date: {search_date}");
    println!("From {origin} to {destination}");
    println!("Be patient, navigating through the renfe site now...");

    let mut config = ScrapeConfig::new(cli.browser);
    if let Some(url) = cli.webdriver_url {
        config = config.with_webdriver_url(url);
    }
    let request = SearchRequest {
        origin,
        destination,
        days_from_today,
        settle_timeout: Duration::from_secs(cli.search_timeout),
    };

    let timetable = fetch_timetable(&config, &request).await?;

    println!("{}", render_table(&timetable));
    if timetable.is_empty() {
        println!(
            "Timetable was empty. Maybe no more trains for that date? \
             Also, try increasing the search timeout (-e flag)."
        );
    }

    if let Some(path) = cli.output.as_deref() {
        write_json(&timetable, path)?;
        println!("Timetable written to {}", path.display());
    }

    Ok(())
}

/// Print every station whose name contains the query.
async fn search_stations(directory: &StationDirectory, query: &str) {
    println!("Searching stations like: {query}");
    let matches = directory.search(query).await;
    if matches.is_empty() {
        println!("Oops! No stations found by key value: {query}");
        return;
    }
    for station in matches {
        println!("{station:?}");
    }
}

/// Fixed-width timetable table.
fn render_table(timetable: &[TimetableEntry]) -> String {
    let mut out = String::new();
    out.push_str("=================================TIMETABLE================================\n");
    out.push_str(&format!(
        " {:<10} | {:<10} | {:<10} | {:<12} | {:<10}\n",
        "Train", "Departure", "Arrival", "Duration", "Prices"
    ));
    for entry in timetable {
        out.push_str(
            "--------------------------------------------------------------------------\n",
        );
        out.push_str(&format!(
            " {:<10} | {:<10} | {:<10} | {:<12} | {:<10}\n",
            entry.train_type,
            entry.departure,
            entry.arrival,
            entry.duration,
            entry.price.join(" - ")
        ));
    }
    out.push_str("==========================================================================");
    out
}

/// Write the timetable as pretty-printed JSON.
fn write_json(timetable: &[TimetableEntry], path: &Path) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(timetable)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timetable() -> Vec<TimetableEntry> {
        vec![
            TimetableEntry {
                train_type: "AVE".to_string(),
                departure: "08:30".to_string(),
                arrival: "11:15".to_string(),
                duration: "2 h. 45 min.".to_string(),
                price: vec!["45,10 €".to_string(), "60,70 €".to_string()],
            },
            TimetableEntry {
                train_type: "AVLO".to_string(),
                departure: "09:05".to_string(),
                arrival: "11:50".to_string(),
                duration: "2 h. 45 min.".to_string(),
                price: vec!["Tren Completo".to_string()],
            },
        ]
    }

    #[test]
    fn table_lists_every_train_with_joined_prices() {
        let table = render_table(&sample_timetable());
        assert!(table.contains("TIMETABLE"));
        assert!(table.contains(" Train      | Departure  | Arrival    | Duration     | Prices"));
        assert!(table.contains(" AVE        | 08:30      | 11:15      | 2 h. 45 min. | 45,10 € - 60,70 €"));
        assert!(table.contains(" AVLO       | 09:05      | 11:50      | 2 h. 45 min. | Tren Completo"));
    }

    #[test]
    fn empty_table_still_renders_the_header() {
        let table = render_table(&[]);
        assert!(table.starts_with("=================================TIMETABLE"));
        assert!(table.contains("Train"));
        assert!(table.ends_with("=========================================================================="));
    }

    #[test]
    fn writes_pretty_json_that_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timetable.json");

        let timetable = sample_timetable();
        write_json(&timetable, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"type\": \"AVE\""));

        let back: Vec<TimetableEntry> = serde_json::from_str(&written).unwrap();
        assert_eq!(back, timetable);
    }

    #[test]
    fn cli_parses_a_full_timetable_invocation() {
        let cli = Cli::parse_from([
            "renfe-cli",
            "--origin",
            "60000",
            "--to",
            "71801",
            "--date",
            "2024-06-01",
            "--browser",
            "chrome",
            "--search-timeout",
            "5",
        ]);
        assert_eq!(cli.origin.as_deref(), Some("60000"));
        assert_eq!(cli.to.as_deref(), Some("71801"));
        assert_eq!(cli.date.as_deref(), Some("2024-06-01"));
        assert_eq!(cli.browser, BrowserKind::Chrome);
        assert_eq!(cli.search_timeout, 5);
        assert_eq!(cli.days, 0);
    }

    #[test]
    fn date_and_days_conflict() {
        let result = Cli::try_parse_from([
            "renfe-cli",
            "--origin",
            "60000",
            "--to",
            "71801",
            "--date",
            "2024-06-01",
            "--days",
            "2",
        ]);
        assert!(result.is_err());
    }
}
