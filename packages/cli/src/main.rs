#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line driver for the coastwatch analysis pipeline.
//!
//! Runs the classifier, hotspot aggregation, risk scoring, relevance
//! scoring, and alert evaluation over local input files and prints the
//! results as JSON. This is the offline stand-in for the transports the
//! production system wires in around the same library crates.

use std::path::{Path, PathBuf};

use chrono::{Duration, Utc};
use clap::{Parser, Subcommand};
use coastwatch_alert::LogDispatcher;
use coastwatch_report_models::{GeoPoint, Report};

#[derive(Parser)]
#[command(name = "coastwatch", about = "Hazard signal analysis pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single piece of text for hazard signals
    Analyze {
        /// Text to analyze
        text: String,
    },
    /// Aggregate a report file into hotspots
    Hotspots {
        /// Report file (.json array or .csv with header row)
        reports: PathBuf,
        /// Aggregation window in hours
        #[arg(long, default_value_t = coastwatch_hotspot::DEFAULT_WINDOW_HOURS)]
        window_hours: i64,
    },
    /// Assess risk at a location from an active-hazard file
    Risk {
        /// Query latitude
        #[arg(long)]
        lat: f64,
        /// Query longitude
        #[arg(long)]
        lng: f64,
        /// Active hazards file (.json array)
        hazards: PathBuf,
        /// Assessment timeframe in hours (reserved; does not yet alter scoring)
        #[arg(long, default_value_t = coastwatch_risk::DEFAULT_TIMEFRAME_HOURS)]
        timeframe_hours: u32,
    },
    /// Score a social post file and keep hazard-relevant posts
    Social {
        /// Posts file (.json array)
        posts: PathBuf,
    },
    /// Evaluate a report file against the early-warning policy
    Alerts {
        /// Report file (.json array or .csv with header row)
        reports: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { text } => {
            let analysis = coastwatch_nlp::analyze(&text);
            print_json(&analysis)?;
        }
        Commands::Hotspots {
            reports,
            window_hours,
        } => {
            let now = Utc::now();
            let stored = ingest_reports(&reports, now)?;
            let hotspots = coastwatch_hotspot::generate_hotspots(
                &stored,
                Duration::hours(window_hours),
                now,
            );
            print_json(&hotspots)?;
        }
        Commands::Risk {
            lat,
            lng,
            hazards,
            timeframe_hours,
        } => {
            let active = coastwatch_ingest::files::load_hazards_json(&hazards)?;
            let assessment = coastwatch_risk::assess_risk(
                GeoPoint::new(lat, lng),
                &active,
                timeframe_hours,
            );
            print_json(&assessment)?;
        }
        Commands::Social { posts } => {
            let raw = coastwatch_ingest::files::load_posts_json(&posts)?;
            let scored = coastwatch_social::process_many(raw);
            print_json(&scored)?;
        }
        Commands::Alerts { reports } => {
            let now = Utc::now();
            let stored = ingest_reports(&reports, now)?;

            let mut warnings = Vec::new();
            for report in &stored {
                match coastwatch_alert::evaluate(report, &LogDispatcher, now) {
                    Ok(Some(warning)) => warnings.push(warning),
                    Ok(None) => {}
                    // Dispatch failure does not stop evaluating the rest.
                    Err(err) => log::error!("Failed to dispatch warning: {err}"),
                }
            }
            print_json(&warnings)?;
        }
    }

    Ok(())
}

/// Loads a report file (JSON or CSV by extension) and runs every
/// submission through ingestion, skipping the invalid ones.
fn ingest_reports(
    path: &Path,
    now: chrono::DateTime<Utc>,
) -> Result<Vec<Report>, Box<dyn std::error::Error>> {
    let submissions = if path.extension().is_some_and(|ext| ext == "csv") {
        coastwatch_ingest::files::load_reports_csv(path)?
    } else {
        coastwatch_ingest::files::load_reports_json(path)?
    };

    let total = submissions.len();
    let reports: Vec<Report> = submissions
        .into_iter()
        .filter_map(|new| match coastwatch_ingest::build_report(new, now) {
            Ok(report) => Some(report),
            Err(err) => {
                log::warn!("Skipping invalid submission: {err}");
                None
            }
        })
        .collect();

    log::info!("Ingested {} of {total} submissions", reports.len());
    Ok(reports)
}

/// Pretty-prints a serializable value to stdout.
fn print_json<T: serde::Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
