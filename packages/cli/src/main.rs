#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Inspection CLI for compact monthly facility payloads.
//!
//! Loads a payload JSON file produced by the external data pipeline,
//! runs it through the validation gate and query engine, and prints
//! month summaries, per-facility trends, inter-month change rankings,
//! or the render-layer JSON the map frontend would receive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use facility_map_heatmap::InteractionState;
use facility_map_heatmap::layers::{self, COLOR_RANGE};
use facility_map_heatmap::projection;
use facility_map_monthly::MonthlyStore;
use facility_map_monthly::queries::{DEFAULT_TOP_LIMIT, format_month_year};

#[derive(Parser)]
#[command(name = "facility_map_cli", about = "Monthly facility data inspection tool")]
struct Cli {
    /// Path to the compact monthly payload JSON file.
    #[arg(long)]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print facility count, total population, and top facilities for a month
    Summary {
        /// Month key (`YYYY-MM`); defaults to the latest month.
        #[arg(long)]
        month: Option<String>,
    },
    /// Print the population trend for one facility
    Trend {
        /// Facility identifier.
        #[arg(long)]
        facility: i64,
    },
    /// Rank facilities by population change between two months
    Changes {
        /// Earlier month key (`YYYY-MM`).
        #[arg(long)]
        from: String,
        /// Later month key (`YYYY-MM`).
        #[arg(long)]
        to: String,
    },
    /// Print the render layers for a month as JSON
    Layers {
        /// Month key (`YYYY-MM`); defaults to the latest month.
        #[arg(long)]
        month: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let json = std::fs::read_to_string(&cli.data)?;
    let store = MonthlyStore::from_json(&json)?;
    log::info!(
        "Loaded payload: {} facilities, {} months of data",
        store.payload().meta.facility_count,
        store.payload().meta.months.len()
    );

    match cli.command {
        Commands::Summary { month } => summary(&store, month.as_deref()),
        Commands::Trend { facility } => trend(&store, facility),
        Commands::Changes { from, to } => changes(&store, &from, &to),
        Commands::Layers { month } => print_layers(&store, month.as_deref())?,
    }

    Ok(())
}

fn summary(store: &MonthlyStore, month: Option<&str>) {
    let month = month.unwrap_or_else(|| store.latest_month());
    println!("{}", format_month_year(month));
    println!(
        "  {} facilities, {} total population",
        store.facility_count_for_month(month),
        store.total_population_for_month(month)
    );

    for (rank, facility) in store
        .top_facilities_for_month(month, DEFAULT_TOP_LIMIT)
        .iter()
        .enumerate()
    {
        println!(
            "  #{:<3} {:<44} {:>8}",
            rank + 1,
            facility.name,
            facility.population_count
        );
    }
}

fn trend(store: &MonthlyStore, facility_id: i64) {
    for point in store.facility_trend(facility_id) {
        println!("{}  {:>8}", point.month, point.population);
    }
}

fn changes(store: &MonthlyStore, from: &str, to: &str) {
    let changes = store.facilities_with_changes(from, to);
    if changes.is_empty() {
        println!("No population changes between {from} and {to}");
        return;
    }

    for change in changes {
        println!(
            "{:<44} {:>8} -> {:>8}  ({:+}, {:+.1}%)",
            change.facility.name,
            change.from_population,
            change.to_population,
            change.change,
            change.change_percent
        );
    }
}

fn print_layers(
    store: &MonthlyStore,
    month: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let month = month.unwrap_or_else(|| store.latest_month());
    let slice = store.facilities_for_month(month);
    let points = projection::project_slice(&slice);
    let render_layers = layers::build_layers(&points, &InteractionState::new(), &COLOR_RANGE);
    println!("{}", serde_json::to_string_pretty(&render_layers)?);
    Ok(())
}
