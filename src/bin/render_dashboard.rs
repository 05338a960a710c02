//! Render Dashboard
//!
//! Loads the plot collection, steps the selection through every eligible
//! plot, and prints the rendered dashboard for each, plus the
//! pre-selection placeholder layout.
//!
//! Run with: cargo run --bin render_dashboard [path/to/geo_data.json]

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use agro_dashboard::dashboard::generator::DashboardGenerator;
use agro_dashboard::dashboard::selection::PlotSelection;
use agro_dashboard::dashboard::types::Plot;
use agro_dashboard::data::PlotStore;

const DEFAULT_DATA_PATH: &str = "data/geo_data.json";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string());

    let store = PlotStore::load(&path)?;
    let generator = DashboardGenerator::new();

    // Pre-selection layout: placeholder record, dashed map, "---" cards
    println!("{}\n", generator.generate(&Plot::placeholder()));

    // Walk the full cycle once, the way repeated START presses would
    let ids = store.eligible_ids();
    let mut selection = PlotSelection::fresh();
    for _ in 0..ids.len() {
        match selection.advance_in_place(ids) {
            Ok(selected) => {
                info!(index = selected.index, plot_id = %selected.plot_id, "selected plot");
                let plot = store.plot_or_placeholder(&selected.plot_id);
                println!("{}\n", generator.generate(&plot));
            }
            Err(err) => {
                // Empty collection: nothing to show, not a failure
                info!(%err, "cycling skipped");
                break;
            }
        }
    }

    Ok(())
}
