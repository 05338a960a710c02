//! Dashboard View component.
//!
//! Derives the display state for a monitored plot and renders it as
//! markdown sections.
//!
//! ## Pieces
//! 1. Status classification - NPK readings to qualitative bands
//! 2. Plot cycling - circular selection over the eligible plot ids
//! 3. Crop lookup - soil type to recommended crops
//! 4. View building - plot record to card/panel display state
//! 5. Sections - markdown rendering of each dashboard region

pub mod classify;
pub mod crops;
pub mod generator;
pub mod sections;
pub mod selection;
pub mod types;
pub mod view_builder;
pub mod view_models;

pub use classify::{classify_npk, classify_npk_named, npk_advice};
pub use generator::DashboardGenerator;
pub use selection::{PlotSelection, SelectedPlot, SelectionError};
pub use types::{NpkStatus, NutrientKind, Plot};
pub use view_builder::build_dashboard_view;
pub use view_models::DashboardView;
