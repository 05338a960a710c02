//! Agro Plot Dashboard
//!
//! Derives and renders the display state of an agricultural monitoring
//! dashboard from a static collection of geo-tagged plot records.
//!
//! Structure:
//! - `data`: Plot collection loading and id-indexed lookup
//! - `dashboard`: classification, cyclic selection, view building, sections
//!
//! The two pieces of real logic are `dashboard::classify` (NPK readings to
//! qualitative bands) and `dashboard::selection` (circular plot cycling);
//! everything else is display-state assembly around them.

pub mod dashboard;
pub mod data;

// Re-export commonly used types
pub use dashboard::{
    build_dashboard_view, classify_npk, classify_npk_named, DashboardGenerator, DashboardView,
    NpkStatus, NutrientKind, Plot, PlotSelection, SelectionError,
};
pub use data::PlotStore;
