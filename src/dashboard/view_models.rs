//! View models for the plot dashboard.
//!
//! Structured display state built from a `Plot` (or the placeholder record)
//! by `view_builder`. These carry everything the rendering layer needs;
//! nothing here reaches back into the data store.

use serde::Serialize;

use crate::dashboard::types::{NpkStatus, PLACEHOLDER};

/// ArcGIS web-map embed shown once a plot is selected.
pub const MAP_EMBED_URL: &str =
    "https://www.arcgis.com/apps/Embed/index.html?webmap=c8ea84aa917b46c996e79cb1f5680055";

/// Fixed site label for the GIS details panel.
pub const SITE_LOCATION: &str = "BITS Pilani";

/// Complete display state for one render of the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub gis: GisPanel,
    pub map: MapPanel,
    pub cards: MetricCards,
    pub npk_chart: Vec<NpkChartRow>,
    pub npk_details: Vec<NpkDetail>,
    pub vegetation: VegetationPanel,
    pub inert: InertPanels,
}

// ============================================================================
// GIS & Map
// ============================================================================

/// GIS and location details panel.
#[derive(Debug, Clone, Serialize)]
pub struct GisPanel {
    pub plot_id: String,
    pub location: String,
    pub latitude: String,
    pub longitude: String,
    pub ndvi: String,
    pub ndmi: String,
    pub remarks: String,
}

/// Map area: a dashed placeholder until a plot is chosen, then the embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "url")]
pub enum MapPanel {
    Placeholder,
    Embed(String),
}

impl MapPanel {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, MapPanel::Placeholder)
    }
}

// ============================================================================
// Metric Cards
// ============================================================================

/// The four single-value cards across the top of the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct MetricCards {
    pub soil_type: String,
    pub ph_value: String,
    pub moisture: String,
    pub temperature: String,
    pub weather: String,
}

impl Default for MetricCards {
    fn default() -> Self {
        MetricCards {
            soil_type: PLACEHOLDER.to_string(),
            ph_value: PLACEHOLDER.to_string(),
            moisture: PLACEHOLDER.to_string(),
            temperature: PLACEHOLDER.to_string(),
            weather: PLACEHOLDER.to_string(),
        }
    }
}

// ============================================================================
// NPK Chart & Details
// ============================================================================

/// One bar-chart row: the selected plot's three nutrient readings keyed by
/// plot id. The chart holds at most one row per render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NpkChartRow {
    pub name: String,
    pub nitrogen: f64,
    pub phosphorous: f64,
    pub potassium: f64,
}

/// Detail card for a single nutrient: reading, band, and advice.
#[derive(Debug, Clone, Serialize)]
pub struct NpkDetail {
    /// Heading, e.g. "Nitrogen (N)".
    pub heading: String,
    pub value: String,
    pub status: NpkStatus,
    /// Status with traffic-light marker, e.g. "Good 🟢".
    pub status_text: String,
    pub advice: String,
}

// ============================================================================
// Vegetation
// ============================================================================

/// Vegetation panel: crop guidance derived from soil type.
#[derive(Debug, Clone, Serialize)]
pub struct VegetationPanel {
    pub crop_recommendation: String,
    pub instructions: Option<String>,
}

// ============================================================================
// Inert Panels
// ============================================================================

/// Static text for the prediction panels. Present in the view so the layout
/// is complete, but none of them is wired to any behavior.
#[derive(Debug, Clone, Serialize)]
pub struct InertPanels {
    pub fertilizer_prediction: &'static str,
    pub disease_prediction: &'static str,
    pub insect_classification: &'static str,
}

impl Default for InertPanels {
    fn default() -> Self {
        InertPanels {
            fertilizer_prediction: "No prediction yet.",
            disease_prediction: "No result yet.",
            insect_classification: "No result yet.",
        }
    }
}
