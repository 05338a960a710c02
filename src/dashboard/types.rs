//! Shared data types for the plot dashboard.
//!
//! Data sources:
//! - Plot records: geo_data.json (one object per monitored plot)
//! - Selection state: transient, owned by the view layer, reset on reload

use serde::{Deserialize, Serialize};

/// Display placeholder for qualitative fields with no data.
pub const PLACEHOLDER: &str = "---";

/// GeoJSON-style point attached to a plot.
/// Coordinates follow the source convention: [longitude, latitude].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GisPoint {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: [f64; 2],
}

impl GisPoint {
    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

impl Default for GisPoint {
    fn default() -> Self {
        GisPoint {
            kind: "Point".to_string(),
            coordinates: [0.0, 0.0],
        }
    }
}

/// Soil macronutrient readings (mg/kg).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NpkLevels {
    #[serde(rename = "N")]
    pub n: f64,
    #[serde(rename = "P")]
    pub p: f64,
    #[serde(rename = "K")]
    pub k: f64,
}

/// Remote-sensing vegetation indices, treated as opaque numerics.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vegetation {
    #[serde(rename = "NDVI")]
    pub ndvi: f64,
    #[serde(rename = "NDMI")]
    pub ndmi: f64,
}

/// A georeferenced unit of farmland with its sensor and derived metrics.
///
/// Loaded once at startup and never mutated; `plot_id` is unique within
/// the source collection (enforced at load time by `PlotStore`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plot {
    pub plot_id: String,
    pub gis_data: GisPoint,
    pub soil_type: String,
    pub weather: String,
    pub npk_levels: NpkLevels,
    pub moisture: f64,
    pub temperature: f64,
    pub ph_value: f64,
    pub vegetation: Vegetation,
    pub ideal_crops: Vec<String>,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl Plot {
    /// Default record shown before any plot is selected or when a
    /// requested `plot_id` is absent from the collection.
    pub fn placeholder() -> Self {
        Plot {
            plot_id: String::new(),
            gis_data: GisPoint::default(),
            soil_type: PLACEHOLDER.to_string(),
            weather: PLACEHOLDER.to_string(),
            npk_levels: NpkLevels::default(),
            moisture: 0.0,
            temperature: 0.0,
            ph_value: 0.0,
            vegetation: Vegetation::default(),
            ideal_crops: vec![PLACEHOLDER.to_string()],
            remarks: None,
        }
    }

    /// True when this is the placeholder record rather than real plot data.
    pub fn is_placeholder(&self) -> bool {
        self.plot_id.is_empty()
    }
}

// ============================================================================
// Nutrient Kinds
// ============================================================================

/// The three soil macronutrients tracked per plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NutrientKind {
    Nitrogen,
    Phosphorous,
    Potassium,
}

impl NutrientKind {
    pub const ALL: [NutrientKind; 3] = [
        NutrientKind::Nitrogen,
        NutrientKind::Phosphorous,
        NutrientKind::Potassium,
    ];

    /// Parse a kind from its display name. Returns `None` for anything
    /// outside the three known nutrients; callers that must stay total
    /// map this to `NpkStatus::Unknown`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Nitrogen" => Some(NutrientKind::Nitrogen),
            "Phosphorous" => Some(NutrientKind::Phosphorous),
            "Potassium" => Some(NutrientKind::Potassium),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NutrientKind::Nitrogen => "Nitrogen",
            NutrientKind::Phosphorous => "Phosphorous",
            NutrientKind::Potassium => "Potassium",
        }
    }

    /// Chemical symbol used in card headings ("Nitrogen (N)").
    pub fn symbol(&self) -> &'static str {
        match self {
            NutrientKind::Nitrogen => "N",
            NutrientKind::Phosphorous => "P",
            NutrientKind::Potassium => "K",
        }
    }

    /// Reading for this nutrient from a plot's NPK levels.
    pub fn level_of(&self, levels: &NpkLevels) -> f64 {
        match self {
            NutrientKind::Nitrogen => levels.n,
            NutrientKind::Phosphorous => levels.p,
            NutrientKind::Potassium => levels.k,
        }
    }
}

// ============================================================================
// Nutrient Status Bands
// ============================================================================

/// Qualitative band for a nutrient reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum NpkStatus {
    Good,
    Average,
    Bad,
    /// Sentinel for classification requests naming an unrecognized
    /// nutrient. Unreachable through the `NutrientKind` path.
    #[default]
    Unknown,
}

impl NpkStatus {
    pub fn label(&self) -> &'static str {
        match self {
            NpkStatus::Good => "Good",
            NpkStatus::Average => "Average",
            NpkStatus::Bad => "Bad",
            NpkStatus::Unknown => "Unknown",
        }
    }

    /// Traffic-light marker shown next to the status label.
    pub fn indicator(&self) -> &'static str {
        match self {
            NpkStatus::Good => "\u{1F7E2}",    // green circle
            NpkStatus::Average => "\u{1F7E0}", // orange circle
            NpkStatus::Bad => "\u{1F534}",     // red circle
            NpkStatus::Unknown => "",
        }
    }

    /// Status with marker, e.g. "Good 🟢".
    pub fn display_text(&self) -> String {
        match self {
            NpkStatus::Unknown => "Unknown".to_string(),
            other => format!("{} {}", other.label(), other.indicator()),
        }
    }
}
