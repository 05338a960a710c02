//! NPK threshold classification for the dashboard.
//!
//! Maps raw nutrient readings (mg/kg) onto qualitative bands using fixed
//! inclusive lower bounds, plus the management advice text shown in the
//! nutrient detail cards.

use crate::dashboard::types::{NpkStatus, NutrientKind};

// ============================================================================
// Thresholds (inclusive lower bounds)
// ============================================================================

/// Nitrogen: Good ≥ 40, Average ≥ 20, else Bad.
pub const NITROGEN_GOOD: f64 = 40.0;
pub const NITROGEN_AVERAGE: f64 = 20.0;

/// Phosphorous: Good ≥ 25, Average ≥ 15, else Bad.
pub const PHOSPHOROUS_GOOD: f64 = 25.0;
pub const PHOSPHOROUS_AVERAGE: f64 = 15.0;

/// Potassium: Good ≥ 20, Average ≥ 10, else Bad.
pub const POTASSIUM_GOOD: f64 = 20.0;
pub const POTASSIUM_AVERAGE: f64 = 10.0;

impl NutrientKind {
    /// (good, average) inclusive lower bounds for this nutrient.
    pub fn thresholds(&self) -> (f64, f64) {
        match self {
            NutrientKind::Nitrogen => (NITROGEN_GOOD, NITROGEN_AVERAGE),
            NutrientKind::Phosphorous => (PHOSPHOROUS_GOOD, PHOSPHOROUS_AVERAGE),
            NutrientKind::Potassium => (POTASSIUM_GOOD, POTASSIUM_AVERAGE),
        }
    }
}

// ============================================================================
// Classification
// ============================================================================

/// Classify a nutrient reading into a qualitative band.
///
/// | kind        | Good ≥ | Average ≥ | else |
/// |-------------|--------|-----------|------|
/// | Nitrogen    | 40     | 20        | Bad  |
/// | Phosphorous | 25     | 15        | Bad  |
/// | Potassium   | 20     | 10        | Bad  |
///
/// Pure and total: never returns `Unknown` for a known kind.
pub fn classify_npk(value: f64, kind: NutrientKind) -> NpkStatus {
    let (good, average) = kind.thresholds();
    if value >= good {
        NpkStatus::Good
    } else if value >= average {
        NpkStatus::Average
    } else {
        NpkStatus::Bad
    }
}

/// Classify by nutrient name rather than enum.
///
/// Unrecognized names yield `NpkStatus::Unknown` rather than failing; only
/// the three known nutrient names are ever passed in practice, so this
/// branch exists for totality, not for expected traffic.
pub fn classify_npk_named(value: f64, kind_name: &str) -> NpkStatus {
    match NutrientKind::from_name(kind_name) {
        Some(kind) => classify_npk(value, kind),
        None => NpkStatus::Unknown,
    }
}

// ============================================================================
// Management Advice
// ============================================================================

/// Advice text shown under each nutrient's status in the detail card.
pub fn npk_advice(kind: NutrientKind, status: NpkStatus) -> &'static str {
    match (kind, status) {
        (NutrientKind::Nitrogen, NpkStatus::Good) => {
            "Nitrogen levels are optimal for plant growth."
        }
        (NutrientKind::Nitrogen, NpkStatus::Average) => {
            "Nitrogen levels are moderate. Consider adding organic compost."
        }
        (NutrientKind::Nitrogen, _) => {
            "Nitrogen levels are low. Add nitrogen-rich fertilizers."
        }
        (NutrientKind::Phosphorous, NpkStatus::Good) => {
            "Phosphorous levels are optimal for root development."
        }
        (NutrientKind::Phosphorous, NpkStatus::Average) => {
            "Phosphorous levels are moderate. Consider adding bone meal."
        }
        (NutrientKind::Phosphorous, _) => {
            "Phosphorous levels are low. Add phosphorous-rich fertilizers."
        }
        (NutrientKind::Potassium, NpkStatus::Good) => {
            "Potassium levels are optimal for overall plant health."
        }
        (NutrientKind::Potassium, NpkStatus::Average) => {
            "Potassium levels are moderate. Consider adding wood ash."
        }
        (NutrientKind::Potassium, _) => {
            "Potassium levels are low. Add potassium-rich fertilizers."
        }
    }
}
