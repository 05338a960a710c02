//! Soil-type crop recommendation lookup table.
//!
//! Maps a plot's soil type string to the crop guidance shown in the
//! vegetation panel. Lookup is exact-match on the eight known soil types;
//! anything else gets the "not available" fallback.

/// A single soil-type entry with its recommended crops.
#[derive(Debug, Clone, Copy)]
pub struct CropEntry {
    pub soil_type: &'static str,
    pub recommendation: &'static str,
}

/// Generic note appended when the recommendation text is short enough to
/// leave room for it (under `IRRIGATION_NOTE_LIMIT` characters).
pub const IRRIGATION_NOTE: &str =
    "Ensure proper irrigation and fertilization based on crop requirements.";

/// Recommendation length below which the irrigation note is appended.
pub const IRRIGATION_NOTE_LIMIT: usize = 80;

/// Fallback when the soil type has no table entry.
pub const NO_CROP_INFO: &str = "Crop information not available for this soil type.";

// ============================================================================
// EMBEDDED RECOMMENDATION TABLE
// ============================================================================

static CROP_TABLE: &[CropEntry] = &[
    CropEntry {
        soil_type: "Sandy Loam",
        recommendation: "Best for Carrots, Tomatoes, Potatoes, Peanuts, Watermelon.",
    },
    CropEntry {
        soil_type: "Clay",
        recommendation: "Ideal for Rice, Wheat, Soybeans, and Cabbage.",
    },
    CropEntry {
        soil_type: "Loamy",
        recommendation: "Highly suitable for Maize, Barley, Sugarcane, and Vegetables.",
    },
    CropEntry {
        soil_type: "Sandy",
        recommendation: "Perfect for Cactus, Peanuts, and Root Vegetables.",
    },
    CropEntry {
        soil_type: "Clay Loam",
        recommendation: "Best for Corn, Sunflower, Pulses, and Legumes.",
    },
    CropEntry {
        soil_type: "Silty Clay",
        recommendation: "Suitable for Rice, Berries, and Leafy Greens.",
    },
    CropEntry {
        soil_type: "Loamy Sand",
        recommendation: "Supports Carrots, Melons, and Tomatoes.",
    },
    CropEntry {
        soil_type: "Sandy Clay",
        recommendation: "Great for Peppers, Tomatoes, and Beans.",
    },
];

/// Crop guidance derived from a soil type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropGuidance {
    /// Recommended crops, or the `NO_CROP_INFO` fallback.
    pub recommendation: &'static str,
    /// Generic irrigation note, present when the recommendation is short.
    pub instructions: Option<&'static str>,
}

/// Look up crop guidance for a soil type.
pub fn crop_guidance(soil_type: &str) -> CropGuidance {
    let recommendation = CROP_TABLE
        .iter()
        .find(|entry| entry.soil_type == soil_type)
        .map(|entry| entry.recommendation)
        .unwrap_or(NO_CROP_INFO);

    let instructions = if recommendation.len() < IRRIGATION_NOTE_LIMIT {
        Some(IRRIGATION_NOTE)
    } else {
        None
    };

    CropGuidance {
        recommendation,
        instructions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_soil_types() {
        let guidance = crop_guidance("Sandy Loam");
        assert!(guidance.recommendation.contains("Carrots"));

        let guidance = crop_guidance("Clay");
        assert!(guidance.recommendation.contains("Rice"));

        let guidance = crop_guidance("Silty Clay");
        assert!(guidance.recommendation.contains("Leafy Greens"));
    }

    #[test]
    fn test_unknown_soil_type_falls_back() {
        assert_eq!(crop_guidance("Volcanic Ash").recommendation, NO_CROP_INFO);
        assert_eq!(crop_guidance("---").recommendation, NO_CROP_INFO);
        assert_eq!(crop_guidance("").recommendation, NO_CROP_INFO);
    }

    #[test]
    fn test_short_recommendations_carry_irrigation_note() {
        // Every table entry is under the limit, so the note always rides along
        for entry in CROP_TABLE {
            let guidance = crop_guidance(entry.soil_type);
            assert_eq!(guidance.instructions, Some(IRRIGATION_NOTE));
        }
        // The fallback text is short too
        assert_eq!(crop_guidance("Peat").instructions, Some(IRRIGATION_NOTE));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        // Matches the source data exactly; "sandy loam" is not an entry
        assert_eq!(crop_guidance("sandy loam").recommendation, NO_CROP_INFO);
    }
}
