//! Data Loading and Management
//!
//! Loads the static plot collection (geo_data.json) once at startup and
//! serves lookups for the dashboard. Records are read-only after load;
//! the `plot_id` uniqueness invariant is checked here so the rest of the
//! crate never has to.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use rustc_hash::FxHashMap;
use tracing::info;

use crate::dashboard::types::Plot;

/// In-memory plot collection with an id index.
#[derive(Debug)]
pub struct PlotStore {
    /// Plots in source order (drives the cycle order).
    plots: Vec<Plot>,

    /// plot_id -> position in `plots`
    index: FxHashMap<String, usize>,

    /// Ids eligible for cycling: source order, empty id excluded.
    eligible_ids: Vec<String>,
}

impl PlotStore {
    /// Load the collection from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading plot collection from {}", path.display()))?;
        let plots: Vec<Plot> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing plot collection from {}", path.display()))?;
        Self::from_plots(plots)
    }

    /// Build a store from already-parsed records, enforcing id uniqueness.
    pub fn from_plots(plots: Vec<Plot>) -> Result<Self> {
        let mut index = FxHashMap::default();
        for (pos, plot) in plots.iter().enumerate() {
            if index.insert(plot.plot_id.clone(), pos).is_some() {
                bail!("duplicate plot_id in source collection: {:?}", plot.plot_id);
            }
        }

        let eligible_ids: Vec<String> = plots
            .iter()
            .map(|p| p.plot_id.clone())
            .filter(|id| !id.is_empty())
            .collect();

        info!(
            plots = plots.len(),
            eligible = eligible_ids.len(),
            "plot collection loaded"
        );

        Ok(PlotStore {
            plots,
            index,
            eligible_ids,
        })
    }

    pub fn len(&self) -> usize {
        self.plots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plots.is_empty()
    }

    /// Ids the cycler walks, in source order.
    pub fn eligible_ids(&self) -> &[String] {
        &self.eligible_ids
    }

    /// Look up a plot by id.
    pub fn plot(&self, plot_id: &str) -> Option<&Plot> {
        self.index.get(plot_id).map(|&pos| &self.plots[pos])
    }

    /// Look up a plot by id, falling back to the placeholder record when
    /// absent. The dashboard never fails on an unknown id; it just shows
    /// "---" values.
    pub fn plot_or_placeholder(&self, plot_id: &str) -> Cow<'_, Plot> {
        match self.plot(plot_id) {
            Some(plot) => Cow::Borrowed(plot),
            None => Cow::Owned(Plot::placeholder()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::types::PLACEHOLDER;
    use approx::assert_relative_eq;

    const SAMPLE_JSON: &str = r#"[
        {
            "plot_id": "plot_1",
            "gis_data": {"type": "Point", "coordinates": [75.59, 28.36]},
            "soil_type": "Sandy Loam",
            "weather": "Sunny",
            "npk_levels": {"N": 45, "P": 28, "K": 22},
            "moisture": 32.5,
            "temperature": 29.4,
            "ph_value": 6.8,
            "vegetation": {"NDVI": 0.62, "NDMI": 0.21},
            "ideal_crops": ["Tomatoes", "Carrots"]
        },
        {
            "plot_id": "plot_2",
            "gis_data": {"type": "Point", "coordinates": [75.61, 28.37]},
            "soil_type": "Clay",
            "weather": "Cloudy",
            "npk_levels": {"N": 18, "P": 12, "K": 8},
            "moisture": 41.0,
            "temperature": 27.1,
            "ph_value": 7.3,
            "vegetation": {"NDVI": 0.48, "NDMI": 0.33},
            "ideal_crops": ["Rice"],
            "remarks": "Waterlogged in monsoon"
        }
    ]"#;

    fn sample_store() -> PlotStore {
        let plots: Vec<Plot> = serde_json::from_str(SAMPLE_JSON).unwrap();
        PlotStore::from_plots(plots).unwrap()
    }

    #[test]
    fn test_load_and_index() {
        let store = sample_store();
        assert_eq!(store.len(), 2);
        assert_eq!(store.eligible_ids(), &["plot_1", "plot_2"]);

        let plot = store.plot("plot_2").unwrap();
        assert_eq!(plot.soil_type, "Clay");
        assert_eq!(plot.remarks.as_deref(), Some("Waterlogged in monsoon"));
        assert_relative_eq!(plot.npk_levels.k, 8.0);
        assert_relative_eq!(plot.vegetation.ndvi, 0.48);
    }

    #[test]
    fn test_unknown_id_falls_back_to_placeholder() {
        let store = sample_store();
        assert!(store.plot("plot_99").is_none());

        let fallback = store.plot_or_placeholder("plot_99");
        assert!(fallback.is_placeholder());
        assert_eq!(fallback.soil_type, PLACEHOLDER);
    }

    #[test]
    fn test_duplicate_plot_id_rejected() {
        let plots: Vec<Plot> = serde_json::from_str(SAMPLE_JSON).unwrap();
        let mut doubled = plots.clone();
        doubled.extend(plots);
        let err = PlotStore::from_plots(doubled).unwrap_err();
        assert!(err.to_string().contains("duplicate plot_id"));
    }

    #[test]
    fn test_empty_ids_excluded_from_cycle() {
        let mut plots: Vec<Plot> = serde_json::from_str(SAMPLE_JSON).unwrap();
        plots.push(Plot::placeholder());
        let store = PlotStore::from_plots(plots).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.eligible_ids(), &["plot_1", "plot_2"]);
    }
}
