//! View builder - converts a plot record to display state.
//!
//! Transforms a `Plot` (selected or placeholder) into the `DashboardView`
//! structure the rendering layer consumes. All qualitative fallbacks
//! ("---", "No additional remarks") are applied here so the sections never
//! special-case missing data.

use crate::dashboard::classify::{classify_npk, npk_advice};
use crate::dashboard::crops::crop_guidance;
use crate::dashboard::types::{NutrientKind, Plot, PLACEHOLDER};
use crate::dashboard::view_models::*;

/// Build the complete dashboard view for a plot.
///
/// The placeholder record produces the pre-selection layout: "---" cards,
/// dashed map placeholder, and an empty chart.
pub fn build_dashboard_view(plot: &Plot) -> DashboardView {
    let selected = !plot.is_placeholder();

    DashboardView {
        gis: build_gis_panel(plot, selected),
        map: if selected {
            MapPanel::Embed(MAP_EMBED_URL.to_string())
        } else {
            MapPanel::Placeholder
        },
        cards: build_cards(plot, selected),
        npk_chart: build_chart_rows(plot, selected),
        npk_details: build_npk_details(plot, selected),
        vegetation: build_vegetation_panel(plot),
        inert: InertPanels::default(),
    }
}

fn build_gis_panel(plot: &Plot, selected: bool) -> GisPanel {
    let (latitude, longitude) = if selected {
        (
            format!("{}", plot.gis_data.latitude()),
            format!("{}", plot.gis_data.longitude()),
        )
    } else {
        (PLACEHOLDER.to_string(), PLACEHOLDER.to_string())
    };

    GisPanel {
        plot_id: plot.plot_id.clone(),
        location: SITE_LOCATION.to_string(),
        latitude,
        longitude,
        ndvi: fmt_metric(plot.vegetation.ndvi, selected),
        ndmi: fmt_metric(plot.vegetation.ndmi, selected),
        remarks: plot
            .remarks
            .clone()
            .unwrap_or_else(|| "No additional remarks".to_string()),
    }
}

fn build_cards(plot: &Plot, selected: bool) -> MetricCards {
    if !selected {
        return MetricCards::default();
    }
    MetricCards {
        soil_type: plot.soil_type.clone(),
        ph_value: format!("{}", plot.ph_value),
        moisture: format!("{}", plot.moisture),
        temperature: format!("{}", plot.temperature),
        weather: plot.weather.clone(),
    }
}

fn build_chart_rows(plot: &Plot, selected: bool) -> Vec<NpkChartRow> {
    if !selected {
        return Vec::new();
    }
    vec![NpkChartRow {
        name: plot.plot_id.clone(),
        nitrogen: plot.npk_levels.n,
        phosphorous: plot.npk_levels.p,
        potassium: plot.npk_levels.k,
    }]
}

fn build_npk_details(plot: &Plot, selected: bool) -> Vec<NpkDetail> {
    NutrientKind::ALL
        .iter()
        .map(|&kind| {
            let value = kind.level_of(&plot.npk_levels);
            let status = classify_npk(value, kind);
            NpkDetail {
                heading: format!("{} ({})", kind.label(), kind.symbol()),
                value: fmt_metric(value, selected),
                status,
                status_text: status.display_text(),
                advice: npk_advice(kind, status).to_string(),
            }
        })
        .collect()
}

fn build_vegetation_panel(plot: &Plot) -> VegetationPanel {
    let guidance = crop_guidance(&plot.soil_type);
    VegetationPanel {
        crop_recommendation: guidance.recommendation.to_string(),
        instructions: guidance.instructions.map(|s| s.to_string()),
    }
}

fn fmt_metric(value: f64, selected: bool) -> String {
    if selected {
        format!("{}", value)
    } else {
        PLACEHOLDER.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::types::{GisPoint, NpkLevels, NpkStatus, Vegetation};

    fn sample_plot() -> Plot {
        Plot {
            plot_id: "plot_3".to_string(),
            gis_data: GisPoint {
                kind: "Point".to_string(),
                coordinates: [75.59, 28.36],
            },
            soil_type: "Sandy Loam".to_string(),
            weather: "Sunny".to_string(),
            npk_levels: NpkLevels { n: 45.0, p: 16.0, k: 8.0 },
            moisture: 32.5,
            temperature: 29.0,
            ph_value: 6.8,
            vegetation: Vegetation { ndvi: 0.62, ndmi: 0.21 },
            ideal_crops: vec!["Tomatoes".to_string()],
            remarks: None,
        }
    }

    #[test]
    fn test_selected_plot_view() {
        let view = build_dashboard_view(&sample_plot());

        assert_eq!(view.map, MapPanel::Embed(MAP_EMBED_URL.to_string()));
        assert_eq!(view.cards.soil_type, "Sandy Loam");
        assert_eq!(view.cards.ph_value, "6.8");
        assert_eq!(view.gis.latitude, "28.36");
        assert_eq!(view.gis.longitude, "75.59");
        assert_eq!(view.gis.remarks, "No additional remarks");

        assert_eq!(view.npk_chart.len(), 1);
        assert_eq!(view.npk_chart[0].name, "plot_3");
        assert_eq!(view.npk_chart[0].nitrogen, 45.0);
    }

    #[test]
    fn test_npk_detail_statuses() {
        let view = build_dashboard_view(&sample_plot());
        let statuses: Vec<NpkStatus> = view.npk_details.iter().map(|d| d.status).collect();
        // N=45 good, P=16 average, K=8 bad
        assert_eq!(
            statuses,
            vec![NpkStatus::Good, NpkStatus::Average, NpkStatus::Bad]
        );
        assert_eq!(view.npk_details[0].heading, "Nitrogen (N)");
        assert!(view.npk_details[2].advice.contains("potassium-rich"));
    }

    #[test]
    fn test_placeholder_view() {
        let view = build_dashboard_view(&Plot::placeholder());

        assert!(view.map.is_placeholder());
        assert_eq!(view.cards.soil_type, PLACEHOLDER);
        assert_eq!(view.cards.moisture, PLACEHOLDER);
        assert_eq!(view.gis.latitude, PLACEHOLDER);
        assert!(view.npk_chart.is_empty());
        // Details exist but carry placeholder values
        assert_eq!(view.npk_details.len(), 3);
        assert_eq!(view.npk_details[0].value, PLACEHOLDER);
    }

    #[test]
    fn test_remarks_passthrough() {
        let mut plot = sample_plot();
        plot.remarks = Some("Northern slope, drains fast".to_string());
        let view = build_dashboard_view(&plot);
        assert_eq!(view.gis.remarks, "Northern slope, drains fast");
    }
}
