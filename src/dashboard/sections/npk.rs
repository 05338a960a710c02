//! NPK chart and nutrient detail section.
//!
//! Renders the bar-chart series as a table plus one detail block per
//! nutrient: reading, status band with marker, and management advice.

use crate::dashboard::view_models::DashboardView;

/// Generate the NPK section.
pub fn generate(view: &DashboardView) -> String {
    let mut lines = Vec::new();
    lines.push("## NPK Values of Soil".to_string());
    lines.push(String::new());

    if view.npk_chart.is_empty() {
        lines.push("No data available for the chart.".to_string());
    } else {
        lines.push("| Plot | Nitrogen | Phosphorous | Potassium |".to_string());
        lines.push("|------|----------|-------------|-----------|".to_string());
        for row in &view.npk_chart {
            lines.push(format!(
                "| {} | {} | {} | {} |",
                row.name, row.nitrogen, row.phosphorous, row.potassium
            ));
        }
    }

    lines.push(String::new());
    lines.push("### Details - NPK Values".to_string());
    for detail in &view.npk_details {
        lines.push(String::new());
        lines.push(format!("**{}**", detail.heading));
        lines.push(format!("Value: {}", detail.value));
        lines.push(format!("Status: {}", detail.status_text));
        lines.push(detail.advice.clone());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::types::{GisPoint, NpkLevels, Plot, Vegetation};
    use crate::dashboard::view_builder::build_dashboard_view;

    fn plot_with_npk(n: f64, p: f64, k: f64) -> Plot {
        Plot {
            plot_id: "plot_1".to_string(),
            gis_data: GisPoint::default(),
            soil_type: "Clay".to_string(),
            weather: "Cloudy".to_string(),
            npk_levels: NpkLevels { n, p, k },
            moisture: 40.0,
            temperature: 24.0,
            ph_value: 7.1,
            vegetation: Vegetation { ndvi: 0.5, ndmi: 0.3 },
            ideal_crops: vec!["Rice".to_string()],
            remarks: None,
        }
    }

    #[test]
    fn test_chart_table_and_statuses() {
        let view = build_dashboard_view(&plot_with_npk(42.0, 10.0, 25.0));
        let section = generate(&view);
        assert!(section.contains("| plot_1 | 42 | 10 | 25 |"));
        assert!(section.contains("Status: Good \u{1F7E2}"));
        assert!(section.contains("Status: Bad \u{1F534}"));
    }

    #[test]
    fn test_empty_chart_message() {
        let view = build_dashboard_view(&Plot::placeholder());
        let section = generate(&view);
        assert!(section.contains("No data available for the chart."));
    }
}
