//! Soil metric cards section.
//!
//! The four single-value cards across the top of the dashboard, plus the
//! weather reading.

use crate::dashboard::view_models::DashboardView;

/// Generate the metric cards section.
pub fn generate(view: &DashboardView) -> String {
    let cards = &view.cards;
    let mut lines = Vec::new();
    lines.push("## Soil & Weather".to_string());
    lines.push(String::new());
    lines.push(format!("**Soil Type**: {}", cards.soil_type));
    lines.push(format!("**pH Value**: {}", cards.ph_value));
    lines.push(format!("**Moisture**: {}", cards.moisture));
    lines.push(format!("**Temperature**: {}", cards.temperature));
    lines.push(format!("**Weather**: {}", cards.weather));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::types::Plot;
    use crate::dashboard::view_builder::build_dashboard_view;

    #[test]
    fn test_placeholder_cards_render_dashes() {
        let section = generate(&build_dashboard_view(&Plot::placeholder()));
        assert!(section.contains("**Soil Type**: ---"));
        assert!(section.contains("**Temperature**: ---"));
    }
}
