//! Dashboard Generator
//!
//! Main entry point for rendering a dashboard snapshot.
//! Orchestrates the section generators to produce a complete markdown
//! document for the currently selected plot (or the placeholder layout).
//!
//! Public API (consumed by render_dashboard.rs and the integration tests):
//! - DashboardGenerator::new() -> Self
//! - DashboardGenerator::generate(plot) -> String

use chrono::Utc;

use crate::dashboard::sections::{gis, npk, soil_cards, vegetation};
use crate::dashboard::types::Plot;
use crate::dashboard::view_builder::build_dashboard_view;
use crate::dashboard::view_models::DashboardView;

/// Dashboard generator - stateless markdown generator.
pub struct DashboardGenerator;

impl DashboardGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Build the view for a plot and render it as a markdown document.
    pub fn generate(&self, plot: &Plot) -> String {
        let view = build_dashboard_view(plot);
        self.render(&view)
    }

    /// Render an already-built view.
    pub fn render(&self, view: &DashboardView) -> String {
        let mut sections = Vec::new();

        sections.push(generate_header(view));
        sections.push(gis::generate(view));
        sections.push(soil_cards::generate(view));
        sections.push(npk::generate(view));
        sections.push(vegetation::generate(view));
        sections.push(generate_footer());

        sections.join("\n\n")
    }
}

impl Default for DashboardGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn generate_header(view: &DashboardView) -> String {
    let title = if view.gis.plot_id.is_empty() {
        "# Plot Dashboard".to_string()
    } else {
        format!("# Plot Dashboard - {}", view.gis.plot_id)
    };
    format!(
        "{}\n\n*Generated: {}*",
        title,
        Utc::now().format("%Y-%m-%d %H:%M UTC")
    )
}

fn generate_footer() -> String {
    "Agro zapp @ 2025".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::types::Plot;

    #[test]
    fn test_placeholder_document_has_all_sections() {
        let doc = DashboardGenerator::new().generate(&Plot::placeholder());
        assert!(doc.starts_with("# Plot Dashboard"));
        assert!(doc.contains("## GIS & Location Details"));
        assert!(doc.contains("## Soil & Weather"));
        assert!(doc.contains("## NPK Values of Soil"));
        assert!(doc.contains("## Vegetation Details"));
        assert!(doc.contains("Agro zapp @ 2025"));
    }
}
