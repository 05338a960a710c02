//! Vegetation details section.

use crate::dashboard::view_models::DashboardView;

/// Generate the vegetation section with crop guidance.
pub fn generate(view: &DashboardView) -> String {
    let mut lines = Vec::new();
    lines.push("## Vegetation Details".to_string());
    lines.push(String::new());
    lines.push(format!(
        "**Ideal crops**: {}",
        view.vegetation.crop_recommendation
    ));
    if let Some(instructions) = &view.vegetation.instructions {
        lines.push(format!("*{}*", instructions));
    }
    lines.join("\n")
}
