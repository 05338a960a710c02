//! GIS & location details section.

use crate::dashboard::view_models::{DashboardView, MapPanel};

/// Generate the GIS details section, including the map state.
pub fn generate(view: &DashboardView) -> String {
    let mut lines = Vec::new();
    lines.push("## GIS & Location Details".to_string());
    lines.push(String::new());

    match &view.map {
        MapPanel::Placeholder => lines.push("*Map will load here*".to_string()),
        MapPanel::Embed(url) => lines.push(format!("Map: {}", url)),
    }
    lines.push(String::new());

    let gis = &view.gis;
    lines.push(format!("**Plot ID**: {}", display_or_dash(&gis.plot_id)));
    lines.push(format!("**Location**: {}", gis.location));
    lines.push(format!("**Latitude**: {}", gis.latitude));
    lines.push(format!("**Longitude**: {}", gis.longitude));
    lines.push(format!("**NDVI**: {}", gis.ndvi));
    lines.push(format!("**NDMI**: {}", gis.ndmi));
    lines.push(format!("**Remarks**: {}", gis.remarks));

    lines.join("\n")
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() {
        "---"
    } else {
        value
    }
}
