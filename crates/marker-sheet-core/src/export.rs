use crate::model::SheetLayout;
use serde_json::{Value, json};

/// Layout as JSON: page geometry plus one entry per marker, all lengths in millimetres.
pub fn to_json(layout: &SheetLayout) -> Value {
    let markers: Vec<Value> = layout
        .assignments
        .iter()
        .map(|a| {
            json!({
                "code": a.code,
                "x": a.placement.x,
                "y": a.placement.y,
                "w": layout.marker_width,
            })
        })
        .collect();
    json!({
        "paper": layout.paper.name(),
        "page": {"w": layout.page_width, "h": layout.page_height},
        "marker_width": layout.marker_width,
        "mode": layout.mode.0,
        "markers": markers,
    })
}
