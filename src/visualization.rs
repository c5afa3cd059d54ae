//! Node and edge data for the graph widget. Layout is left to the widget.

use crate::formatting::{format_location_label_visual, format_switch_label_visual};
use crate::ta::TimedAutomaton;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisNode {
    pub id: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisEdge {
    pub id: usize,
    pub from: String,
    pub to: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct VisData {
    pub nodes: Vec<VisNode>,
    pub edges: Vec<VisEdge>,
}

/// Locations become nodes keyed by name, switches become edges keyed by their index.
pub fn map_ta_to_vis_data(ta: &TimedAutomaton) -> VisData {
    let nodes = ta
        .locations()
        .iter()
        .map(|loc| VisNode {
            id: loc.name().clone(),
            label: format_location_label_visual(loc),
            x: loc.x_coordinate(),
            y: loc.y_coordinate(),
        })
        .collect();
    let edges = ta
        .switches()
        .iter()
        .enumerate()
        .map(|(id, sw)| VisEdge {
            id,
            from: sw.source().clone(),
            to: sw.target().clone(),
            label: format_switch_label_visual(sw),
        })
        .collect();
    VisData { nodes, edges }
}
