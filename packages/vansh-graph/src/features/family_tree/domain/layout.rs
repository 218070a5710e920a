//! Layout models - absolute coordinates for rendering

use serde::{Deserialize, Serialize};

use crate::shared::models::SerialKey;

/// Spacing constants for the placement pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutSettings {
    /// Horizontal size of one width unit
    pub unit_width: f64,
    /// Vertical distance between generations
    pub level_height: f64,
    /// Node box height; connectors start at its bottom edge
    pub node_height: f64,
    /// Gap between a parent's bottom edge and the children bus
    pub bus_gap: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            unit_width: 200.0,
            level_height: 150.0,
            node_height: 80.0,
            bus_gap: 30.0,
        }
    }
}

/// One placed node (x is the center, y the top edge)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedNode {
    pub ser_no: Option<SerialKey>,
    pub label: String,
    pub spouse_label: Option<String>,
    pub x: f64,
    pub y: f64,
    pub depth: usize,
    /// Subtree width in units
    pub units: usize,
}

/// Straight connector line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineSegment {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn is_vertical(&self) -> bool {
        self.x1 == self.x2
    }

    pub fn is_horizontal(&self) -> bool {
        self.y1 == self.y2
    }
}

/// Placed tree plus connectors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeLayout {
    pub nodes: Vec<PositionedNode>,
    pub connectors: Vec<LineSegment>,
    pub width: f64,
    pub height: f64,
}

impl TreeLayout {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, ser_no: &SerialKey) -> Option<&PositionedNode> {
        self.nodes.iter().find(|n| n.ser_no.as_ref() == Some(ser_no))
    }
}
