//! Lane colours
//!
//! Lanes are coloured by `lane id mod palette size`, so colours repeat once
//! the palette is exhausted.

use crate::artifacts::graph::lane::LaneId;
use colored::Color;

/// Stroke and fill colours of the SVG renderer
pub const SVG_PALETTE: [&str; 8] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#17becf",
];

/// Terminal colours of the text renderer
pub const TERMINAL_PALETTE: [Color; 6] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
];

pub fn svg_color(lane: LaneId) -> &'static str {
    SVG_PALETTE[lane.color_index(SVG_PALETTE.len())]
}

pub fn terminal_color(lane: LaneId) -> Color {
    TERMINAL_PALETTE[lane.color_index(TERMINAL_PALETTE.len())]
}
