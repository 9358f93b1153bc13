pub mod legend;
pub mod station_panel;
pub mod world_map;

use ratatui::style::Color;

use crate::severity;

/// Convert a band color for terminal output
pub fn tui_color(color: severity::Color) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}
