use ratatui::prelude::*;
use ratatui::symbols::Marker as CanvasMarker;
use ratatui::widgets::canvas::{Canvas, Circle, Map, MapResolution};
use ratatui::widgets::{Block, Borders};

use super::tui_color;
use crate::map::Marker;
use crate::severity::BLACK;
use crate::tui::viewport::Viewport;

/// Render the map with one colored dot and label per marker
pub fn render(
    frame: &mut Frame,
    area: Rect,
    viewport: &Viewport,
    markers: &[Marker],
    selected: Option<usize>,
) {
    let block = Block::default()
        .title(format!(
            " Map  {:.4}, {:.4}  z{:.0} ",
            viewport.center().lat,
            viewport.center().lng,
            viewport.zoom()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));

    let (width, _) = viewport.span();
    let radius = width * 0.008;

    let canvas = Canvas::default()
        .block(block)
        .marker(CanvasMarker::Braille)
        .x_bounds(viewport.x_bounds())
        .y_bounds(viewport.y_bounds())
        .paint(move |ctx| {
            ctx.draw(&Map {
                color: Color::DarkGray,
                resolution: MapResolution::High,
            });
            ctx.layer();

            // Later markers are drawn on top, same as the web widget
            for (i, marker) in markers.iter().enumerate() {
                let (x, y) = (marker.position.lng, marker.position.lat);

                if selected == Some(i) {
                    ctx.draw(&Circle {
                        x,
                        y,
                        radius: radius * 2.0,
                        color: Color::White,
                    });
                }

                ctx.draw(&Circle {
                    x,
                    y,
                    radius,
                    color: tui_color(marker.background),
                });
            }
            ctx.layer();

            for marker in markers {
                let fg = tui_color(marker.foreground.unwrap_or(BLACK));
                let bg = tui_color(marker.background);
                ctx.print(
                    marker.position.lng,
                    marker.position.lat,
                    Span::styled(marker.label.clone(), Style::default().fg(fg).bg(bg).bold()),
                );
            }
        });

    frame.render_widget(canvas, area);
}
