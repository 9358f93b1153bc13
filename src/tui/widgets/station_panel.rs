use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::tui_color;
use crate::map::Marker;

/// Render the banner and the popup of the selected marker
pub fn render(
    frame: &mut Frame,
    area: Rect,
    banner: Option<&str>,
    marker_count: usize,
    selected: Option<&Marker>,
) {
    let block = Block::default()
        .title(" Stations ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Updated: ", Style::default().fg(Color::Gray)),
            Span::styled(banner.unwrap_or("-").to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("Markers: ", Style::default().fg(Color::Gray)),
            Span::styled(marker_count.to_string(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
    ];

    match selected {
        Some(marker) => {
            let fg = marker.foreground.map(tui_color).unwrap_or(Color::Black);
            lines.push(Line::from(Span::styled(
                marker.popup.title.clone(),
                Style::default().bold().fg(Color::White),
            )));
            lines.push(Line::from(Span::styled(
                marker.popup.body.clone(),
                Style::default().fg(Color::Gray),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("PM2.5: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    format!(" {} ", marker.label),
                    Style::default().fg(fg).bg(tui_color(marker.background)).bold(),
                ),
            ]));
            if let Some(updated_at) = &marker.popup.updated_at {
                lines.push(Line::from(vec![
                    Span::styled("Reported: ", Style::default().fg(Color::Gray)),
                    Span::raw(updated_at.clone()),
                ]));
            }
            lines.push(Line::from(Span::styled(
                format!("{:.4}, {:.4}", marker.position.lat, marker.position.lng),
                Style::default().fg(Color::DarkGray),
            )));
        }
        None if marker_count == 0 => {
            lines.push(Line::from(Span::styled(
                "Loading map...",
                Style::default().fg(Color::Yellow),
            )));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "Press Tab to select a station",
                Style::default().fg(Color::Gray),
            )));
        }
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
