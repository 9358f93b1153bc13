use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::tui_color;
use crate::severity::SeverityPolicy;

/// Render the severity legend
pub fn render(frame: &mut Frame, area: Rect, policy: &SeverityPolicy) {
    let block = Block::default()
        .title(format!(" PM2.5 ({}) ", policy.name()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines: Vec<Line> = policy
        .legend()
        .into_iter()
        .map(|(range, band)| {
            Line::from(vec![
                Span::styled("  ██ ", Style::default().fg(tui_color(band.background))),
                Span::styled(format!("{:<8}", range), Style::default().fg(Color::Yellow)),
                Span::styled(band.name, Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
