use std::io::{self, IsTerminal, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use tracing::{debug, error, info};

use crate::app::{AppState, MapConfig};
use crate::error::TuiError;
use crate::map::{Control, SharedRegistry};
use crate::severity::SeverityPolicy;

use super::viewport::Viewport;
use super::widgets::{legend, station_panel, world_map};

/// TUI application state
pub struct TuiApp {
    state: Arc<AppState>,
    terminal: Terminal<CrosstermBackend<Stdout>>,
    registry: SharedRegistry,
    policy: SeverityPolicy,
    viewport: Viewport,
    selected: Option<usize>,
    restored: bool,
}

impl TuiApp {
    /// Create a new TUI application
    pub fn new(
        state: Arc<AppState>,
        config: &MapConfig,
        policy: SeverityPolicy,
        registry: SharedRegistry,
    ) -> Result<Self, TuiError> {
        if !io::stdout().is_terminal() {
            return Err(TuiError::InitFailed);
        }

        // Set up terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            state,
            terminal,
            registry,
            policy,
            viewport: Viewport::new(config.center, config.zoom),
            selected: None,
            restored: false,
        })
    }

    /// Restore terminal state
    fn restore_terminal(&mut self) -> Result<(), TuiError> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Draw the TUI
    pub fn draw(&mut self) -> Result<(), TuiError> {
        // Snapshot so the render task is never blocked on a frame
        let (banner, markers, navigation) = {
            let registry = self.registry.read();
            (
                registry.banner().map(str::to_string),
                registry.markers().to_vec(),
                registry.controls().contains(&Control::Navigation),
            )
        };
        let selected = self.selected.filter(|&i| i < markers.len());
        let viewport = self.viewport;
        let policy = &self.policy;

        self.terminal.draw(|frame| {
            let area = frame.area();

            // Main layout: header, body, footer
            let main_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3), // Header
                    Constraint::Min(10),   // Body
                    Constraint::Length(3), // Footer
                ])
                .split(area);

            render_header(frame, main_chunks[0]);

            // Body layout: side panel (30%) + map (70%)
            let body_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
                .split(main_chunks[1]);

            let legend_height = policy.bands().len() as u16 + 2;
            let left_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(8), Constraint::Length(legend_height)])
                .split(body_chunks[0]);

            station_panel::render(
                frame,
                left_chunks[0],
                banner.as_deref(),
                markers.len(),
                selected.map(|i| &markers[i]),
            );
            legend::render(frame, left_chunks[1], policy);
            world_map::render(frame, body_chunks[1], &viewport, &markers, selected);

            render_footer(frame, main_chunks[2], navigation);
        })?;

        Ok(())
    }

    /// Handle keyboard input (non-blocking). Returns true when the user quits.
    pub fn handle_input(&mut self) -> Result<bool, TuiError> {
        if !event::poll(Duration::from_millis(50))? {
            return Ok(false);
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(false);
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    info!("Quit requested");
                    self.state.quit();
                    return Ok(true);
                }
                KeyCode::Tab | KeyCode::Char('n') => {
                    let count = self.registry.read().markers().len();
                    self.selected = next_selection(self.selected, count);
                    debug!(selected = ?self.selected, "Select next station");
                }
                code => {
                    if self.navigation_enabled() {
                        self.navigate(code);
                    }
                }
            }
        }

        Ok(false)
    }

    fn navigation_enabled(&self) -> bool {
        self.registry.read().controls().contains(&Control::Navigation)
    }

    /// Pan and zoom keys
    fn navigate(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => self.viewport.pan(-1, 0),
            KeyCode::Right => self.viewport.pan(1, 0),
            KeyCode::Up => self.viewport.pan(0, 1),
            KeyCode::Down => self.viewport.pan(0, -1),
            KeyCode::Char('+') | KeyCode::Char('=') => self.viewport.zoom_in(),
            KeyCode::Char('-') => self.viewport.zoom_out(),
            _ => return,
        }
        debug!(
            lng = self.viewport.center().lng,
            lat = self.viewport.center().lat,
            zoom = self.viewport.zoom(),
            "Viewport changed"
        );
    }

    /// Run cleanup on drop
    pub fn cleanup(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        if let Err(e) = self.restore_terminal() {
            error!(error = %e, "Failed to restore terminal");
        }
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Cycle through markers, wrapping around
fn next_selection(current: Option<usize>, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    match current {
        Some(i) if i + 1 < count => Some(i + 1),
        _ => Some(0),
    }
}

/// Render the header bar
fn render_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(" airmap ", Style::default().bold().fg(Color::Cyan)),
        Span::raw("| Calidad del aire - PM2.5"),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(title).block(block).centered();
    frame.render_widget(paragraph, area);
}

/// Render the footer with controls
fn render_footer(frame: &mut Frame, area: Rect, navigation: bool) {
    let mut spans = vec![
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(":quit  "),
        Span::styled("tab", Style::default().fg(Color::Yellow)),
        Span::raw(":next station  "),
    ];
    if navigation {
        spans.extend([
            Span::styled("arrows", Style::default().fg(Color::Yellow)),
            Span::raw(":pan  "),
            Span::styled("+/-", Style::default().fg(Color::Yellow)),
            Span::raw(":zoom"),
        ]);
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(Line::from(spans)).block(block).centered();
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_selection_wraps() {
        assert_eq!(next_selection(None, 3), Some(0));
        assert_eq!(next_selection(Some(0), 3), Some(1));
        assert_eq!(next_selection(Some(2), 3), Some(0));
    }

    #[test]
    fn test_next_selection_empty() {
        assert_eq!(next_selection(None, 0), None);
        assert_eq!(next_selection(Some(4), 0), None);
    }

    #[test]
    fn test_next_selection_after_clear() {
        // Selection past the end restarts from the first marker
        assert_eq!(next_selection(Some(7), 2), Some(0));
    }
}
