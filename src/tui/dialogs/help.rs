//! Help dialog listing the key bindings

use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect;

const BINDINGS: &[(&str, &str)] = &[
    ("q", "Quit"),
    ("?", "Toggle this help"),
    ("1 / 2", "Dashboard / Register view"),
    ("Tab", "Switch view"),
    ("a", "Add transaction"),
    ("d", "Delete selected transaction"),
    ("f", "Cycle filter (all / income / expense)"),
    ("g", "Set savings goal"),
    ("G", "Clear savings goal"),
    ("t", "Toggle light/dark theme"),
    ("j / k", "Move selection"),
];

/// Render the help overlay
pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.palette();
    let area = centered_rect(50, 60, frame.area());

    frame.render_widget(Clear, area);

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("  {:<8}", key), palette.title()),
                Span::styled((*action).to_string(), palette.text()),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Help ")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border(true));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
