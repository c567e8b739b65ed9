//! Delete confirmation dialog

use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render a yes/no confirmation prompt
pub fn render(frame: &mut Frame, app: &App, message: &str) {
    let palette = app.palette();
    let width = (message.len() as u16 + 6).max(30).min(frame.area().width);
    let area = centered_rect_fixed(width, 5, frame.area());

    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(message.to_string(), palette.text())),
        Line::default(),
        Line::from(Span::styled("y: confirm  n/Esc: cancel", palette.hint())),
    ];

    let block = Block::default()
        .title(" Confirm ")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border(true));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
