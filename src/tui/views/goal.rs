//! Savings goal gauge
//!
//! Shows progress toward the goal from the current balance; when no goal
//! is set the panel shows a hint instead.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::reports;
use crate::tui::app::App;

/// Render the goal panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();

    let block = Block::default()
        .title(" Savings Goal ")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border(false));

    let Some(goal) = app.storage.goal.get() else {
        let text = Paragraph::new("No goal set. Press 'g' to set one.")
            .block(block)
            .style(palette.hint());
        frame.render_widget(text, area);
        return;
    };

    let progress = reports::goal_progress(app.storage.transactions.list(), goal);
    let label = format!(
        "{}: {} of {} ({:.0}%)",
        goal.name, progress.saved, goal.target, progress.percent
    );

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(palette.income))
        .label(label)
        .percent(progress.percent.round() as u16);

    frame.render_widget(gauge, area);
}
