//! Status bar
//!
//! Shows the transient status message when one is live, otherwise key
//! hints, plus the active theme and filter on the right.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();

    let left = match app.status_message() {
        Some(message) => Span::styled(format!(" {}", message), palette.title()),
        None => Span::styled(
            " a:Add  d:Delete  f:Filter  g:Goal  t:Theme  ?:Help  q:Quit",
            palette.hint(),
        ),
    };

    let right = format!(
        "filter: {}  theme: {} ",
        app.filter.label(),
        app.theme.as_str()
    );

    let pad = (area.width as usize)
        .saturating_sub(left.content.chars().count())
        .saturating_sub(right.chars().count());

    let line = Line::from(vec![
        left,
        Span::raw(" ".repeat(pad)),
        Span::styled(right, palette.hint()),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
