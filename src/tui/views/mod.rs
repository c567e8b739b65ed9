//! TUI views
//!
//! The dashboard (summary cards, charts, goal gauge) and the transaction
//! register, plus the header tab bar and status bar.

pub mod charts;
pub mod goal;
pub mod register;
pub mod status_bar;
pub mod summary;

use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::{AppLayout, DashboardLayout};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = app.palette();
    frame.render_widget(
        Block::default().style(ratatui::style::Style::default().bg(palette.bg)),
        frame.area(),
    );

    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header);

    match app.active_view {
        ActiveView::Dashboard => {
            let dashboard = DashboardLayout::new(layout.main);
            summary::render_cards(frame, app, dashboard.cards);
            summary::render_balance_gauge(frame, app, dashboard.balance_gauge);
            charts::render_category_chart(frame, app, dashboard.category_chart);
            charts::render_comparison_chart(frame, app, dashboard.comparison_chart);
            goal::render(frame, app, dashboard.goal);
        }
        ActiveView::Register => {
            register::render(frame, app, layout.main);
        }
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render the header tab bar
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();

    let tab = |view: ActiveView, label: &str| -> Span<'static> {
        if app.active_view == view {
            Span::styled(
                format!(" {} ", label),
                palette.title().add_modifier(Modifier::REVERSED),
            )
        } else {
            Span::styled(format!(" {} ", label), palette.hint())
        }
    };

    let line = Line::from(vec![
        Span::styled(" kantong ", palette.title()),
        Span::raw(" "),
        tab(ActiveView::Dashboard, "1:Dashboard"),
        tab(ActiveView::Register, "2:Register"),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog.clone() {
        ActiveDialog::AddTransaction => {
            dialogs::transaction::render(frame, app);
        }
        ActiveDialog::SetGoal => {
            dialogs::goal::render(frame, app);
        }
        ActiveDialog::ConfirmDelete(_) => {
            dialogs::confirm::render(frame, app, "Delete selected transaction?");
        }
        ActiveDialog::Help => {
            dialogs::help::render(frame, app);
        }
        ActiveDialog::None => {}
    }
}
