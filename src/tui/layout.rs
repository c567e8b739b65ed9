//! Layout definitions for the TUI
//!
//! Splits the screen into the header tab bar, the active view, and the
//! status bar, plus the dashboard's internal regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level layout regions
pub struct AppLayout {
    /// Header with view tabs
    pub header: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: vertical[0],
            main: vertical[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout for the dashboard view
pub struct DashboardLayout {
    /// Balance / income / expense cards
    pub cards: Rect,
    /// Balance-remaining gauge (and overspend alert)
    pub balance_gauge: Rect,
    /// Expense-by-category bar chart
    pub category_chart: Rect,
    /// Income vs expense bar chart
    pub comparison_chart: Rect,
    /// Savings goal gauge
    pub goal: Rect,
}

impl DashboardLayout {
    /// Calculate dashboard layout
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Cards
                Constraint::Length(3), // Balance gauge
                Constraint::Min(8),    // Charts
                Constraint::Length(4), // Goal
            ])
            .split(area);

        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[2]);

        Self {
            cards: rows[0],
            balance_gauge: rows[1],
            category_chart: charts[0],
            comparison_chart: charts[1],
            goal: rows[3],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
