//! Dashboard summary: balance/income/expense cards and the remaining gauge

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::reports;
use crate::tui::app::App;
use crate::tui::style::Palette;

/// Render the three summary cards
pub fn render_cards(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let totals = reports::totals(app.storage.transactions.list());

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    render_card(
        frame,
        &palette,
        cards[0],
        "Balance",
        totals.balance,
        totals.balance.is_negative(),
    );
    render_card(frame, &palette, cards[1], "Income", totals.income, false);
    render_card(frame, &palette, cards[2], "Expense", totals.expense, true);
}

fn render_card(
    frame: &mut Frame,
    palette: &Palette,
    area: Rect,
    title: &str,
    amount: Money,
    negative: bool,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border(false));

    let line = Line::from(Span::styled(amount.to_string(), palette.amount(negative)));
    frame.render_widget(
        Paragraph::new(line)
            .block(block)
            .alignment(ratatui::layout::Alignment::Center),
        area,
    );
}

/// Render the share-of-income-remaining gauge, with the overspend alert in
/// the title when spending exceeds income
pub fn render_balance_gauge(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let transactions = app.storage.transactions.list();
    let percent = reports::balance_percent(transactions);
    let overspent = reports::overspend_alert(transactions);

    let (title, gauge_color) = if overspent {
        (" Remaining — spending exceeds income! ", palette.warning)
    } else {
        (" Remaining ", palette.accent)
    };

    let block = Block::default()
        .title(title)
        .title_style(if overspent {
            Style::default().fg(palette.warning)
        } else {
            palette.title()
        })
        .borders(Borders::ALL)
        .border_style(palette.border(false));

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(gauge_color))
        .label(format!("{:.0}% of income left", percent))
        .percent(percent.round() as u16);

    frame.render_widget(gauge, area);
}
