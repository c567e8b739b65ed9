//! Dashboard charts
//!
//! Expense-by-category bars (one color per category, recycled) and the
//! income vs expense comparison. Bar values are scaled to thousands so
//! large rupiah amounts stay readable.

use ratatui::{
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::reports;
use crate::tui::app::App;
use crate::tui::style::{chart_color, Palette};

/// Render the expense-by-category bar chart
pub fn render_category_chart(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let groups = reports::expense_by_category(app.storage.transactions.list());

    let block = Block::default()
        .title(" Expenses by Category ")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border(false));

    if groups.is_empty() {
        render_empty(frame, area, block, &palette, "No expenses recorded.");
        return;
    }

    let bars: Vec<Bar> = groups
        .iter()
        .enumerate()
        .map(|(i, (name, amount))| {
            Bar::default()
                .label(Span::styled(name.clone(), palette.text()).into())
                .value(scaled(amount.units()))
                .text_value(amount.to_string())
                .style(Style::default().fg(chart_color(i)))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(12)
        .bar_gap(2)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

/// Render the income vs expense comparison chart
pub fn render_comparison_chart(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let totals = reports::totals(app.storage.transactions.list());

    let block = Block::default()
        .title(" Income vs Expense ")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border(false));

    let bars = [
        Bar::default()
            .label(Span::styled("Income", palette.text()).into())
            .value(scaled(totals.income.units()))
            .text_value(totals.income.to_string())
            .style(Style::default().fg(palette.income)),
        Bar::default()
            .label(Span::styled("Expense", palette.text()).into())
            .value(scaled(totals.expense.units()))
            .text_value(totals.expense.to_string())
            .style(Style::default().fg(palette.expense)),
    ];

    let chart = BarChart::default()
        .block(block)
        .bar_width(12)
        .bar_gap(2)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

fn render_empty(frame: &mut Frame, area: Rect, block: Block, palette: &Palette, text: &str) {
    frame.render_widget(
        Paragraph::new(text.to_string())
            .block(block)
            .style(palette.hint()),
        area,
    );
}

/// Whole rupiah to bar height; thousands, clamped up so small non-zero
/// amounts still show a bar
fn scaled(units: i64) -> u64 {
    let units = units.max(0) as u64;
    if units == 0 {
        0
    } else {
        (units / 1000).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled() {
        assert_eq!(scaled(0), 0);
        assert_eq!(scaled(500), 1);
        assert_eq!(scaled(5_000_000), 5_000);
        assert_eq!(scaled(-100), 0);
    }
}
