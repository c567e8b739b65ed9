//! Transaction register view
//!
//! Table of transactions, newest first, honoring the kind filter.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::EntryKind;
use crate::tui::app::App;

/// Render the transaction register
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let palette = app.palette();
    let transactions = app.visible_transactions();

    let title = format!(" Transactions ({}) ", app.filter.label());
    let block = Block::default()
        .title(title)
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border(true));

    if transactions.is_empty() {
        let text = Paragraph::new("No transactions found. Press 'a' to add one.")
            .block(block)
            .style(palette.hint());
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(2),  // Kind marker
        Constraint::Length(12), // Date
        Constraint::Length(14), // Category
        Constraint::Length(16), // Amount
        Constraint::Min(10),    // Note
    ];

    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("Date").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Note").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(palette.title())
    .height(1);

    let rows: Vec<Row> = transactions
        .iter()
        .map(|txn| {
            let negative = txn.kind == EntryKind::Expense;
            let marker = if negative { "-" } else { "+" };
            let signed = format!("{}{}", marker, txn.amount);

            Row::new(vec![
                Cell::from(marker).style(palette.amount(negative)),
                Cell::from(txn.date.format("%Y-%m-%d").to_string()).style(palette.text()),
                Cell::from(txn.category.clone()).style(palette.text()),
                Cell::from(signed).style(palette.amount(negative)),
                Cell::from(txn.note.clone()).style(palette.hint()),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}
