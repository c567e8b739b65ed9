//! Transaction entry dialog
//!
//! Modal form for adding a transaction: kind toggle, amount, category
//! picker, date, and optional note. The category list always reflects the
//! selected kind; flipping the kind resets the pick to the first entry.

use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{EntryKind, Money, Transaction};
use crate::services::TransactionService;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Which field is currently focused in the transaction form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionField {
    #[default]
    Kind,
    Amount,
    Category,
    Date,
    Note,
}

impl TransactionField {
    /// Next field for Tab navigation
    pub fn next(self) -> Self {
        match self {
            Self::Kind => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Date,
            Self::Date => Self::Note,
            Self::Note => Self::Kind,
        }
    }

    /// Previous field for Shift+Tab navigation
    pub fn prev(self) -> Self {
        match self {
            Self::Kind => Self::Note,
            Self::Amount => Self::Kind,
            Self::Category => Self::Amount,
            Self::Date => Self::Category,
            Self::Note => Self::Date,
        }
    }
}

/// State for the transaction form dialog
#[derive(Debug, Clone)]
pub struct TransactionFormState {
    /// Currently focused field
    pub focused_field: TransactionField,
    /// Income or expense
    pub kind: EntryKind,
    /// Index into the kind's category vocabulary
    pub category_index: usize,
    /// Amount input (whole rupiah)
    pub amount_input: TextInput,
    /// Date input (YYYY-MM-DD)
    pub date_input: TextInput,
    /// Note input
    pub note_input: TextInput,
    /// Validation error to display
    pub error_message: Option<String>,
}

impl Default for TransactionFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionFormState {
    /// Create a fresh form: expense kind, today's date
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            focused_field: TransactionField::default(),
            kind: EntryKind::default(),
            category_index: 0,
            amount_input: TextInput::new(),
            date_input: TextInput::with_content(today.format("%Y-%m-%d").to_string()),
            note_input: TextInput::new(),
            error_message: None,
        }
    }

    /// Flip income/expense; the category pick resets because the
    /// vocabulary changes with the kind
    pub fn toggle_kind(&mut self) {
        self.kind = self.kind.toggled();
        self.category_index = 0;
    }

    /// The category name currently picked
    pub fn selected_category(&self) -> &'static str {
        let categories = self.kind.categories();
        categories[self.category_index.min(categories.len() - 1)]
    }

    /// Move the category pick
    pub fn cycle_category(&mut self, forward: bool) {
        let len = self.kind.categories().len();
        self.category_index = if forward {
            (self.category_index + 1) % len
        } else {
            (self.category_index + len - 1) % len
        };
    }

    /// The input behind the focused field, if it is a text field
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            TransactionField::Amount => Some(&mut self.amount_input),
            TransactionField::Date => Some(&mut self.date_input),
            TransactionField::Note => Some(&mut self.note_input),
            TransactionField::Kind | TransactionField::Category => None,
        }
    }

    /// Parse the form into transaction parts, without persisting
    pub fn build(&self) -> Result<(EntryKind, Money, String, NaiveDate, String), String> {
        let amount = Money::parse(self.amount_input.value())
            .map_err(|e| format!("Amount: {}", e))?;
        let date = NaiveDate::parse_from_str(self.date_input.value().trim(), "%Y-%m-%d")
            .map_err(|_| "Date must be YYYY-MM-DD".to_string())?;

        Ok((
            self.kind,
            amount,
            self.selected_category().to_string(),
            date,
            self.note_input.value().trim().to_string(),
        ))
    }
}

/// Render the transaction form dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = app.palette();
    let form = &app.transaction_form;
    let area = centered_rect_fixed(46, 11, frame.area());

    frame.render_widget(Clear, area);

    let field_label = |field: TransactionField, label: &str| -> Span<'static> {
        if form.focused_field == field {
            Span::styled(
                format!("{:<10}", label),
                palette.title().add_modifier(Modifier::UNDERLINED),
            )
        } else {
            Span::styled(format!("{:<10}", label), palette.hint())
        }
    };

    let kind_value = match form.kind {
        EntryKind::Income => Span::styled("Income ", palette.amount(false)),
        EntryKind::Expense => Span::styled("Expense", palette.amount(true)),
    };

    let mut lines = vec![
        Line::from(vec![
            field_label(TransactionField::Kind, "Kind"),
            kind_value,
            Span::styled("  (space to flip)", palette.hint()),
        ]),
        line_with_input(
            field_label(TransactionField::Amount, "Amount"),
            &form.amount_input,
            &palette,
            form.focused_field == TransactionField::Amount,
        ),
        Line::from(vec![
            field_label(TransactionField::Category, "Category"),
            Span::styled(
                format!("< {} >", form.selected_category()),
                if form.focused_field == TransactionField::Category {
                    palette.text().add_modifier(Modifier::BOLD)
                } else {
                    palette.text()
                },
            ),
        ]),
        line_with_input(
            field_label(TransactionField::Date, "Date"),
            &form.date_input,
            &palette,
            form.focused_field == TransactionField::Date,
        ),
        line_with_input(
            field_label(TransactionField::Note, "Note"),
            &form.note_input,
            &palette,
            form.focused_field == TransactionField::Note,
        ),
        Line::default(),
    ];

    if let Some(error) = &form.error_message {
        lines.push(Line::from(Span::styled(
            error.clone(),
            palette.amount(true),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Tab: next field  Enter: save  Esc: cancel",
            palette.hint(),
        )));
    }

    let block = Block::default()
        .title(" Add Transaction ")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border(true));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn line_with_input(
    label: Span<'static>,
    input: &TextInput,
    palette: &crate::tui::style::Palette,
    focused: bool,
) -> Line<'static> {
    let mut spans = vec![label];
    spans.extend(input.line(palette, focused).spans);
    Line::from(spans)
}

/// Handle a key while the transaction dialog is open
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
        }
        KeyCode::Tab | KeyCode::Down => {
            app.transaction_form.focused_field = app.transaction_form.focused_field.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.transaction_form.focused_field = app.transaction_form.focused_field.prev();
        }
        KeyCode::Enter => save(app),
        KeyCode::Char(' ') if app.transaction_form.focused_field == TransactionField::Kind => {
            app.transaction_form.toggle_kind();
        }
        KeyCode::Left | KeyCode::Right
            if app.transaction_form.focused_field == TransactionField::Kind =>
        {
            app.transaction_form.toggle_kind();
        }
        KeyCode::Left if app.transaction_form.focused_field == TransactionField::Category => {
            app.transaction_form.cycle_category(false);
        }
        KeyCode::Right if app.transaction_form.focused_field == TransactionField::Category => {
            app.transaction_form.cycle_category(true);
        }
        KeyCode::Left => {
            if let Some(input) = app.transaction_form.focused_input() {
                input.move_left();
            }
        }
        KeyCode::Right => {
            if let Some(input) = app.transaction_form.focused_input() {
                input.move_right();
            }
        }
        KeyCode::Backspace => {
            if let Some(input) = app.transaction_form.focused_input() {
                input.backspace();
            }
            app.transaction_form.error_message = None;
        }
        KeyCode::Char(c) => {
            if let Some(input) = app.transaction_form.focused_input() {
                input.insert(c);
                app.transaction_form.error_message = None;
            }
        }
        _ => {}
    }
}

/// Validate, persist, and close; validation failures stay in the dialog
fn save(app: &mut App) {
    let parts = match app.transaction_form.build() {
        Ok(parts) => parts,
        Err(message) => {
            app.transaction_form.error_message = Some(message);
            return;
        }
    };

    let (kind, amount, category, date, note) = parts;
    let result: Result<Transaction, _> =
        TransactionService::new(&mut app.storage).add(kind, amount, &category, date, &note);

    match result {
        Ok(txn) => {
            app.close_dialog();
            app.set_status(format!("Added {} {}", txn.category, txn.amount));
        }
        Err(e) => {
            app.transaction_form.error_message = Some(e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_kind_resets_category() {
        let mut form = TransactionFormState::new();
        form.category_index = 3;
        form.toggle_kind();
        assert_eq!(form.category_index, 0);
    }

    #[test]
    fn test_category_cycles_within_kind() {
        let mut form = TransactionFormState::new();
        let len = form.kind.categories().len();
        for _ in 0..len {
            form.cycle_category(true);
        }
        assert_eq!(form.category_index, 0);

        form.cycle_category(false);
        assert_eq!(form.category_index, len - 1);
    }

    #[test]
    fn test_build_parses_amount_and_date() {
        let mut form = TransactionFormState::new();
        form.amount_input = TextInput::with_content("2000000");
        form.date_input = TextInput::with_content("2024-01-02");

        let (kind, amount, category, date, _) = form.build().unwrap();
        assert_eq!(kind, EntryKind::Expense);
        assert_eq!(amount, Money::new(2000000));
        assert_eq!(category, "Makanan");
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn test_build_rejects_bad_amount() {
        let mut form = TransactionFormState::new();
        form.amount_input = TextInput::with_content("abc");
        assert!(form.build().is_err());
    }

    #[test]
    fn test_build_rejects_bad_date() {
        let mut form = TransactionFormState::new();
        form.amount_input = TextInput::with_content("100");
        form.date_input = TextInput::with_content("02/01/2024");
        assert!(form.build().is_err());
    }

    #[test]
    fn test_field_cycle_round_trips() {
        let mut field = TransactionField::default();
        for _ in 0..5 {
            field = field.next();
        }
        assert_eq!(field, TransactionField::default());
        assert_eq!(field.next().prev(), field);
    }
}
