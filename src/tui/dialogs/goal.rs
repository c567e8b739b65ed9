//! Savings goal dialog
//!
//! Modal form for setting (or replacing) the savings goal: a name and a
//! target amount in whole rupiah.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::services::GoalService;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Which field is focused in the goal form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GoalField {
    #[default]
    Name,
    Target,
}

impl GoalField {
    /// The other field
    pub fn toggled(self) -> Self {
        match self {
            Self::Name => Self::Target,
            Self::Target => Self::Name,
        }
    }
}

/// State for the goal form dialog
#[derive(Debug, Clone, Default)]
pub struct GoalFormState {
    /// Currently focused field
    pub focused_field: GoalField,
    /// Goal name input
    pub name_input: TextInput,
    /// Target amount input
    pub target_input: TextInput,
    /// Validation error to display
    pub error_message: Option<String>,
}

impl GoalFormState {
    /// Create a fresh form, pre-filled from the current goal when one exists
    pub fn new(current: Option<(&str, Money)>) -> Self {
        match current {
            Some((name, target)) => Self {
                name_input: TextInput::with_content(name),
                target_input: TextInput::with_content(target.units().to_string()),
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    /// The input behind the focused field
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            GoalField::Name => &mut self.name_input,
            GoalField::Target => &mut self.target_input,
        }
    }
}

/// Render the goal form dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = app.palette();
    let form = &app.goal_form;
    let area = centered_rect_fixed(44, 8, frame.area());

    frame.render_widget(Clear, area);

    let field_label = |field: GoalField, label: &str| -> Span<'static> {
        if form.focused_field == field {
            Span::styled(
                format!("{:<8}", label),
                palette.title().add_modifier(Modifier::UNDERLINED),
            )
        } else {
            Span::styled(format!("{:<8}", label), palette.hint())
        }
    };

    let mut name_line = vec![field_label(GoalField::Name, "Name")];
    name_line.extend(
        form.name_input
            .line(&palette, form.focused_field == GoalField::Name)
            .spans,
    );

    let mut target_line = vec![field_label(GoalField::Target, "Target")];
    target_line.extend(
        form.target_input
            .line(&palette, form.focused_field == GoalField::Target)
            .spans,
    );

    let mut lines = vec![
        Line::from(name_line),
        Line::from(target_line),
        Line::default(),
    ];

    if let Some(error) = &form.error_message {
        lines.push(Line::from(Span::styled(
            error.clone(),
            palette.amount(true),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Tab: switch field  Enter: save  Esc: cancel",
            palette.hint(),
        )));
    }

    let block = Block::default()
        .title(" Savings Goal ")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border(true));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Handle a key while the goal dialog is open
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
            app.goal_form.focused_field = app.goal_form.focused_field.toggled();
        }
        KeyCode::Enter => save(app),
        KeyCode::Left => app.goal_form.focused_input().move_left(),
        KeyCode::Right => app.goal_form.focused_input().move_right(),
        KeyCode::Backspace => {
            app.goal_form.focused_input().backspace();
            app.goal_form.error_message = None;
        }
        KeyCode::Char(c) => {
            app.goal_form.focused_input().insert(c);
            app.goal_form.error_message = None;
        }
        _ => {}
    }
}

fn save(app: &mut App) {
    let target = match Money::parse(app.goal_form.target_input.value()) {
        Ok(target) => target,
        Err(e) => {
            app.goal_form.error_message = Some(format!("Target: {}", e));
            return;
        }
    };
    let name = app.goal_form.name_input.value().trim().to_string();

    match GoalService::new(&mut app.storage).set(&name, target) {
        Ok(goal) => {
            app.close_dialog();
            app.set_status(format!("Goal set: {} ({})", goal.name, goal.target));
        }
        Err(e) => {
            app.goal_form.error_message = Some(e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefilled_from_current_goal() {
        let form = GoalFormState::new(Some(("Laptop", Money::new(10000000))));
        assert_eq!(form.name_input.value(), "Laptop");
        assert_eq!(form.target_input.value(), "10000000");
    }

    #[test]
    fn test_empty_without_goal() {
        let form = GoalFormState::new(None);
        assert!(form.name_input.value().is_empty());
        assert!(form.target_input.value().is_empty());
    }

    #[test]
    fn test_field_toggle() {
        assert_eq!(GoalField::Name.toggled(), GoalField::Target);
        assert_eq!(GoalField::Target.toggled(), GoalField::Name);
    }
}
