//! Event handler for the TUI
//!
//! Routes keyboard events to the active dialog when one is open, otherwise
//! to the global bindings.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::services::{GoalService, ThemeService, TransactionService};

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.on_tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }
    handle_normal_key(app, key)
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog.clone() {
        ActiveDialog::AddTransaction => dialogs::transaction::handle_key(app, key),
        ActiveDialog::SetGoal => dialogs::goal::handle_key(app, key),
        ActiveDialog::ConfirmDelete(id) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                let removed = TransactionService::new(&mut app.storage).remove(&id)?;
                app.close_dialog();
                app.clamp_selection();
                if removed {
                    app.set_status("Transaction deleted");
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.close_dialog();
            }
            _ => {}
        },
        ActiveDialog::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                app.close_dialog();
            }
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Tab => app.toggle_view(),
        KeyCode::Char('1') => app.active_view = ActiveView::Dashboard,
        KeyCode::Char('2') => app.active_view = ActiveView::Register,

        KeyCode::Char('a') => app.open_dialog(ActiveDialog::AddTransaction),
        KeyCode::Char('g') => app.open_dialog(ActiveDialog::SetGoal),
        KeyCode::Char('G') => {
            GoalService::new(&mut app.storage).clear()?;
            app.set_status("Goal cleared");
        }
        KeyCode::Char('f') => app.cycle_filter(),
        KeyCode::Char('t') => {
            let next = ThemeService::new(&mut app.storage).toggle()?;
            app.theme = next;
        }

        KeyCode::Char('d') | KeyCode::Delete => {
            if app.active_view == ActiveView::Register {
                if let Some(txn) = app.selected_transaction() {
                    app.open_dialog(ActiveDialog::ConfirmDelete(txn.id));
                }
            }
        }

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::KantongPaths;
    use crate::models::{EntryKind, Money, Theme};
    use crate::storage::Storage;
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;
    use tempfile::TempDir;

    fn create_test_app() -> (TempDir, App) {
        let temp_dir = TempDir::new().unwrap();
        let paths = KantongPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all();
        (temp_dir, App::new(storage))
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    #[test]
    fn test_quit_key() {
        let (_temp_dir, mut app) = create_test_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_theme_toggle_key_updates_app() {
        let (_temp_dir, mut app) = create_test_app();
        assert_eq!(app.theme, Theme::Dark);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme, Theme::Light);
    }

    #[test]
    fn test_delete_flow_with_confirmation() {
        let (_temp_dir, mut app) = create_test_app();
        TransactionService::new(&mut app.storage)
            .add(
                EntryKind::Expense,
                Money::new(2000000),
                "Makanan",
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                "",
            )
            .unwrap();
        app.active_view = ActiveView::Register;

        press(&mut app, KeyCode::Char('d'));
        assert!(matches!(
            app.active_dialog,
            ActiveDialog::ConfirmDelete(_)
        ));

        press(&mut app, KeyCode::Char('y'));
        assert!(!app.has_dialog());
        assert_eq!(app.storage.transactions.count(), 0);
    }

    #[test]
    fn test_delete_cancelled_keeps_transaction() {
        let (_temp_dir, mut app) = create_test_app();
        TransactionService::new(&mut app.storage)
            .add(
                EntryKind::Income,
                Money::new(100),
                "Gaji",
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                "",
            )
            .unwrap();
        app.active_view = ActiveView::Register;

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.storage.transactions.count(), 1);
    }

    #[test]
    fn test_add_dialog_saves_through_form() {
        let (_temp_dir, mut app) = create_test_app();

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.active_dialog, ActiveDialog::AddTransaction);

        // Focus moves: Kind -> Amount, then type an amount and save
        press(&mut app, KeyCode::Tab);
        for c in "2000000".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        assert_eq!(app.storage.transactions.count(), 1);
        let txn = &app.storage.transactions.list()[0];
        assert_eq!(txn.amount, Money::new(2000000));
        assert_eq!(txn.category, "Makanan");
    }

    #[test]
    fn test_add_dialog_keeps_error_on_bad_amount() {
        let (_temp_dir, mut app) = create_test_app();

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter); // empty amount

        assert_eq!(app.active_dialog, ActiveDialog::AddTransaction);
        assert!(app.transaction_form.error_message.is_some());
        assert_eq!(app.storage.transactions.count(), 0);
    }

    #[test]
    fn test_goal_dialog_saves() {
        let (_temp_dir, mut app) = create_test_app();

        press(&mut app, KeyCode::Char('g'));
        for c in "Laptop".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        for c in "10000000".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        let goal = app.storage.goal.get().unwrap();
        assert_eq!(goal.name, "Laptop");
        assert_eq!(goal.target, Money::new(10000000));
    }

    #[test]
    fn test_clear_goal_key() {
        let (_temp_dir, mut app) = create_test_app();
        GoalService::new(&mut app.storage)
            .set("Laptop", Money::new(10000000))
            .unwrap();

        press(&mut app, KeyCode::Char('G'));
        assert!(app.storage.goal.get().is_none());
    }
}
