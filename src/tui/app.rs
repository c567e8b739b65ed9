//! Application state for the TUI
//!
//! The App struct owns the storage layer and all transient UI state needed
//! for rendering and handling events.

use crate::models::{Theme, Transaction, TransactionId};
use crate::services::transaction::sorted_for_display;
use crate::storage::Storage;

use super::dialogs::goal::GoalFormState;
use super::dialogs::transaction::TransactionFormState;
use super::style::Palette;

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    Register,
}

impl ActiveView {
    /// The other view
    pub fn toggled(self) -> Self {
        match self {
            Self::Dashboard => Self::Register,
            Self::Register => Self::Dashboard,
        }
    }
}

/// Register filter: all entries, or one kind only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl KindFilter {
    /// Next filter in the cycle all -> income -> expense -> all
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Income,
            Self::Income => Self::Expense,
            Self::Expense => Self::All,
        }
    }

    /// The kind to keep, or `None` for all
    pub fn as_kind(self) -> Option<crate::models::EntryKind> {
        match self {
            Self::All => None,
            Self::Income => Some(crate::models::EntryKind::Income),
            Self::Expense => Some(crate::models::EntryKind::Expense),
        }
    }

    /// Short label for the status bar
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddTransaction,
    SetGoal,
    ConfirmDelete(TransactionId),
    Help,
}

/// Ticks before a transient status message disappears (250ms tick rate)
const STATUS_TICKS: u8 = 16;

/// Main application state
pub struct App {
    /// The storage layer
    pub storage: Storage,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Register kind filter
    pub filter: KindFilter,

    /// Selected row index in the register
    pub selected_index: usize,

    /// Active display theme (mirrors the persisted preference)
    pub theme: Theme,

    /// Transient status message and its remaining lifetime in ticks
    status: Option<(String, u8)>,

    /// Transaction form state
    pub transaction_form: TransactionFormState,

    /// Goal form state
    pub goal_form: GoalFormState,
}

impl App {
    /// Create a new App instance over loaded storage
    pub fn new(storage: Storage) -> Self {
        let theme = storage.theme.get();
        Self {
            storage,
            should_quit: false,
            active_view: ActiveView::default(),
            active_dialog: ActiveDialog::default(),
            filter: KindFilter::default(),
            selected_index: 0,
            theme,
            status: None,
            transaction_form: TransactionFormState::new(),
            goal_form: GoalFormState::default(),
        }
    }

    /// The palette for the active theme
    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.theme)
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a transient status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some((message.into(), STATUS_TICKS));
    }

    /// The current status message, if still live
    pub fn status_message(&self) -> Option<&str> {
        self.status.as_ref().map(|(m, _)| m.as_str())
    }

    /// Age the status message; called on every tick
    pub fn on_tick(&mut self) {
        if let Some((_, ticks)) = &mut self.status {
            *ticks = ticks.saturating_sub(1);
            if *ticks == 0 {
                self.status = None;
            }
        }
    }

    /// Switch between dashboard and register
    pub fn toggle_view(&mut self) {
        self.active_view = self.active_view.toggled();
    }

    /// Advance the register filter and clamp the selection
    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.selected_index = 0;
    }

    /// Transactions as the register shows them: filtered and sorted
    pub fn visible_transactions(&self) -> Vec<Transaction> {
        sorted_for_display(self.storage.transactions.list(), self.filter.as_kind())
    }

    /// The transaction under the cursor, if any
    pub fn selected_transaction(&self) -> Option<Transaction> {
        self.visible_transactions().get(self.selected_index).cloned()
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        let max = self.visible_transactions().len();
        if self.selected_index + 1 < max {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the visible list after a removal
    pub fn clamp_selection(&mut self) {
        let max = self.visible_transactions().len();
        if self.selected_index >= max {
            self.selected_index = max.saturating_sub(1);
        }
    }

    /// Open a dialog, resetting its form state
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match &dialog {
            ActiveDialog::AddTransaction => {
                self.transaction_form = TransactionFormState::new();
            }
            ActiveDialog::SetGoal => {
                let current = self
                    .storage
                    .goal
                    .get()
                    .map(|g| (g.name.clone(), g.target));
                self.goal_form =
                    GoalFormState::new(current.as_ref().map(|(n, t)| (n.as_str(), *t)));
            }
            _ => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }
}
