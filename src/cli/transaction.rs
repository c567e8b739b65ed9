//! Transaction CLI commands

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::display::{format_category_breakdown, format_goal, format_register, format_summary};
use crate::error::{KantongError, KantongResult};
use crate::models::{EntryKind, Money, TransactionId};
use crate::reports;
use crate::services::TransactionService;
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a transaction
    Add {
        /// income or expense
        kind: String,
        /// Amount in whole rupiah (e.g. "5000000" or "Rp5.000.000")
        amount: String,
        /// Category name (must match the kind's category list)
        category: String,
        /// Transaction date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Optional note
        #[arg(short, long, default_value = "")]
        note: String,
    },
    /// Remove a transaction by id
    Remove {
        /// Transaction id (shown in the register)
        id: String,
    },
    /// List transactions, newest first
    List {
        /// Only show one kind (income or expense)
        #[arg(short, long)]
        kind: Option<String>,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(storage: &mut Storage, cmd: TransactionCommands) -> KantongResult<()> {
    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            date,
            note,
        } => {
            let kind = parse_kind(&kind)?;
            let amount = Money::parse(&amount)
                .map_err(|e| KantongError::Validation(e.to_string()))?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => Local::now().date_naive(),
            };

            let txn =
                TransactionService::new(storage).add(kind, amount, &category, date, &note)?;
            println!("Added {} {} ({})", txn.category, txn.amount, txn.id);
        }
        TransactionCommands::Remove { id } => {
            let id = TransactionId::from_string(id);
            let removed = TransactionService::new(storage).remove(&id)?;
            if removed {
                println!("Removed {}", id);
            } else {
                return Err(KantongError::transaction_not_found(id.as_str()));
            }
        }
        TransactionCommands::List { kind } => {
            let filter = kind.as_deref().map(parse_kind).transpose()?;
            let transactions = TransactionService::new(storage).list(filter);
            print!("{}", format_register(&transactions));
        }
    }

    Ok(())
}

/// Handle the summary command: totals, category breakdown, goal progress
pub fn handle_summary_command(storage: &Storage) -> KantongResult<()> {
    let transactions = storage.transactions.list();
    let totals = reports::totals(transactions);
    let percent = reports::balance_percent(transactions);
    let overspent = reports::overspend_alert(transactions);

    print!("{}", format_summary(&totals, percent, overspent));
    println!();
    print!(
        "{}",
        format_category_breakdown(&reports::expense_by_category(transactions))
    );

    if let Some(goal) = storage.goal.get() {
        let progress = reports::goal_progress(transactions, goal);
        println!();
        print!("{}", format_goal(goal, &progress));
    }

    Ok(())
}

/// Parse a kind argument
fn parse_kind(s: &str) -> KantongResult<EntryKind> {
    match s.to_ascii_lowercase().as_str() {
        "income" | "in" => Ok(EntryKind::Income),
        "expense" | "out" => Ok(EntryKind::Expense),
        other => Err(KantongError::Validation(format!(
            "Invalid kind: '{}'. Valid kinds: income, expense",
            other
        ))),
    }
}

/// Parse a YYYY-MM-DD date argument
fn parse_date(s: &str) -> KantongResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| KantongError::Validation(format!("Invalid date: '{}'. Use YYYY-MM-DD", s)))
}
