//! Transaction display formatting
//!
//! Provides utilities for formatting the transaction register for terminal
//! output.

use crate::models::{EntryKind, Transaction};

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction) -> String {
    let kind_icon = match txn.kind {
        EntryKind::Income => "+",
        EntryKind::Expense => "-",
    };

    let note_display = if txn.note.is_empty() {
        String::new()
    } else {
        format!("  {}", truncate(&txn.note, 24))
    };

    format!(
        "{} {} {:14} {:>16} {:>14}{}",
        kind_icon,
        txn.date.format("%Y-%m-%d"),
        truncate(&txn.category, 14),
        format!("{}{}", kind_icon, txn.amount),
        txn.id,
        note_display
    )
}

/// Format a list of transactions as a register
///
/// The caller supplies the list already sorted and filtered; an empty list
/// renders the empty-state indicator.
pub fn format_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "  {:10} {:14} {:>16} {:>14}\n",
        "Date", "Category", "Amount", "Id"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum length, padding short strings
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn sample(kind: EntryKind, amount: i64, category: &str) -> Transaction {
        Transaction::new(
            kind,
            Money::new(amount),
            category,
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            "makan siang",
        )
    }

    #[test]
    fn test_format_row() {
        let row = format_transaction_row(&sample(EntryKind::Expense, 2000000, "Makanan"));
        assert!(row.contains("2024-01-02"));
        assert!(row.contains("Makanan"));
        assert!(row.contains("-Rp2.000.000"));
        assert!(row.contains("makan siang"));
    }

    #[test]
    fn test_income_row_signed_positive() {
        let row = format_transaction_row(&sample(EntryKind::Income, 5000000, "Gaji"));
        assert!(row.contains("+Rp5.000.000"));
    }

    #[test]
    fn test_empty_register() {
        assert!(format_register(&[]).contains("No transactions found"));
    }

    #[test]
    fn test_register_has_header_and_rows() {
        let txns = vec![
            sample(EntryKind::Income, 5000000, "Gaji"),
            sample(EntryKind::Expense, 2000000, "Makanan"),
        ];
        let out = format_register(&txns);
        assert!(out.contains("Date"));
        assert_eq!(out.lines().count(), 4); // header + rule + 2 rows
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Gaji", 8).trim(), "Gaji");
        let long = truncate("a very long category name", 10);
        assert!(long.len() <= 10);
        assert!(long.ends_with("..."));
    }
}
