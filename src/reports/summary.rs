//! Summary aggregation over the transaction list
//!
//! Everything here is recomputed from scratch on every query; no aggregate is
//! maintained incrementally, so the totals can never drift from the ledger.

use crate::models::{EntryKind, Money, SavingsGoal, Transaction};

/// Income, expense, and signed balance totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
    pub balance: Money,
}

/// Savings-goal progress derived from the current balance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProgress {
    /// Balance counted toward the goal (never negative)
    pub saved: Money,
    /// Target minus saved; negative when saved exceeds the target
    pub remaining: Money,
    /// Progress percentage, capped at 100
    pub percent: f64,
}

/// Compute income, expense, and balance totals
pub fn totals(transactions: &[Transaction]) -> Totals {
    let income: Money = transactions
        .iter()
        .filter(|t| t.kind == EntryKind::Income)
        .map(|t| t.amount)
        .sum();
    let expense: Money = transactions
        .iter()
        .filter(|t| t.kind == EntryKind::Expense)
        .map(|t| t.amount)
        .sum();

    Totals {
        income,
        expense,
        balance: income - expense,
    }
}

/// Share of income remaining as balance, clamped to [0, 100]
///
/// Zero income yields 0 rather than a division error; the clamp keeps a
/// progress bar sensible when the balance is negative or exceeds income.
pub fn balance_percent(transactions: &[Transaction]) -> f64 {
    let t = totals(transactions);
    if !t.income.is_positive() {
        return 0.0;
    }
    let pct = t.balance.units() as f64 / t.income.units() as f64 * 100.0;
    pct.clamp(0.0, 100.0)
}

/// Expense totals grouped by category, in first-seen order
///
/// Categories with no expense are absent rather than zero-valued.
pub fn expense_by_category(transactions: &[Transaction]) -> Vec<(String, Money)> {
    let mut groups: Vec<(String, Money)> = Vec::new();

    for txn in transactions.iter().filter(|t| t.kind == EntryKind::Expense) {
        match groups.iter_mut().find(|(name, _)| *name == txn.category) {
            Some((_, total)) => *total += txn.amount,
            None => groups.push((txn.category.clone(), txn.amount)),
        }
    }

    groups
}

/// Whether spending has exceeded income
///
/// True iff expense > income AND income > 0. An all-expense ledger with zero
/// income does not trigger the alert.
pub fn overspend_alert(transactions: &[Transaction]) -> bool {
    let t = totals(transactions);
    t.income.is_positive() && t.expense > t.income
}

/// Progress toward a savings goal from the current balance
pub fn goal_progress(transactions: &[Transaction], goal: &SavingsGoal) -> GoalProgress {
    let balance = totals(transactions).balance;
    let saved = if balance.is_positive() {
        balance
    } else {
        Money::zero()
    };

    let percent = if goal.target.is_positive() {
        (saved.units() as f64 / goal.target.units() as f64 * 100.0).min(100.0)
    } else {
        0.0
    };

    GoalProgress {
        saved,
        remaining: goal.target - saved,
        percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(kind: EntryKind, amount: i64, category: &str, day: u32) -> Transaction {
        Transaction::new(
            kind,
            Money::new(amount),
            category,
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            "",
        )
    }

    #[test]
    fn test_totals_scenario() {
        // Income 5,000,000 (Gaji), expense 2,000,000 (Makanan)
        let txns = vec![
            entry(EntryKind::Income, 5000000, "Gaji", 1),
            entry(EntryKind::Expense, 2000000, "Makanan", 2),
        ];

        let t = totals(&txns);
        assert_eq!(t.income, Money::new(5000000));
        assert_eq!(t.expense, Money::new(2000000));
        assert_eq!(t.balance, Money::new(3000000));
        assert!(!overspend_alert(&txns));
    }

    #[test]
    fn test_totals_empty() {
        let t = totals(&[]);
        assert_eq!(t, Totals::default());
    }

    #[test]
    fn test_balance_identity() {
        let txns = vec![
            entry(EntryKind::Income, 700, "Gaji", 1),
            entry(EntryKind::Expense, 300, "Makanan", 2),
            entry(EntryKind::Income, 50, "Bonus", 3),
            entry(EntryKind::Expense, 900, "Belanja", 4),
        ];
        let t = totals(&txns);
        assert_eq!(t.balance, t.income - t.expense);
    }

    #[test]
    fn test_balance_percent_zero_income() {
        // Zero income must yield 0, not NaN or a panic
        let txns = vec![entry(EntryKind::Expense, 100000, "Makanan", 1)];
        assert_eq!(balance_percent(&txns), 0.0);
        assert_eq!(balance_percent(&[]), 0.0);
    }

    #[test]
    fn test_balance_percent_clamped() {
        // Overspent: balance negative, percent clamps to 0
        let overspent = vec![
            entry(EntryKind::Income, 100, "Gaji", 1),
            entry(EntryKind::Expense, 500, "Makanan", 2),
        ];
        assert_eq!(balance_percent(&overspent), 0.0);

        // All income kept: exactly 100
        let saved = vec![entry(EntryKind::Income, 100, "Gaji", 1)];
        assert_eq!(balance_percent(&saved), 100.0);

        // Half spent
        let half = vec![
            entry(EntryKind::Income, 100, "Gaji", 1),
            entry(EntryKind::Expense, 50, "Makanan", 2),
        ];
        assert!((balance_percent(&half) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_expense_by_category_first_seen_order() {
        let txns = vec![
            entry(EntryKind::Expense, 100, "Makanan", 1),
            entry(EntryKind::Expense, 200, "Transportasi", 2),
            entry(EntryKind::Income, 5000, "Gaji", 3),
            entry(EntryKind::Expense, 50, "Makanan", 4),
        ];

        let groups = expense_by_category(&txns);
        assert_eq!(
            groups,
            vec![
                ("Makanan".to_string(), Money::new(150)),
                ("Transportasi".to_string(), Money::new(200)),
            ]
        );
    }

    #[test]
    fn test_expense_by_category_sums_to_total_expense() {
        let txns = vec![
            entry(EntryKind::Expense, 100, "Makanan", 1),
            entry(EntryKind::Expense, 200, "Tagihan", 2),
            entry(EntryKind::Expense, 300, "Makanan", 3),
        ];

        let sum: Money = expense_by_category(&txns).iter().map(|(_, m)| *m).sum();
        assert_eq!(sum, totals(&txns).expense);
        // No zero-valued categories present
        assert!(expense_by_category(&txns).iter().all(|(_, m)| !m.is_zero()));
    }

    #[test]
    fn test_expense_by_category_empty_when_no_expenses() {
        let txns = vec![entry(EntryKind::Income, 1000, "Gaji", 1)];
        assert!(expense_by_category(&txns).is_empty());
    }

    #[test]
    fn test_overspend_alert() {
        let overspent = vec![
            entry(EntryKind::Income, 100, "Gaji", 1),
            entry(EntryKind::Expense, 200, "Makanan", 2),
        ];
        assert!(overspend_alert(&overspent));

        // Expense exceeds income(=0) but income>0 is required
        let no_income = vec![entry(EntryKind::Expense, 100000, "Makanan", 1)];
        assert!(!overspend_alert(&no_income));

        // Break-even is not overspent
        let even = vec![
            entry(EntryKind::Income, 100, "Gaji", 1),
            entry(EntryKind::Expense, 100, "Makanan", 2),
        ];
        assert!(!overspend_alert(&even));
    }

    #[test]
    fn test_goal_progress_scenario() {
        // Balance 3,000,000 toward a 10,000,000 target
        let txns = vec![
            entry(EntryKind::Income, 5000000, "Gaji", 1),
            entry(EntryKind::Expense, 2000000, "Makanan", 2),
        ];
        let goal = SavingsGoal::new("Laptop", Money::new(10000000));

        let progress = goal_progress(&txns, &goal);
        assert_eq!(progress.saved, Money::new(3000000));
        assert_eq!(progress.remaining, Money::new(7000000));
        assert!((progress.percent - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_goal_progress_negative_balance_counts_as_zero() {
        let txns = vec![
            entry(EntryKind::Income, 100, "Gaji", 1),
            entry(EntryKind::Expense, 500, "Makanan", 2),
        ];
        let goal = SavingsGoal::new("Laptop", Money::new(1000));

        let progress = goal_progress(&txns, &goal);
        assert_eq!(progress.saved, Money::zero());
        assert_eq!(progress.remaining, Money::new(1000));
        assert_eq!(progress.percent, 0.0);
    }

    #[test]
    fn test_goal_progress_percent_capped_at_100() {
        let txns = vec![entry(EntryKind::Income, 50000, "Gaji", 1)];
        let goal = SavingsGoal::new("Dana darurat", Money::new(10000));

        let progress = goal_progress(&txns, &goal);
        assert_eq!(progress.percent, 100.0);
        // Remaining goes negative when saved exceeds the target
        assert_eq!(progress.remaining, Money::new(-40000));
    }
}
