//! Summary display formatting
//!
//! Renders the aggregation outputs (totals, category breakdown, goal
//! progress) as plain terminal text for the headless CLI.

use crate::models::{Money, SavingsGoal};
use crate::reports::{GoalProgress, Totals};

/// Format the balance/income/expense summary cards
pub fn format_summary(totals: &Totals, balance_percent: f64, overspent: bool) -> String {
    let mut output = String::new();

    let balance_marker = if totals.balance.is_negative() {
        " (!)"
    } else {
        ""
    };

    output.push_str(&format!(
        "Balance:  {}{}\n",
        totals.balance, balance_marker
    ));
    output.push_str(&format!("Income:   {}\n", totals.income));
    output.push_str(&format!("Expense:  {}\n", totals.expense));
    output.push_str(&format!("Of income remaining: {:.0}%\n", balance_percent));

    if overspent {
        output.push_str("Warning: spending exceeds income this period.\n");
    }

    output
}

/// Format the expense-by-category breakdown
///
/// Categories appear in first-seen order; an empty breakdown renders the
/// empty-state indicator.
pub fn format_category_breakdown(groups: &[(String, Money)]) -> String {
    if groups.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let total: Money = groups.iter().map(|(_, m)| *m).sum();

    let mut output = String::new();
    output.push_str(&format!("{:<16} {:>16} {:>7}\n", "Category", "Amount", "%"));
    output.push_str(&"-".repeat(42));
    output.push('\n');

    for (name, amount) in groups {
        let pct = if total.is_positive() {
            amount.units() as f64 / total.units() as f64 * 100.0
        } else {
            0.0
        };
        output.push_str(&format!("{:<16} {:>16} {:>6.1}%\n", name, amount.to_string(), pct));
    }

    output
}

/// Format the savings goal progress line
pub fn format_goal(goal: &SavingsGoal, progress: &GoalProgress) -> String {
    format!(
        "Goal: {} — target {}\n  saved {} ({:.0}%), remaining {}\n",
        goal.name, goal.target, progress.saved, progress.percent, progress.remaining
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_summary() {
        let totals = Totals {
            income: Money::new(5000000),
            expense: Money::new(2000000),
            balance: Money::new(3000000),
        };
        let out = format_summary(&totals, 60.0, false);
        assert!(out.contains("Rp3.000.000"));
        assert!(out.contains("60%"));
        assert!(!out.contains("Warning"));
        assert!(!out.contains("(!)"));
    }

    #[test]
    fn test_negative_balance_marked() {
        let totals = Totals {
            income: Money::new(100),
            expense: Money::new(500),
            balance: Money::new(-400),
        };
        let out = format_summary(&totals, 0.0, true);
        assert!(out.contains("-Rp400 (!)"));
        assert!(out.contains("Warning"));
    }

    #[test]
    fn test_category_breakdown_empty_state() {
        assert!(format_category_breakdown(&[]).contains("No expenses recorded"));
    }

    #[test]
    fn test_category_breakdown_rows() {
        let groups = vec![
            ("Makanan".to_string(), Money::new(1500000)),
            ("Transportasi".to_string(), Money::new(500000)),
        ];
        let out = format_category_breakdown(&groups);
        assert!(out.contains("Makanan"));
        assert!(out.contains("75.0%"));
        assert!(out.contains("25.0%"));
    }

    #[test]
    fn test_format_goal() {
        let goal = SavingsGoal::new("Laptop", Money::new(10000000));
        let progress = GoalProgress {
            saved: Money::new(3000000),
            remaining: Money::new(7000000),
            percent: 30.0,
        };
        let out = format_goal(&goal, &progress);
        assert!(out.contains("Laptop"));
        assert!(out.contains("30%"));
        assert!(out.contains("Rp7.000.000"));
    }
}
