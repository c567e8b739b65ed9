//! Transaction model
//!
//! Represents a single recorded income or expense event with a fixed
//! per-kind category vocabulary.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::money::Money;

/// Fixed category vocabulary for income entries
pub const INCOME_CATEGORIES: &[&str] = &["Gaji", "Bonus", "Investasi", "Lainnya"];

/// Fixed category vocabulary for expense entries
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Makanan",
    "Transportasi",
    "Belanja",
    "Tagihan",
    "Hiburan",
    "Kesehatan",
    "Lainnya",
];

/// Whether an entry adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    #[default]
    Expense,
}

impl EntryKind {
    /// The category vocabulary associated with this kind
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            Self::Income => INCOME_CATEGORIES,
            Self::Expense => EXPENSE_CATEGORIES,
        }
    }

    /// Check whether a category belongs to this kind's vocabulary
    pub fn has_category(&self, category: &str) -> bool {
        self.categories().contains(&category)
    }

    /// The other kind
    pub fn toggled(&self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// Opaque unique transaction identifier
///
/// Generated from the creation timestamp (fixed-width hex milliseconds) plus
/// a random suffix, so ids are collision-resistant and lexicographic order
/// follows creation order. The register view relies on this: same-day entries
/// are tie-broken by id descending, surfacing the most recently added first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Generate a new id from the current time and a random suffix
    pub fn new() -> Self {
        let millis = Utc::now().timestamp_millis().max(0);
        let suffix = Uuid::new_v4().simple().to_string();
        Self(format!("{:011x}-{}", millis, &suffix[..8]))
    }

    /// Wrap an existing id string
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single recorded income or expense event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Income or expense
    pub kind: EntryKind,

    /// Amount (always positive; the kind carries the sign)
    pub amount: Money,

    /// Category from the kind's fixed vocabulary
    pub category: String,

    /// Calendar date of the entry
    pub date: NaiveDate,

    /// Optional free-text description
    #[serde(default)]
    pub note: String,
}

impl Transaction {
    /// Create a new transaction with a freshly generated id
    pub fn new(
        kind: EntryKind,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
        note: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            category: category.into(),
            date,
            note: note.into(),
        }
    }

    /// The signed contribution of this entry to the balance
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            EntryKind::Income => self.amount,
            EntryKind::Expense => -self.amount,
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        if !self.kind.has_category(&self.category) {
            return Err(TransactionValidationError::UnknownCategory {
                kind: self.kind,
                category: self.category.clone(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    UnknownCategory { kind: EntryKind, category: String },
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be positive, got {}", amount)
            }
            Self::UnknownCategory { kind, category } => {
                write!(f, "'{}' is not a valid {} category", category, kind)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
