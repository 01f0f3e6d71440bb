use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money credited to the account (deposits and incoming transfers)
    Deposit,
    /// Money debited from the account (plain and transfer withdrawals)
    Withdraw,
    /// Interest accrued onto the balance
    Interest,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdraw => "withdraw",
            TransactionKind::Interest => "interest",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "deposit" => Some(TransactionKind::Deposit),
            "withdraw" => Some(TransactionKind::Withdraw),
            "interest" => Some(TransactionKind::Interest),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single entry in an account's history. Records are immutable once
/// appended; the history is never reordered or pruned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub timestamp: DateTime<Utc>,
    pub kind: TransactionKind,
    pub amount: Amount,
    /// Account balance immediately after this entry was applied
    pub balance_after: Amount,
    pub description: String,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        amount: Amount,
        balance_after: Amount,
        description: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
            amount,
            balance_after,
            description: description.into(),
        }
    }
}
