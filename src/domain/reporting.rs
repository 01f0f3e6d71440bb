use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AccountId, Amount, format_amount};

/// Point-in-time summary of an account's state and aggregate totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountReport {
    pub account_id: AccountId,
    pub generated_at: DateTime<Utc>,
    pub balance: Amount,
    pub min_balance: Amount,
    pub daily_withdraw_limit: Amount,
    pub withdrawn_today: Amount,
    pub interest_rate: f64,
    pub total_deposits: Amount,
    pub total_withdrawals: Amount,
    pub transaction_count: usize,
}

impl fmt::Display for AccountReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account report for {}", self.account_id)?;
        writeln!(
            f,
            "Generated at:          {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(f, "Balance:               {}", format_amount(self.balance))?;
        writeln!(
            f,
            "Minimum balance:       {}",
            format_amount(self.min_balance)
        )?;
        writeln!(
            f,
            "Daily withdraw limit:  {} ({} used today)",
            format_amount(self.daily_withdraw_limit),
            format_amount(self.withdrawn_today)
        )?;
        writeln!(
            f,
            "Annual interest rate:  {:.2}%",
            self.interest_rate * 100.0
        )?;
        writeln!(
            f,
            "Total deposits:        {}",
            format_amount(self.total_deposits)
        )?;
        writeln!(
            f,
            "Total withdrawals:     {}",
            format_amount(self.total_withdrawals)
        )?;
        write!(f, "Transactions recorded: {}", self.transaction_count)
    }
}
