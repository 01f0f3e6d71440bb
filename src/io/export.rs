use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Account, AccountReport, Transaction};

/// Account statement for full export: summary plus every recorded
/// transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub report: AccountReport,
    pub transactions: Vec<Transaction>,
}

/// Exporter for writing account data in various formats.
pub struct Exporter<'a> {
    account: &'a Account,
}

impl<'a> Exporter<'a> {
    pub fn new(account: &'a Account) -> Self {
        Self { account }
    }

    /// Export the transaction history to CSV format.
    pub fn export_history_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let transactions = self.account.transaction_history();
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["timestamp", "kind", "amount", "balance_after", "description"])?;

        let mut count = 0;
        for tx in &transactions {
            csv_writer.write_record([
                tx.timestamp.to_rfc3339(),
                tx.kind.as_str().to_string(),
                tx.amount.to_string(),
                tx.balance_after.to_string(),
                tx.description.clone(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export the full statement as a JSON snapshot.
    pub fn export_statement_json<W: Write>(&self, mut writer: W) -> Result<StatementSnapshot> {
        let snapshot = StatementSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            report: self.account.report(),
            transactions: self.account.transaction_history(),
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        Ok(snapshot)
    }
}
