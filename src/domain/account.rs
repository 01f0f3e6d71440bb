use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use super::{
    AccountError, AccountReport, Amount, FixedRateProvider, Notifier, RateProvider, Transaction,
    TransactionKind, format_amount,
};

pub type AccountId = Uuid;

/// Floor the balance must stay strictly above after transfer-style
/// operations. Plain deposits and withdrawals are exempt.
pub const MIN_BALANCE: Amount = 1.0;

/// Default cap on cumulative plain withdrawals per calendar day.
pub const DEFAULT_DAILY_WITHDRAW_LIMIT: Amount = 10_000.0;

/// Fixed annual rate for simple-interest accrual.
pub const INTEREST_RATE: f64 = 0.02;

const LARGE_DEPOSIT_THRESHOLD: Amount = 50_000.0;
const LARGE_WITHDRAWAL_THRESHOLD: Amount = 5_000.0;
const DAYS_PER_YEAR: f64 = 365.0;

/// A single bank account's in-memory ledger: balance, append-only
/// transaction history, and the per-day withdrawal counter.
///
/// Not safe for concurrent mutation. Balance, history, and counter
/// updates are multi-step; concurrent callers need an external lock
/// per account instance.
pub struct Account {
    id: AccountId,
    balance: Amount,
    min_balance: Amount,
    daily_withdraw_limit: Amount,
    /// Cumulative plain withdrawals for the current calendar day.
    /// Transfer-initiated withdrawals never contribute here.
    withdrawn_today: Amount,
    last_withdraw_date: Option<NaiveDate>,
    interest_rate: f64,
    history: Vec<Transaction>,
    rates: Box<dyn RateProvider>,
    notifier: Option<Box<dyn Notifier>>,
    holder_email: Option<String>,
    holder_phone: Option<String>,
}

impl Account {
    /// Create an account with the given opening balance, a default
    /// fixed-rate provider, and no notifier.
    pub fn new(initial_balance: Amount) -> Self {
        Self {
            id: Uuid::new_v4(),
            balance: initial_balance,
            min_balance: MIN_BALANCE,
            daily_withdraw_limit: DEFAULT_DAILY_WITHDRAW_LIMIT,
            withdrawn_today: 0.0,
            last_withdraw_date: None,
            interest_rate: INTEREST_RATE,
            history: Vec::new(),
            rates: Box::new(FixedRateProvider::default()),
            notifier: None,
            holder_email: None,
            holder_phone: None,
        }
    }

    pub fn with_rate_provider(mut self, rates: impl RateProvider + 'static) -> Self {
        self.rates = Box::new(rates);
        self
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Some(Box::new(notifier));
        self
    }

    pub fn with_daily_withdraw_limit(mut self, limit: Amount) -> Self {
        self.daily_withdraw_limit = limit;
        self
    }

    pub fn with_holder_email(mut self, email: impl Into<String>) -> Self {
        self.holder_email = Some(email.into());
        self
    }

    pub fn with_holder_phone(mut self, phone: impl Into<String>) -> Self {
        self.holder_phone = Some(phone.into());
        self
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn min_balance(&self) -> Amount {
        self.min_balance
    }

    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }

    pub fn daily_withdraw_limit(&self) -> Amount {
        self.daily_withdraw_limit
    }

    pub fn set_daily_withdraw_limit(&mut self, limit: Amount) {
        self.daily_withdraw_limit = limit;
    }

    // ========================
    // Balance mutation
    // ========================

    /// Add `amount` to the balance. No sign or magnitude validation: a
    /// negative deposit decreases the balance.
    pub fn deposit(&mut self, amount: Amount) {
        self.balance += amount;
        self.record(
            TransactionKind::Deposit,
            amount,
            format!("Deposit of {}", format_amount(amount)),
        );
        tracing::debug!(account = %self.id, amount, balance = self.balance, "deposit");
        self.log_activity(&format!("Deposited {}", format_amount(amount)));
        if amount > LARGE_DEPOSIT_THRESHOLD {
            self.send_email(
                "Large deposit received",
                &format!(
                    "A deposit of {} was credited to account {}",
                    format_amount(amount),
                    self.id
                ),
            );
        }
    }

    /// Withdraw `amount` through the daily-limited path. The amount
    /// itself is not validated; only the daily cap can reject.
    pub fn withdraw(&mut self, amount: Amount) -> Result<(), AccountError> {
        self.check_daily_limit(amount)?;
        self.withdraw_unlimited(amount);
        Ok(())
    }

    /// Debit without touching the daily counter. Every transfer
    /// operation routes its source-side debit through here.
    fn withdraw_unlimited(&mut self, amount: Amount) {
        self.balance -= amount;
        self.record(
            TransactionKind::Withdraw,
            amount,
            format!("Withdrawal of {}", format_amount(amount)),
        );
        tracing::debug!(account = %self.id, amount, balance = self.balance, "withdrawal");
        self.log_activity(&format!("Withdrew {}", format_amount(amount)));
        if amount > LARGE_WITHDRAWAL_THRESHOLD {
            self.send_sms(&format!(
                "Withdrawal of {} from account {}",
                format_amount(amount),
                self.id
            ));
        }
    }

    /// Lazily reset the counter on the first attempt of a new calendar
    /// day, then either reject or reserve the amount against the cap.
    /// On rejection nothing else is mutated.
    fn check_daily_limit(&mut self, amount: Amount) -> Result<(), AccountError> {
        let today = Utc::now().date_naive();
        if self.last_withdraw_date.is_some_and(|date| date < today) {
            self.withdrawn_today = 0.0;
        }
        if self.withdrawn_today + amount > self.daily_withdraw_limit {
            tracing::warn!(
                account = %self.id,
                amount,
                withdrawn_today = self.withdrawn_today,
                limit = self.daily_withdraw_limit,
                "daily withdrawal limit exceeded"
            );
            return Err(AccountError::DailyLimitExceeded {
                limit: self.daily_withdraw_limit,
                withdrawn_today: self.withdrawn_today,
                requested: amount,
            });
        }
        self.withdrawn_today += amount;
        self.last_withdraw_date = Some(today);
        Ok(())
    }

    // ========================
    // Transfers
    // ========================

    /// Move `amount` into `destination`. Credits the destination first,
    /// then debits this account through the unlimited path; the two
    /// steps are not atomic and no rollback is attempted. No amount
    /// validation is performed.
    pub fn transfer_funds(&mut self, destination: &mut Account, amount: Amount) {
        destination.deposit(amount);
        self.withdraw_unlimited(amount);
    }

    /// Transfer that enforces the minimum-balance floor: succeeds only
    /// when the remaining balance stays strictly above `min_balance`.
    /// Non-positive amounts map to the same error as a short balance.
    pub fn transfer_min_funds(
        &mut self,
        destination: &mut Account,
        amount: Amount,
    ) -> Result<(), AccountError> {
        if amount <= 0.0 || self.balance - amount <= self.min_balance {
            return Err(self.insufficient_funds(amount));
        }
        destination.deposit(amount);
        self.withdraw_unlimited(amount);
        Ok(())
    }

    // ========================
    // Currency conversion
    // ========================

    /// Convert a local-currency amount into foreign units at the
    /// provider's current rate.
    pub fn convert_local_to_foreign(&self, amount: Amount) -> Result<Amount, AccountError> {
        Self::require_positive_amount(amount)?;
        Ok(amount / self.rates.rate())
    }

    /// Convert a foreign-currency amount into local units at the
    /// provider's current rate.
    pub fn convert_foreign_to_local(&self, amount: Amount) -> Result<Amount, AccountError> {
        Self::require_positive_amount(amount)?;
        Ok(amount * self.rates.rate())
    }

    /// Send `amount` of local currency to a foreign-currency account.
    /// The source is debited the original amount; the destination is
    /// credited the converted amount.
    pub fn transfer_local_to_foreign(
        &mut self,
        destination: &mut Account,
        amount: Amount,
    ) -> Result<(), AccountError> {
        Self::require_positive_amount(amount)?;
        if self.balance - amount <= self.min_balance {
            return Err(self.insufficient_funds(amount));
        }
        let converted = self.convert_local_to_foreign(amount)?;
        self.withdraw_unlimited(amount);
        destination.deposit(converted);
        Ok(())
    }

    /// Send `amount` of foreign currency to a local-currency account.
    /// Mirror of [`Account::transfer_local_to_foreign`].
    pub fn transfer_foreign_to_local(
        &mut self,
        destination: &mut Account,
        amount: Amount,
    ) -> Result<(), AccountError> {
        Self::require_positive_amount(amount)?;
        if self.balance - amount <= self.min_balance {
            return Err(self.insufficient_funds(amount));
        }
        let converted = self.convert_foreign_to_local(amount)?;
        self.withdraw_unlimited(amount);
        destination.deposit(converted);
        Ok(())
    }

    // ========================
    // Interest
    // ========================

    /// Simple interest over `days`: `balance * rate * days / 365`.
    pub fn calculate_interest(&self, days: i64) -> Result<Amount, AccountError> {
        if days <= 0 {
            return Err(AccountError::InvalidAmount(format!(
                "day count must be positive, got {days}"
            )));
        }
        Ok(self.balance * self.interest_rate * days as f64 / DAYS_PER_YEAR)
    }

    /// Accrue simple interest onto the balance. Never triggers
    /// large-amount alerts regardless of the accrued figure.
    pub fn apply_interest(&mut self, days: i64) -> Result<Amount, AccountError> {
        let interest = self.calculate_interest(days)?;
        self.balance += interest;
        self.record(
            TransactionKind::Interest,
            interest,
            format!("Interest for {days} days"),
        );
        tracing::debug!(account = %self.id, interest, balance = self.balance, "interest applied");
        self.log_activity(&format!("Applied interest of {}", format_amount(interest)));
        Ok(interest)
    }

    // ========================
    // Queries
    // ========================

    /// Whether the balance covers `amount` while leaving the minimum
    /// intact: `balance >= amount + min_balance`.
    pub fn has_sufficient_balance(&self, amount: Amount) -> bool {
        self.balance >= amount + self.min_balance
    }

    /// Full transaction history as an independent copy.
    pub fn transaction_history(&self) -> Vec<Transaction> {
        self.history.clone()
    }

    /// Transactions whose calendar date falls within the inclusive
    /// `start..=end` range.
    pub fn transactions_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Transaction> {
        self.history
            .iter()
            .filter(|tx| {
                let date = tx.timestamp.date_naive();
                date >= start && date <= end
            })
            .cloned()
            .collect()
    }

    /// Transactions of the named kind, matched case-insensitively.
    /// An unknown kind yields an empty list.
    pub fn transactions_by_kind(&self, kind: &str) -> Vec<Transaction> {
        match TransactionKind::from_str(kind) {
            Some(kind) => self
                .history
                .iter()
                .filter(|tx| tx.kind == kind)
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn total_deposits(&self) -> Amount {
        self.total_for(TransactionKind::Deposit)
    }

    pub fn total_withdrawals(&self) -> Amount {
        self.total_for(TransactionKind::Withdraw)
    }

    fn total_for(&self, kind: TransactionKind) -> Amount {
        self.history
            .iter()
            .filter(|tx| tx.kind == kind)
            .map(|tx| tx.amount)
            .sum()
    }

    /// Snapshot of current state and aggregate totals.
    pub fn report(&self) -> AccountReport {
        AccountReport {
            account_id: self.id,
            generated_at: Utc::now(),
            balance: self.balance,
            min_balance: self.min_balance,
            daily_withdraw_limit: self.daily_withdraw_limit,
            withdrawn_today: self.withdrawn_today,
            interest_rate: self.interest_rate,
            total_deposits: self.total_deposits(),
            total_withdrawals: self.total_withdrawals(),
            transaction_count: self.history.len(),
        }
    }

    /// Render the account report as multi-line text and log a "report
    /// generated" activity.
    pub fn generate_account_report(&self) -> String {
        let report = self.report();
        self.log_activity("Account report generated");
        report.to_string()
    }

    // ========================
    // Internal helpers
    // ========================

    fn record(&mut self, kind: TransactionKind, amount: Amount, description: String) {
        self.history
            .push(Transaction::new(kind, amount, self.balance, description));
    }

    fn insufficient_funds(&self, requested: Amount) -> AccountError {
        AccountError::InsufficientFunds {
            balance: self.balance,
            requested,
            min_balance: self.min_balance,
        }
    }

    fn require_positive_amount(amount: Amount) -> Result<(), AccountError> {
        if amount <= 0.0 {
            return Err(AccountError::InvalidAmount(format!(
                "amount must be positive, got {}",
                format_amount(amount)
            )));
        }
        Ok(())
    }

    fn log_activity(&self, activity: &str) {
        if let Some(notifier) = &self.notifier {
            notifier.log_activity(self.id, activity);
        }
    }

    fn send_email(&self, subject: &str, body: &str) {
        if let (Some(notifier), Some(email)) = (&self.notifier, &self.holder_email) {
            notifier.send_email(email, subject, body);
        }
    }

    fn send_sms(&self, body: &str) {
        if let (Some(notifier), Some(phone)) = (&self.notifier, &self.holder_phone) {
            notifier.send_sms(phone, body);
        }
    }
}
