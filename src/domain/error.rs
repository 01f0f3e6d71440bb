use thiserror::Error;

use super::Amount;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccountError {
    #[error(
        "Insufficient funds: balance {balance:.2} cannot cover {requested:.2} while keeping the {min_balance:.2} minimum"
    )]
    InsufficientFunds {
        balance: Amount,
        requested: Amount,
        min_balance: Amount,
    },

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error(
        "Daily withdrawal limit exceeded: {withdrawn_today:.2} of {limit:.2} already used, requested {requested:.2}"
    )]
    DailyLimitExceeded {
        limit: Amount,
        withdrawn_today: Amount,
        requested: Amount,
    },
}
