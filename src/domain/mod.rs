mod account;
mod error;
mod money;
mod notifier;
mod rates;
mod reporting;
mod transaction;

pub use account::*;
pub use error::*;
pub use money::*;
pub use notifier::*;
pub use rates::*;
pub use reporting::*;
pub use transaction::*;
