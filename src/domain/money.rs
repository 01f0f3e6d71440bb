/// Amounts are plain floating-point values in the account's native
/// currency. Currency conversion and simple interest both produce
/// fractional amounts, so no integer-cents representation is used.
pub type Amount = f64;

/// Format an amount with two decimal places.
/// Example: 5000.0 -> "5000.00", -12.345 -> "-12.35"
pub fn format_amount(amount: Amount) -> String {
    format!("{:.2}", amount)
}
