use super::AccountId;

/// Outbound notification channels for account activity.
///
/// All three operations are fire-and-forget: the ledger never consumes
/// a result and notification failure never affects ledger state. An
/// account without a notifier behaves identically except that no calls
/// are made.
pub trait Notifier {
    fn send_email(&self, to: &str, subject: &str, body: &str);

    fn send_sms(&self, to: &str, body: &str);

    fn log_activity(&self, account_id: AccountId, activity: &str);
}
