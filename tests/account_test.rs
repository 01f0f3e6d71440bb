mod common;

use anyhow::Result;
use common::{Notification, RecordingNotifier, close};
use conto::domain::{Account, AccountError, DEFAULT_DAILY_WITHDRAW_LIMIT, MIN_BALANCE};

#[test]
fn test_account_defaults() {
    let account = Account::new(500.0);
    assert!(close(account.balance(), 500.0));
    assert!(close(account.min_balance(), MIN_BALANCE));
    assert!(close(
        account.daily_withdraw_limit(),
        DEFAULT_DAILY_WITHDRAW_LIMIT
    ));
    assert!(account.transaction_history().is_empty());
}

#[test]
fn test_deposit_and_withdraw_log_activity() -> Result<()> {
    let notifier = RecordingNotifier::new();
    let mut account = Account::new(1_000.0).with_notifier(notifier.clone());

    account.deposit(200.0);
    account.withdraw(150.0)?;

    let activities = notifier.activities();
    assert_eq!(activities.len(), 2);
    assert!(activities[0].contains("Deposited 200.00"));
    assert!(activities[1].contains("Withdrew 150.00"));
    Ok(())
}

#[test]
fn test_activity_carries_account_id() {
    let notifier = RecordingNotifier::new();
    let mut account = Account::new(0.0).with_notifier(notifier.clone());

    account.deposit(10.0);

    match &notifier.sent()[0] {
        Notification::Activity { account_id, .. } => assert_eq!(*account_id, account.id()),
        other => panic!("expected activity notification, got {other:?}"),
    }
}

#[test]
fn test_large_deposit_sends_email_to_holder() {
    let notifier = RecordingNotifier::new();
    let mut account = Account::new(0.0)
        .with_notifier(notifier.clone())
        .with_holder_email("holder@example.com");

    account.deposit(60_000.0);

    let sent = notifier.sent();
    let email = sent
        .iter()
        .find(|n| matches!(n, Notification::Email { .. }))
        .expect("large deposit should send an email");
    match email {
        Notification::Email { to, body, .. } => {
            assert_eq!(to, "holder@example.com");
            assert!(body.contains("60000.00"));
        }
        _ => unreachable!(),
    }
}

#[test]
fn test_deposit_at_threshold_sends_no_email() {
    let notifier = RecordingNotifier::new();
    let mut account = Account::new(0.0)
        .with_notifier(notifier.clone())
        .with_holder_email("holder@example.com");

    account.deposit(50_000.0);

    assert_eq!(notifier.email_count(), 0);
}

#[test]
fn test_large_deposit_without_email_contact_skips_alert() {
    let notifier = RecordingNotifier::new();
    let mut account = Account::new(0.0).with_notifier(notifier.clone());

    account.deposit(60_000.0);

    assert_eq!(notifier.email_count(), 0);
    // The activity log still fires.
    assert_eq!(notifier.activities().len(), 1);
}

#[test]
fn test_large_withdrawal_sends_sms_to_holder() -> Result<()> {
    let notifier = RecordingNotifier::new();
    let mut account = Account::new(20_000.0)
        .with_notifier(notifier.clone())
        .with_holder_phone("+3912345678");

    account.withdraw(6_000.0)?;

    let sent = notifier.sent();
    let sms = sent
        .iter()
        .find(|n| matches!(n, Notification::Sms { .. }))
        .expect("large withdrawal should send an SMS");
    match sms {
        Notification::Sms { to, body } => {
            assert_eq!(to, "+3912345678");
            assert!(body.contains("6000.00"));
        }
        _ => unreachable!(),
    }
    Ok(())
}

#[test]
fn test_interest_never_triggers_large_amount_alerts() -> Result<()> {
    let notifier = RecordingNotifier::new();
    // Balance large enough that a year of interest exceeds both alert
    // thresholds.
    let mut account = Account::new(5_000_000.0)
        .with_notifier(notifier.clone())
        .with_holder_email("holder@example.com")
        .with_holder_phone("+3912345678");

    let interest = account.apply_interest(365)?;

    assert!(interest > 50_000.0);
    assert_eq!(notifier.email_count(), 0);
    assert_eq!(notifier.sms_count(), 0);
    assert_eq!(notifier.activities().len(), 1);
    Ok(())
}

#[test]
fn test_ledger_behaves_identically_without_notifier() -> Result<()> {
    let notifier = RecordingNotifier::new();
    let mut observed = Account::new(1_000.0)
        .with_notifier(notifier)
        .with_holder_email("holder@example.com");
    let mut silent = Account::new(1_000.0);

    for account in [&mut observed, &mut silent] {
        account.deposit(60_000.0);
        account.withdraw(250.0)?;
        account.apply_interest(30)?;
    }

    assert!(close(observed.balance(), silent.balance()));
    assert_eq!(
        observed.transaction_history().len(),
        silent.transaction_history().len()
    );
    Ok(())
}

#[test]
fn test_daily_limit_is_adjustable() -> Result<()> {
    let mut account = Account::new(10_000.0).with_daily_withdraw_limit(100.0);

    assert!(matches!(
        account.withdraw(150.0),
        Err(AccountError::DailyLimitExceeded { .. })
    ));

    account.set_daily_withdraw_limit(200.0);
    account.withdraw(150.0)?;
    assert!(close(account.balance(), 9_850.0));
    Ok(())
}

#[test]
fn test_limit_error_reports_usage() {
    let mut account = Account::new(50_000.0);
    account.withdraw(4_000.0).unwrap();

    match account.withdraw(7_000.0) {
        Err(AccountError::DailyLimitExceeded {
            limit,
            withdrawn_today,
            requested,
        }) => {
            assert!(close(limit, 10_000.0));
            assert!(close(withdrawn_today, 4_000.0));
            assert!(close(requested, 7_000.0));
        }
        other => panic!("expected DailyLimitExceeded, got {other:?}"),
    }
}
