use streampoint::{
    config::ExpiryConfig,
    models::{
        plan::BillingPeriod,
        subscription::{ExpiryTier, PaymentMethod, Subscription, SubscriptionStatus},
    },
    services::SubscriptionService,
    Error,
};
use time::macros::{date, datetime};

use crate::sample_plan;

fn service() -> SubscriptionService {
    SubscriptionService::new(&ExpiryConfig::default())
}

#[test]
fn test_expiration_for_each_period() {
    let service = service();
    let start = date!(2024 - 01 - 01);
    assert_eq!(
        service.expiration_date(start, BillingPeriod::Monthly),
        date!(2024 - 01 - 31)
    );
    assert_eq!(
        service.expiration_date(start, BillingPeriod::Quarterly),
        date!(2024 - 03 - 31)
    );
    assert_eq!(
        service.expiration_date(start, BillingPeriod::Semiannual),
        date!(2024 - 06 - 29)
    );
    assert_eq!(
        service.expiration_date(start, BillingPeriod::Annual),
        date!(2024 - 12 - 31)
    );
}

#[test]
fn test_unknown_code_behaves_like_mensual() {
    let service = service();
    let start = date!(2024 - 01 - 01);
    assert_eq!(
        service.expiration_from_code(start, "desconocido"),
        service.expiration_from_code(start, "mensual")
    );
}

#[test]
fn test_days_remaining_rounds_partial_days_up() {
    let service = service();
    let now = datetime!(2024-01-01 12:00 UTC);
    assert_eq!(service.days_remaining(datetime!(2024-01-02 11:00 UTC), now), 1);
    assert_eq!(service.days_remaining(datetime!(2024-01-02 12:00 UTC), now), 1);
    assert_eq!(service.days_remaining(datetime!(2024-01-02 13:00 UTC), now), 2);
}

#[test]
fn test_days_remaining_negative_when_expired() {
    let service = service();
    let now = datetime!(2024-02-01 0:00 UTC);
    assert!(service.days_remaining(datetime!(2024-01-15 0:00 UTC), now) < 0);
    assert!(service.days_remaining(datetime!(2024-02-10 0:00 UTC), now) > 0);
}

#[test]
fn test_expiry_tier_boundaries() {
    let service = service();
    assert_eq!(service.expiry_tier(-1), ExpiryTier::Expired);
    assert_eq!(service.expiry_tier(0), ExpiryTier::Warning);
    assert_eq!(service.expiry_tier(7), ExpiryTier::Warning);
    assert_eq!(service.expiry_tier(8), ExpiryTier::Ok);
}

#[test]
fn test_activation_lifecycle() {
    let service = service();
    let mut sub = Subscription::new(
        sample_plan(BillingPeriod::Monthly),
        date!(2024 - 01 - 01),
        PaymentMethod::Card,
        38_900,
        true,
        "user@example.com",
    );

    assert_eq!(sub.status, SubscriptionStatus::Pending);
    service.activate(&mut sub).unwrap();
    assert_eq!(sub.status, SubscriptionStatus::Active);
    assert!(sub.is_active(date!(2024 - 01 - 15)));

    // Activating twice is an error
    let err = service.activate(&mut sub).unwrap_err();
    assert!(matches!(err, Error::InvalidState(_)));
}

#[test]
fn test_renewal_extends_from_current_expiration() {
    let service = service();
    let mut sub = Subscription::new(
        sample_plan(BillingPeriod::Monthly),
        date!(2024 - 01 - 01),
        PaymentMethod::Card,
        38_900,
        false,
        "user@example.com",
    );
    service.activate(&mut sub).unwrap();

    // Renewing before expiration stacks onto the remaining time
    service.renew(&mut sub, date!(2024 - 01 - 20)).unwrap();
    assert_eq!(sub.expiration_date, date!(2024 - 03 - 01));
}

#[test]
fn test_renewal_after_lapse_runs_from_today() {
    let service = service();
    let mut sub = Subscription::new(
        sample_plan(BillingPeriod::Monthly),
        date!(2024 - 01 - 01),
        PaymentMethod::Cash,
        38_900,
        false,
        "user@example.com",
    );
    service.activate(&mut sub).unwrap();

    service.renew(&mut sub, date!(2024 - 06 - 01)).unwrap();
    assert_eq!(sub.expiration_date, date!(2024 - 07 - 01));
}

#[test]
fn test_cancelled_subscriptions_cannot_renew() {
    let service = service();
    let mut sub = Subscription::new(
        sample_plan(BillingPeriod::Monthly),
        date!(2024 - 01 - 01),
        PaymentMethod::Card,
        38_900,
        false,
        "user@example.com",
    );
    sub.status = SubscriptionStatus::Cancelled;

    let err = service.renew(&mut sub, date!(2024 - 02 - 01)).unwrap_err();
    assert!(matches!(err, Error::InvalidState(_)));
}
