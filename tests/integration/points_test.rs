use streampoint::{
    config::RewardsConfig,
    models::{plan::BillingPeriod, points::Wallet, subscription::PaymentMethod},
    services::PointsService,
    Error,
};

use crate::sample_plan;

fn service() -> PointsService {
    PointsService::new(&RewardsConfig::default())
}

#[test]
fn test_estimate_floors_price_division() {
    let service = service();
    assert_eq!(service.estimate_points(100.0, false), 10);
    assert_eq!(service.estimate_points(105.0, false), 10);
    assert_eq!(service.estimate_points(109.9, false), 10);
}

#[test]
fn test_estimate_first_purchase_multiplier_floors_again() {
    let service = service();
    assert_eq!(service.estimate_points(100.0, true), 15);
    // 110 / 10 = 11, * 1.5 = 16.5, floored to 16
    assert_eq!(service.estimate_points(110.0, true), 16);
}

#[test]
fn test_estimate_honors_configured_rules() {
    let config = RewardsConfig {
        points_per_peso: 20,
        first_purchase_multiplier: 2.0,
        min_redeem_points: 100,
    };
    let service = PointsService::new(&config);
    assert_eq!(service.estimate_points(100.0, false), 5);
    assert_eq!(service.estimate_points(100.0, true), 10);
}

#[test]
fn test_award_grants_plan_points_into_wallet() {
    let service = service();
    let plan = sample_plan(BillingPeriod::Monthly);
    let mut wallet = Wallet::new();

    let first = service.award_purchase_points(&mut wallet, &plan, PaymentMethod::Card, true);
    let renewal = service.award_purchase_points(&mut wallet, &plan, PaymentMethod::Pse, false);

    assert_eq!(first, 100);
    assert_eq!(renewal, 50);
    assert_eq!(wallet.available_points, 150);
    assert_eq!(wallet.ledger.len(), 2);
}

#[test]
fn test_point_funded_purchases_earn_nothing() {
    let service = service();
    let plan = sample_plan(BillingPeriod::Monthly);
    let mut wallet = Wallet::new();

    let granted = service.award_purchase_points(&mut wallet, &plan, PaymentMethod::Points, true);

    assert_eq!(granted, 0);
    assert_eq!(wallet.available_points, 0);
    assert!(wallet.ledger.is_empty());
}

#[test]
fn test_redeem_enforces_minimum() {
    let service = service();
    let mut wallet = Wallet::new();
    wallet.earn(1000, "cashback");

    let err = service.redeem(&mut wallet, 300, "canje").unwrap_err();
    assert!(matches!(
        err,
        Error::BelowMinimumRedemption {
            requested: 300,
            minimum: 500
        }
    ));

    service.redeem(&mut wallet, 500, "canje").unwrap();
    assert_eq!(wallet.available_points, 500);
}

#[test]
fn test_redeem_rejects_overdraw() {
    let service = service();
    let mut wallet = Wallet::new();
    wallet.earn(600, "cashback");

    let err = service.redeem(&mut wallet, 700, "canje").unwrap_err();
    assert!(matches!(err, Error::InsufficientPoints { .. }));
    assert_eq!(wallet.available_points, 600);
}
