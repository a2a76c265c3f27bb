use tracing::{info, instrument};

use crate::{
    config::RewardsConfig,
    error::{Error, Result},
    models::{
        plan::Plan,
        points::Wallet,
        subscription::PaymentMethod,
    },
};

pub struct PointsService {
    config: RewardsConfig,
}

impl PointsService {
    pub fn new(config: &RewardsConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Estimate cashback points for a purchase price.
    ///
    /// `floor(price / points_per_peso)`, scaled by the first-purchase
    /// multiplier (and floored again) when applicable. Matches the estimate
    /// shown next to plan prices in the catalog.
    pub fn estimate_points(&self, price: f64, is_first_purchase: bool) -> i64 {
        let mut points = (price / self.config.points_per_peso as f64).floor() as i64;
        if is_first_purchase {
            points = (points as f64 * self.config.first_purchase_multiplier).floor() as i64;
        }
        points
    }

    /// Grant a plan's fixed cashback points into a wallet after a validated
    /// purchase. Purchases paid with points never earn points.
    #[instrument(skip(self, wallet, plan), fields(plan = %plan.name))]
    pub fn award_purchase_points(
        &self,
        wallet: &mut Wallet,
        plan: &Plan,
        payment_method: PaymentMethod,
        is_first_purchase: bool,
    ) -> i64 {
        if payment_method == PaymentMethod::Points {
            info!("No cashback for point-funded purchase");
            return 0;
        }
        let points = plan.purchase_points(is_first_purchase);
        wallet.earn(
            points,
            format!("Cashback for {} - {}", plan.service_name, plan.name),
        );
        info!(
            points = points,
            first_purchase = is_first_purchase,
            "Granted purchase cashback"
        );
        points
    }

    /// Redeem points from a wallet, enforcing the configured minimum
    /// redemption amount.
    #[instrument(skip(self, wallet))]
    pub fn redeem(
        &self,
        wallet: &mut Wallet,
        amount: i64,
        description: impl Into<String> + std::fmt::Debug,
    ) -> Result<()> {
        if amount < self.config.min_redeem_points {
            return Err(Error::BelowMinimumRedemption {
                requested: amount,
                minimum: self.config.min_redeem_points,
            });
        }
        wallet.redeem(amount, description)?;
        info!(amount = amount, remaining = wallet.available_points, "Redeemed points");
        Ok(())
    }
}
