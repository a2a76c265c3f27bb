use time::{Date, Duration, OffsetDateTime};
use tracing::{info, instrument};

use crate::{
    config::ExpiryConfig,
    error::{Error, Result},
    models::{
        plan::BillingPeriod,
        subscription::{ExpiryTier, Subscription, SubscriptionStatus},
    },
};

const MILLIS_PER_DAY: i128 = 86_400_000;

pub struct SubscriptionService {
    config: ExpiryConfig,
}

impl SubscriptionService {
    pub fn new(config: &ExpiryConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Expiration date for a period starting at `start`.
    pub fn expiration_date(&self, start: Date, period: BillingPeriod) -> Date {
        start + Duration::days(period.days())
    }

    /// Expiration date from a raw period code out of page markup. An
    /// unrecognized code behaves like `mensual`.
    pub fn expiration_from_code(&self, start: Date, code: &str) -> Date {
        self.expiration_date(start, BillingPeriod::from_code_or_default(code))
    }

    /// Whole days until `expires_at`, rounding partial days up. Negative
    /// means already expired.
    pub fn days_remaining(&self, expires_at: OffsetDateTime, now: OffsetDateTime) -> i64 {
        let ms = (expires_at - now).whole_milliseconds();
        let days = if ms % MILLIS_PER_DAY > 0 {
            ms / MILLIS_PER_DAY + 1
        } else {
            ms / MILLIS_PER_DAY
        };
        days as i64
    }

    /// Badge tier for a days-remaining count.
    pub fn expiry_tier(&self, days_remaining: i64) -> ExpiryTier {
        if days_remaining < 0 {
            ExpiryTier::Expired
        } else if days_remaining <= self.config.warning_days {
            ExpiryTier::Warning
        } else {
            ExpiryTier::Ok
        }
    }

    /// Mark a pending subscription as validated and active.
    #[instrument(skip(self, subscription), fields(service = %subscription.plan.service_name))]
    pub fn activate(&self, subscription: &mut Subscription) -> Result<()> {
        if subscription.status != SubscriptionStatus::Pending {
            return Err(Error::InvalidState(format!(
                "Cannot activate a {} subscription",
                subscription.status.as_str()
            )));
        }
        subscription.status = SubscriptionStatus::Active;
        info!(
            expires = %subscription.expiration_date,
            "Activated subscription"
        );
        Ok(())
    }

    /// Extend a subscription by one billing period. Extension runs from the
    /// current expiration while the subscription is still active, otherwise
    /// from `today`.
    #[instrument(skip(self, subscription), fields(service = %subscription.plan.service_name))]
    pub fn renew(&self, subscription: &mut Subscription, today: Date) -> Result<()> {
        if subscription.status == SubscriptionStatus::Cancelled {
            return Err(Error::InvalidState(
                "Cannot renew a cancelled subscription".to_string(),
            ));
        }
        let base = subscription.expiration_date.max(today);
        subscription.expiration_date = base + Duration::days(subscription.plan.period.days());
        subscription.status = SubscriptionStatus::Active;
        info!(
            expires = %subscription.expiration_date,
            "Renewed subscription"
        );
        Ok(())
    }
}
