use serde::{Deserialize, Serialize};
use time::Date;

use super::plan::Plan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Pending,
    Active,
    Expired,
    Cancelled,
}

impl SubscriptionStatus {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "active" => Some(Self::Active),
            "expired" => Some(Self::Expired),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Expired => "expired",
            Self::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Pse,
    Cash,
    Points,
}

impl PaymentMethod {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "card" => Some(Self::Card),
            "pse" => Some(Self::Pse),
            "cash" => Some(Self::Cash),
            "points" => Some(Self::Points),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Pse => "pse",
            Self::Cash => "cash",
            Self::Points => "points",
        }
    }
}

/// Badge tier for the days-remaining indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryTier {
    /// Past the expiration date.
    Expired,
    /// Within the configured warning window (7 days by default).
    Warning,
    /// Comfortably before expiration.
    Ok,
}

/// A user's purchase of a plan for a streaming service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub plan: Plan,
    pub start_date: Date,
    pub expiration_date: Date,
    pub status: SubscriptionStatus,
    pub payment_method: PaymentMethod,
    /// Amount paid in whole COP.
    pub amount_paid: i64,
    /// Cashback points granted for this purchase, zero until validated.
    pub points_granted: i64,
    pub is_first_purchase: bool,
    /// Email used on the streaming service itself.
    pub service_email: String,
}

impl Subscription {
    /// Create a pending subscription; the expiration date is derived from the
    /// plan's billing period.
    pub fn new(
        plan: Plan,
        start_date: Date,
        payment_method: PaymentMethod,
        amount_paid: i64,
        is_first_purchase: bool,
        service_email: impl Into<String>,
    ) -> Self {
        let expiration_date = start_date + time::Duration::days(plan.period.days());
        Self {
            plan,
            start_date,
            expiration_date,
            status: SubscriptionStatus::Pending,
            payment_method,
            amount_paid,
            points_granted: 0,
            is_first_purchase,
            service_email: service_email.into(),
        }
    }

    /// Active status and not past the expiration date.
    pub fn is_active(&self, today: Date) -> bool {
        self.status == SubscriptionStatus::Active && self.expiration_date >= today
    }

    /// Whole days until expiration, clamped at zero once expired.
    pub fn days_until_expiration(&self, today: Date) -> i64 {
        (self.expiration_date - today).whole_days().max(0)
    }
}
