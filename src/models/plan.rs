use serde::{Deserialize, Serialize};

/// Days in a monthly billing period.
pub const MONTHLY_DAYS: i64 = 30;
/// Days in a quarterly billing period.
pub const QUARTERLY_DAYS: i64 = 90;
/// Days in a semiannual billing period.
pub const SEMIANNUAL_DAYS: i64 = 180;
/// Days in an annual billing period.
pub const ANNUAL_DAYS: i64 = 365;

/// Subscription billing period. Wire codes are the Spanish keywords carried
/// in page markup (`mensual`, `trimestral`, `semestral`, `anual`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingPeriod {
    #[serde(rename = "mensual")]
    Monthly,
    #[serde(rename = "trimestral")]
    Quarterly,
    #[serde(rename = "semestral")]
    Semiannual,
    #[serde(rename = "anual")]
    Annual,
}

impl BillingPeriod {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mensual" => Some(Self::Monthly),
            "trimestral" => Some(Self::Quarterly),
            "semestral" => Some(Self::Semiannual),
            "anual" => Some(Self::Annual),
            _ => None,
        }
    }

    /// Lenient variant: an unrecognized code falls back to `Monthly`.
    /// This mirrors the historical site behavior; callers wanting a hard
    /// failure should use [`BillingPeriod::from_code`].
    pub fn from_code_or_default(s: &str) -> Self {
        match Self::from_code(s) {
            Some(period) => period,
            None => {
                tracing::warn!(code = s, "Unknown billing period code, defaulting to mensual");
                Self::Monthly
            }
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Monthly => "mensual",
            Self::Quarterly => "trimestral",
            Self::Semiannual => "semestral",
            Self::Annual => "anual",
        }
    }

    /// Duration of the period in days.
    pub fn days(&self) -> i64 {
        match self {
            Self::Monthly => MONTHLY_DAYS,
            Self::Quarterly => QUARTERLY_DAYS,
            Self::Semiannual => SEMIANNUAL_DAYS,
            Self::Annual => ANNUAL_DAYS,
        }
    }
}

/// A purchasable subscription plan for a streaming service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub service_name: String,
    pub name: String,
    /// Price in whole COP; no fractional currency subunits are used.
    pub price: i64,
    pub period: BillingPeriod,
    #[serde(default)]
    pub features: Vec<String>,
    pub first_purchase_points: i64,
    pub renewal_points: i64,
    pub active: bool,
}

impl Plan {
    /// Points granted on purchase, according to whether this is the buyer's
    /// first purchase.
    pub fn purchase_points(&self, is_first_purchase: bool) -> i64 {
        if is_first_purchase {
            self.first_purchase_points
        } else {
            self.renewal_points
        }
    }
}
