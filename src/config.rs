use serde::Deserialize;

/// Points granted per peso spent: 10 points = $1 COP.
pub const DEFAULT_POINTS_PER_PESO: i64 = 10;

/// Multiplier applied to the point estimate on a user's first purchase.
pub const DEFAULT_FIRST_PURCHASE_MULTIPLIER: f64 = 1.5;

/// Minimum number of points that can be redeemed in one transaction.
pub const DEFAULT_MIN_REDEEM_POINTS: i64 = 500;

/// Subscriptions with this many days or fewer remaining show a warning badge.
pub const DEFAULT_EXPIRY_WARNING_DAYS: i64 = 7;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rewards: RewardsConfig,
    pub expiry: ExpiryConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RewardsConfig {
    pub points_per_peso: i64,
    pub first_purchase_multiplier: f64,
    pub min_redeem_points: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExpiryConfig {
    pub warning_days: i64,
}

impl Default for RewardsConfig {
    fn default() -> Self {
        Self {
            points_per_peso: DEFAULT_POINTS_PER_PESO,
            first_purchase_multiplier: DEFAULT_FIRST_PURCHASE_MULTIPLIER,
            min_redeem_points: DEFAULT_MIN_REDEEM_POINTS,
        }
    }
}

impl Default for ExpiryConfig {
    fn default() -> Self {
        Self {
            warning_days: DEFAULT_EXPIRY_WARNING_DAYS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rewards: RewardsConfig::default(),
            expiry: ExpiryConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        // Load .env file if it exists (for environment variable overrides)
        dotenvy::dotenv().ok();

        // Build config from config.* (optional) with environment variable overrides
        let config = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("STREAMPOINT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
