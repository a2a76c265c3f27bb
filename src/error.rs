#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Insufficient points: need {requested}, have {available}")]
    InsufficientPoints { requested: i64, available: i64 },

    #[error("Redemption below minimum: {requested} points (minimum {minimum})")]
    BelowMinimumRedemption { requested: i64, minimum: i64 },

    #[error("Invalid subscription state: {0}")]
    InvalidState(String),

    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

// Helper type for results
pub type Result<T> = std::result::Result<T, Error>;
