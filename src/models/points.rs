use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Earned,
    Redeemed,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Earned => "earned",
            Self::Redeemed => "redeemed",
        }
    }
}

/// One entry in a wallet's ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsTransaction {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub amount: i64,
    pub description: String,
    pub occurred_at: OffsetDateTime,
}

/// A user's points balance with its transaction history.
///
/// `total_points` accumulates everything ever earned; `available_points`
/// is what can still be redeemed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub total_points: i64,
    pub available_points: i64,
    #[serde(default)]
    pub ledger: Vec<PointsTransaction>,
}

impl Wallet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add points to the wallet and record a ledger entry.
    pub fn earn(&mut self, amount: i64, description: impl Into<String>) {
        self.total_points += amount;
        self.available_points += amount;
        self.record(TransactionKind::Earned, amount, description.into());
    }

    /// Subtract points from the available balance and record a ledger entry.
    /// Fails without mutating the wallet when the balance is insufficient.
    pub fn redeem(&mut self, amount: i64, description: impl Into<String>) -> Result<()> {
        if amount > self.available_points {
            return Err(Error::InsufficientPoints {
                requested: amount,
                available: self.available_points,
            });
        }
        self.available_points -= amount;
        self.record(TransactionKind::Redeemed, amount, description.into());
        Ok(())
    }

    fn record(&mut self, kind: TransactionKind, amount: i64, description: String) {
        self.ledger.push(PointsTransaction {
            id: Uuid::new_v4(),
            kind,
            amount,
            description,
            occurred_at: OffsetDateTime::now_utc(),
        });
    }
}
