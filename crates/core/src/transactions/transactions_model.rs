//! Transaction domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// The side of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Buy,
    Sell,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Buy => "buy",
            TransactionType::Sell => "sell",
        }
    }
}

/// A persisted buy/sell record, immutable once created.
///
/// `price` is the unit cost basis for a buy and the unit sale proceeds for a
/// sell. `transaction_date` is used only for ordering and display; cost
/// accounting is a single running weighted average per symbol, so no lot
/// selection happens on this date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub symbol: String,
    pub quantity: Decimal,
    pub price: Decimal,
    pub transaction_type: TransactionType,
    pub transaction_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn is_buy(&self) -> bool {
        self.transaction_type == TransactionType::Buy
    }

    pub fn is_sell(&self) -> bool {
        self.transaction_type == TransactionType::Sell
    }

    /// Gross cash flow of the record (quantity × unit price).
    pub fn gross_amount(&self) -> Decimal {
        self.quantity * self.price
    }
}

/// Payload for creating a transaction. Id, owner, and audit timestamps are
/// assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub symbol: String,
    pub quantity: Decimal,
    pub price: Decimal,
    pub transaction_type: TransactionType,
    pub transaction_date: DateTime<Utc>,
}

impl NewTransaction {
    /// Validates the payload before it reaches the store.
    ///
    /// The aggregation engine itself tolerates odd data (see the calculator),
    /// so this is the single gate where malformed records are rejected.
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(ValidationError::MissingField("symbol".to_string()).into());
        }
        if self.quantity <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Transaction quantity must be positive, got {}",
                self.quantity
            ))
            .into());
        }
        if self.price <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Transaction price must be positive, got {}",
                self.price
            ))
            .into());
        }
        Ok(())
    }
}
