use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;

use crate::portfolio::holdings::{compute_holdings, compute_performance, PortfolioSnapshot};
use crate::quotes::PriceOracleTrait;
use crate::transactions::{NewTransaction, TransactionRepositoryTrait};
use crate::Result;

/// Trait defining the contract for portfolio orchestration.
///
/// Every mutation follows the same discipline: forward the write to the
/// transaction store, then re-fetch the complete history and price map and
/// recompute both aggregates from scratch before anything becomes visible
/// to callers. No optimistic or partial update path exists. The underlying
/// calculators are pure and idempotent, so redundant re-runs are safe.
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    /// Runs one full fetch-and-recompute cycle for the user.
    async fn get_snapshot(&self, user_id: &str) -> Result<PortfolioSnapshot>;

    /// Persists a transaction, then recomputes the portfolio from the
    /// complete history.
    async fn add_transaction(
        &self,
        user_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<PortfolioSnapshot>;

    /// Removes every transaction for the symbol, then recomputes.
    async fn delete_symbol(&self, user_id: &str, symbol: &str) -> Result<PortfolioSnapshot>;
}

/// Orchestrates the transaction store, the price oracle, and the pure
/// calculators.
pub struct PortfolioService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    price_oracle: Arc<dyn PriceOracleTrait>,
}

impl PortfolioService {
    /// Creates a new PortfolioService instance with injected dependencies
    pub fn new(
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        price_oracle: Arc<dyn PriceOracleTrait>,
    ) -> Self {
        Self {
            transaction_repository,
            price_oracle,
        }
    }

    fn recompute(&self, user_id: &str) -> Result<PortfolioSnapshot> {
        let transactions = self.transaction_repository.get_transactions(user_id)?;

        // Closed-out symbols are requested too; a missing quote is harmless
        // and they never reach the holdings list anyway.
        let symbols: Vec<String> = transactions
            .iter()
            .map(|tx| tx.symbol.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let quotes = self.price_oracle.get_latest_quotes(&symbols)?;
        let prices: HashMap<String, Decimal> = quotes
            .into_iter()
            .map(|(symbol, quote)| (symbol, quote.price))
            .collect();

        let holdings = compute_holdings(&transactions, &prices);
        let performance = compute_performance(&transactions, &holdings);

        debug!(
            "Recomputed portfolio for user {}: {} open positions from {} transactions",
            user_id,
            holdings.len(),
            transactions.len()
        );

        Ok(PortfolioSnapshot {
            holdings,
            performance,
            as_of: Utc::now(),
        })
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn get_snapshot(&self, user_id: &str) -> Result<PortfolioSnapshot> {
        self.recompute(user_id)
    }

    async fn add_transaction(
        &self,
        user_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<PortfolioSnapshot> {
        new_transaction.validate()?;
        let transaction = self
            .transaction_repository
            .create_transaction(user_id, new_transaction)
            .await?;
        debug!(
            "Recorded {} of {} {} for user {}",
            transaction.transaction_type.as_str(),
            transaction.quantity,
            transaction.symbol,
            user_id
        );
        self.recompute(user_id)
    }

    async fn delete_symbol(&self, user_id: &str, symbol: &str) -> Result<PortfolioSnapshot> {
        let removed = self
            .transaction_repository
            .delete_transactions_for_symbol(user_id, symbol)
            .await?;
        debug!(
            "Deleted {} transactions for symbol {} (user {})",
            removed, symbol, user_id
        );
        self.recompute(user_id)
    }
}
