use async_trait::async_trait;

use super::transactions_model::{NewTransaction, Transaction};
use crate::Result;

/// Trait defining the contract for the append-only transaction store.
///
/// The store owns persistence and any business rules applied at write time
/// (plan limits, ownership checks). The aggregation engine only ever reads
/// the full history back and recomputes from scratch.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Returns every transaction recorded for the user. Ordering is not
    /// guaranteed by the store; callers must sort.
    fn get_transactions(&self, user_id: &str) -> Result<Vec<Transaction>>;

    /// Persists a new transaction and returns the stored row.
    async fn create_transaction(
        &self,
        user_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<Transaction>;

    /// Removes all transactions for the symbol. There is no selective or
    /// partial delete. Returns the number of rows removed.
    async fn delete_transactions_for_symbol(&self, user_id: &str, symbol: &str) -> Result<usize>;
}
