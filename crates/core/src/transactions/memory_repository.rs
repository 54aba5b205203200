//! In-memory transaction store, keyed by user.
//!
//! Reference implementation of [`TransactionRepositoryTrait`] for embedding
//! and tests. Production deployments put a real backend behind the trait.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::transactions_model::{NewTransaction, Transaction};
use super::transactions_traits::TransactionRepositoryTrait;
use crate::errors::{Error, Result};

#[derive(Default)]
pub struct InMemoryTransactionRepository {
    transactions: RwLock<HashMap<String, Vec<Transaction>>>,
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionRepositoryTrait for InMemoryTransactionRepository {
    fn get_transactions(&self, user_id: &str) -> Result<Vec<Transaction>> {
        let guard = self
            .transactions
            .read()
            .map_err(|e| Error::Repository(format!("Transaction store lock poisoned: {}", e)))?;
        Ok(guard.get(user_id).cloned().unwrap_or_default())
    }

    async fn create_transaction(
        &self,
        user_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<Transaction> {
        new_transaction.validate()?;

        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            symbol: new_transaction.symbol,
            quantity: new_transaction.quantity,
            price: new_transaction.price,
            transaction_type: new_transaction.transaction_type,
            transaction_date: new_transaction.transaction_date,
            created_at: Utc::now(),
        };

        let mut guard = self
            .transactions
            .write()
            .map_err(|e| Error::Repository(format!("Transaction store lock poisoned: {}", e)))?;
        guard
            .entry(user_id.to_string())
            .or_default()
            .push(transaction.clone());

        Ok(transaction)
    }

    async fn delete_transactions_for_symbol(&self, user_id: &str, symbol: &str) -> Result<usize> {
        let mut guard = self
            .transactions
            .write()
            .map_err(|e| Error::Repository(format!("Transaction store lock poisoned: {}", e)))?;

        let Some(rows) = guard.get_mut(user_id) else {
            return Ok(0);
        };
        let before = rows.len();
        rows.retain(|tx| tx.symbol != symbol);
        Ok(before - rows.len())
    }
}
