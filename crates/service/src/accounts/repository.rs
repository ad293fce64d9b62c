use async_trait::async_trait;
use models::bank_account;

use crate::errors::ServiceError;

/// Persistence contract for account records.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<bank_account::Model>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<bank_account::Model>, ServiceError>;
    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError>;
    /// Inserts when `id` is unset, otherwise overwrites the row with that id.
    /// Overwriting a row that no longer exists yields `ServiceError::NotFound`.
    async fn save(&self, account: bank_account::ActiveModel) -> Result<bank_account::Model, ServiceError>;
    /// Returns true if a row was removed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError>;
}

/// In-memory repository for tests, doc examples and running without a database
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    struct Inner {
        last_id: i64,
        rows: BTreeMap<i64, bank_account::Model>,
    }

    #[derive(Default)]
    pub struct InMemoryAccountRepository {
        inner: Mutex<Inner>,
    }

    impl InMemoryAccountRepository {
        pub fn new() -> Self { Self::default() }

        fn lock(&self) -> Result<MutexGuard<'_, Inner>, ServiceError> {
            self.inner.lock().map_err(|_| ServiceError::Db("in-memory store poisoned".into()))
        }
    }

    #[async_trait]
    impl AccountRepository for InMemoryAccountRepository {
        async fn find_all(&self) -> Result<Vec<bank_account::Model>, ServiceError> {
            Ok(self.lock()?.rows.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<bank_account::Model>, ServiceError> {
            Ok(self.lock()?.rows.get(&id).cloned())
        }

        async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.lock()?.rows.contains_key(&id))
        }

        async fn save(&self, account: bank_account::ActiveModel) -> Result<bank_account::Model, ServiceError> {
            let mut inner = self.lock()?;
            let id = match bank_account::assigned_id(&account) {
                Some(id) if inner.rows.contains_key(&id) => id,
                Some(id) => return Err(ServiceError::NotFound(id)),
                None => {
                    inner.last_id += 1;
                    inner.last_id
                }
            };
            let row = bank_account::materialize(account, id)?;
            inner.rows.insert(id, row.clone());
            Ok(row)
        }

        async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.lock()?.rows.remove(&id).is_some())
        }
    }

}
