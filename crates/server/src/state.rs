use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::accounts::{
    repo::seaorm::SeaOrmAccountRepository, AccountRepository, AccountService, BankAccountMapper,
};

/// Shared router state. Cloning is cheap; the service sits behind an `Arc`.
#[derive(Clone)]
pub struct ServerState {
    pub accounts: Arc<AccountService<dyn AccountRepository>>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn AccountRepository>) -> Self {
        Self { accounts: Arc::new(AccountService::new(repo, BankAccountMapper::new())) }
    }

    pub fn with_database(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmAccountRepository::new(db)))
    }
}
