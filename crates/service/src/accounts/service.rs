use std::sync::Arc;

use sea_orm::{NotSet, Set};
use tracing::{info, instrument};

use models::bank_account;
use super::domain::BankAccountDto;
use super::mapper::BankAccountMapper;
use super::repository::AccountRepository;
use crate::errors::ServiceError;

/// Account business service independent of web framework.
///
/// Every record is either absent or present: `create_account` is the only way
/// in and `delete_account` the only way out.
pub struct AccountService<R: AccountRepository + ?Sized> {
    repo: Arc<R>,
    mapper: BankAccountMapper,
}

impl<R: AccountRepository + ?Sized> AccountService<R> {
    pub fn new(repo: Arc<R>, mapper: BankAccountMapper) -> Self { Self { repo, mapper } }

    /// All accounts in store order.
    pub async fn list_accounts(&self) -> Result<Vec<BankAccountDto>, ServiceError> {
        let rows = self.repo.find_all().await?;
        Ok(rows.iter().map(|m| self.mapper.to_dto(m)).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_account(&self, id: i64) -> Result<BankAccountDto, ServiceError> {
        let found = self.repo.find_by_id(id).await?.ok_or(ServiceError::NotFound(id))?;
        Ok(self.mapper.to_dto(&found))
    }

    /// Persist a new account. Any `id` on the input is discarded.
    ///
    /// # Examples
    /// ```
    /// use service::accounts::{AccountService, BankAccountDto, BankAccountMapper};
    /// use service::accounts::repository::memory::InMemoryAccountRepository;
    /// use std::sync::Arc;
    /// let svc = AccountService::new(Arc::new(InMemoryAccountRepository::new()), BankAccountMapper::new());
    /// let mut input = BankAccountDto::new("98765", "Holder", "5000.00".parse().unwrap());
    /// input.id = Some(42);
    /// let created = tokio_test::block_on(svc.create_account(input)).unwrap();
    /// assert_eq!(created.id, Some(1));
    /// assert_eq!(created.account_number, "98765");
    /// ```
    #[instrument(skip(self, input), fields(account_number = %input.account_number))]
    pub async fn create_account(&self, input: BankAccountDto) -> Result<BankAccountDto, ServiceError> {
        let mut am = self.mapper.to_entity(&input);
        am.id = NotSet;
        let saved = self.repo.save(am).await?;
        info!(id = saved.id, "account_created");
        Ok(self.mapper.to_dto(&saved))
    }

    /// Replace every mutable field of an existing account. The path id wins
    /// over any id carried by `input`.
    ///
    /// # Examples
    /// ```
    /// use service::accounts::{AccountService, BankAccountDto, BankAccountMapper};
    /// use service::accounts::repository::memory::InMemoryAccountRepository;
    /// use std::sync::Arc;
    /// let svc = AccountService::new(Arc::new(InMemoryAccountRepository::new()), BankAccountMapper::new());
    /// let err = tokio_test::block_on(svc.update_account(7, BankAccountDto::new("1", "A", "1".parse().unwrap()))).unwrap_err();
    /// assert!(err.is_not_found());
    /// ```
    #[instrument(skip(self, input))]
    pub async fn update_account(&self, id: i64, input: BankAccountDto) -> Result<BankAccountDto, ServiceError> {
        let existing = self.repo.find_by_id(id).await?.ok_or(ServiceError::NotFound(id))?;
        let mut am: bank_account::ActiveModel = existing.into();
        am.account_number = Set(input.account_number);
        am.account_holder_name = Set(input.account_holder_name);
        am.balance = Set(input.balance);
        let updated = self.repo.save(am).await?;
        info!(id = updated.id, "account_updated");
        Ok(self.mapper.to_dto(&updated))
    }

    /// Remove an account. Deleting twice fails the second time.
    #[instrument(skip(self))]
    pub async fn delete_account(&self, id: i64) -> Result<(), ServiceError> {
        // Single conditional DELETE; the affected-row count decides NotFound.
        if !self.repo.delete_by_id(id).await? {
            return Err(ServiceError::NotFound(id));
        }
        info!(id, "account_deleted");
        Ok(())
    }
}
