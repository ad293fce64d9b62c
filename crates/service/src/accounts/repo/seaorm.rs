use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder};
use tracing::debug;

use models::bank_account::{self, Entity as BankAccountEntity};
use crate::accounts::repository::AccountRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
pub struct SeaOrmAccountRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmAccountRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl AccountRepository for SeaOrmAccountRepository {
    async fn find_all(&self) -> Result<Vec<bank_account::Model>, ServiceError> {
        let rows = BankAccountEntity::find()
            .order_by_asc(bank_account::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<bank_account::Model>, ServiceError> {
        Ok(BankAccountEntity::find_by_id(id).one(&self.db).await?)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let n = BankAccountEntity::find_by_id(id).count(&self.db).await?;
        Ok(n > 0)
    }

    async fn save(&self, account: bank_account::ActiveModel) -> Result<bank_account::Model, ServiceError> {
        match bank_account::assigned_id(&account) {
            None => Ok(account.insert(&self.db).await?),
            // UPDATE ... WHERE id = $1; zero affected rows means the record vanished.
            Some(id) => match account.update(&self.db).await {
                Ok(m) => Ok(m),
                Err(DbErr::RecordNotUpdated) => {
                    debug!(id, "update matched no row");
                    Err(ServiceError::NotFound(id))
                }
                Err(e) => Err(e.into()),
            },
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let res = BankAccountEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[tokio::test]
    async fn account_crud_repository() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmAccountRepository::new(db);

        let created = repo.save(bank_account::new_record("98765", "Repo Holder", Decimal::from_str("5000.00")?)).await?;
        assert!(repo.exists_by_id(created.id).await?);
        assert_eq!(repo.find_by_id(created.id).await?, Some(created.clone()));
        assert!(repo.find_all().await?.iter().any(|a| a.id == created.id));

        let mut am: bank_account::ActiveModel = created.clone().into();
        am.account_number = sea_orm::Set("55555".into());
        let updated = repo.save(am).await?;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.account_number, "55555");

        assert!(repo.delete_by_id(created.id).await?);
        assert!(!repo.delete_by_id(created.id).await?);
        assert!(!repo.exists_by_id(created.id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn saving_deleted_row_is_not_found() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmAccountRepository::new(db);

        let created = repo.save(bank_account::new_record("1", "Gone", Decimal::ONE)).await?;
        assert!(repo.delete_by_id(created.id).await?);

        let mut am: bank_account::ActiveModel = created.clone().into();
        am.account_holder_name = sea_orm::Set("Ghost".into());
        let err = repo.save(am).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(id) if id == created.id));
        Ok(())
    }
}
