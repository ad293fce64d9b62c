use sea_orm::{entity::prelude::*, ActiveValue, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Stored shape of an account record.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bank_account")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub account_number: String,
    pub account_holder_name: String,
    #[sea_orm(column_type = "Decimal(Some((19, 2)))")]
    pub balance: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// An unsaved record: every mutable column set, `id` left to the database.
pub fn new_record(account_number: &str, account_holder_name: &str, balance: Decimal) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        account_number: Set(account_number.to_string()),
        account_holder_name: Set(account_holder_name.to_string()),
        balance: Set(balance),
    }
}

/// Returns the id if the active model already carries one.
pub fn assigned_id(am: &ActiveModel) -> Option<i64> {
    match &am.id {
        ActiveValue::Set(id) | ActiveValue::Unchanged(id) => Some(*id),
        ActiveValue::NotSet => None,
    }
}

/// Turn an active model into a stored row under the given id.
/// Every mutable column must be present.
pub fn materialize(am: ActiveModel, id: i64) -> Result<Model, ModelError> {
    fn take<V: Into<sea_orm::Value>>(v: ActiveValue<V>, column: &str) -> Result<V, ModelError> {
        match v {
            ActiveValue::Set(v) | ActiveValue::Unchanged(v) => Ok(v),
            ActiveValue::NotSet => Err(ModelError::Validation(format!("{column} is not set"))),
        }
    }
    Ok(Model {
        id,
        account_number: take(am.account_number, "account_number")?,
        account_holder_name: take(am.account_holder_name, "account_holder_name")?,
        balance: take(am.balance, "balance")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn new_record_leaves_id_unassigned() {
        let am = new_record("12345", "Test Holder", Decimal::from_str("1000.00").unwrap());
        assert_eq!(assigned_id(&am), None);
        let m = materialize(am, 7).unwrap();
        assert_eq!(m.id, 7);
        assert_eq!(m.account_number, "12345");
        assert_eq!(m.balance.to_string(), "1000.00");
    }

    #[test]
    fn assigned_id_reads_unchanged_value() {
        let m = Model { id: 3, account_number: "1".into(), account_holder_name: "A".into(), balance: Decimal::ZERO };
        let am: ActiveModel = m.into();
        assert_eq!(assigned_id(&am), Some(3));
    }

    #[test]
    fn materialize_rejects_missing_columns() {
        let am = ActiveModel { id: NotSet, account_number: Set("1".into()), account_holder_name: NotSet, balance: NotSet };
        let err = materialize(am, 1).unwrap_err();
        assert!(err.to_string().contains("account_holder_name"));
    }
}
